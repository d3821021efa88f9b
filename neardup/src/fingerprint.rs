//! The per-document pipeline from raw markup to a fingerprint.
use hashbrown::HashMap;
use lsh::{Fingerprint, SimHasher};
use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::document::Document;
use crate::feature::{Feature, FeatureConfig, FeatureExtractor};
use crate::normalize::{Normalizer, Region};

/// Seed used when none is given, so that fingerprints are stable across runs.
pub const DEFAULT_SEED: u64 = 0x6e65_6172_6475_7000;

/// A document reduced to its fingerprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FingerprintedDocument {
    /// Label of the source document.
    pub label: String,
    /// Content after removing non-content regions.
    pub normalized: Vec<u8>,
    /// Number of features, counting repetitions.
    pub num_features: usize,
    /// Fingerprint of the features.
    pub fingerprint: Fingerprint,
}

/// Normalizes documents, extracts their features, and builds their fingerprints.
///
/// Fingerprints are comparable only between instances created with the same seed.
#[derive(Clone, Debug)]
pub struct Fingerprinter {
    normalizer: Normalizer,
    extractor: FeatureExtractor,
    hasher: SimHasher,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Fingerprinter {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed value for hashing features. If `None`, [`DEFAULT_SEED`] is used.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        let mut seeder = rand_xoshiro::SplitMix64::seed_from_u64(seed);
        Self {
            normalizer: Normalizer::default(),
            extractor: FeatureExtractor::default(),
            hasher: SimHasher::new(seeder.next_u64()),
        }
    }

    /// Folds features to lowercase?
    pub fn lowercase(mut self, yes: bool) -> Self {
        self.extractor = FeatureExtractor::new(FeatureConfig::new(yes));
        self
    }

    /// Sets the regions removed in normalization.
    pub fn regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = Region>,
    {
        self.normalizer = Normalizer::new(regions);
        self
    }

    /// Gets the normalizer.
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Gets the configuration of feature extraction.
    pub const fn config(&self) -> FeatureConfig {
        self.extractor.config()
    }

    /// Gets the feature hasher.
    pub const fn hasher(&self) -> &SimHasher {
        &self.hasher
    }

    /// Builds the fingerprint of a feature sequence. An empty sequence gives all zero bits.
    pub fn build_fingerprint(&self, features: &[Feature]) -> Fingerprint {
        self.hasher.fingerprint(features)
    }

    /// Aggregates repeated features into pairs of the feature hash and its count,
    /// sorted by the hash.
    pub fn weighted_features(&self, features: &[Feature]) -> Vec<(u64, i64)> {
        let mut counter = HashMap::<u64, i64>::new();
        for f in features {
            *counter
                .entry(self.hasher.hash_token(f.as_bytes()))
                .or_insert(0) += 1;
        }
        let mut weighted: Vec<_> = counter.into_iter().collect();
        weighted.sort_unstable();
        weighted
    }

    /// Computes the fingerprint of raw markup.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardup::Fingerprinter;
    ///
    /// let fingerprinter = Fingerprinter::new(Some(42));
    /// let a = fingerprinter.fingerprint(b"<header>Menu A</header><p>Same body text</p>");
    /// let b = fingerprinter.fingerprint(b"<header>Menu B</header><p>Same body text</p>");
    /// assert_eq!(a, b);
    /// ```
    pub fn fingerprint(&self, raw: &[u8]) -> Fingerprint {
        self.process_bytes(raw).1
    }

    /// Runs the whole pipeline on a document.
    pub fn process(&self, document: &Document) -> FingerprintedDocument {
        let (normalized, fingerprint, num_features) = self.process_bytes(document.content());
        log::debug!(
            "Fingerprinted {}: {} -> {} bytes, {} features, {}",
            document.label(),
            document.content().len(),
            normalized.len(),
            num_features,
            fingerprint
        );
        FingerprintedDocument {
            label: document.label().to_string(),
            normalized,
            num_features,
            fingerprint,
        }
    }

    /// Runs the pipeline on documents one by one.
    pub fn process_all(&self, documents: &[Document]) -> Vec<FingerprintedDocument> {
        documents.iter().map(|doc| self.process(doc)).collect()
    }

    /// Runs the pipeline on documents in parallel, keeping the input order.
    pub fn process_all_in_parallel(&self, documents: &[Document]) -> Vec<FingerprintedDocument> {
        documents.par_iter().map(|doc| self.process(doc)).collect()
    }

    fn process_bytes(&self, raw: &[u8]) -> (Vec<u8>, Fingerprint, usize) {
        let normalized = self.normalizer.normalize(raw);
        let (fingerprint, num_features) = {
            let mut features = vec![];
            self.extractor.extract(&normalized, &mut features);
            (self.build_fingerprint(&features), features.len())
        };
        (normalized, fingerprint, num_features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::feature::extract_features;

    #[test]
    fn test_deterministic() {
        let raw = b"<html><body><p>Lorem ipsum dolor sit amet</p></body></html>";
        assert_eq!(
            Fingerprinter::default().fingerprint(raw),
            Fingerprinter::default().fingerprint(raw)
        );
        assert_eq!(
            Fingerprinter::new(Some(7)).fingerprint(raw),
            Fingerprinter::new(Some(7)).fingerprint(raw)
        );
    }

    #[test]
    fn test_script_only_is_zero() {
        let fingerprinter = Fingerprinter::default();
        let doc = Document::new("s", &b"<script>var x = 1; alert(x);</script>"[..]);
        let processed = fingerprinter.process(&doc);
        assert!(processed.normalized.is_empty());
        assert_eq!(processed.num_features, 0);
        assert_eq!(processed.fingerprint, Fingerprint(0));
    }

    #[test]
    fn test_weighted_matches_sequence() {
        let fingerprinter = Fingerprinter::new(Some(1));
        let features = extract_features(b"a rose is a rose is a rose");
        let weighted = fingerprinter.weighted_features(&features);
        assert_eq!(weighted.len(), 3);
        assert_eq!(weighted.iter().map(|&(_, w)| w).sum::<i64>(), 8);
        assert_eq!(
            fingerprinter.hasher().fingerprint_weighted(&weighted),
            fingerprinter.build_fingerprint(&features)
        );
    }

    #[test]
    fn test_lowercase() {
        let folded = Fingerprinter::default().lowercase(true);
        assert_eq!(
            folded.fingerprint(b"The Quick Brown Fox"),
            folded.fingerprint(b"the quick brown fox")
        );
        let preserved = Fingerprinter::default();
        assert_ne!(
            preserved.fingerprint(b"The Quick Brown Fox"),
            preserved.fingerprint(b"the quick brown fox")
        );
    }

    #[test]
    fn test_regions() {
        let raw = b"<footer>Contact us at the office</footer><p>Body</p>";
        let all = Fingerprinter::default();
        let none = Fingerprinter::default().regions([]);
        assert_eq!(all.fingerprint(raw), all.fingerprint(b"<p>Body</p>"));
        assert_ne!(none.fingerprint(raw), none.fingerprint(b"<p>Body</p>"));
    }

    #[test]
    fn test_parallel_keeps_order() {
        let fingerprinter = Fingerprinter::default();
        let documents: Vec<_> = (0..32)
            .map(|i| Document::new(format!("doc{i}"), format!("<p>document number {i}</p>")))
            .collect();
        assert_eq!(
            fingerprinter.process_all(&documents),
            fingerprinter.process_all_in_parallel(&documents)
        );
    }
}
