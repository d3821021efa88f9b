//! Gathering documents from a source and comparing them pairwise.
use hamming_relation::{Comparison, PairwiseComparer};

use crate::document::{Document, DocumentSource, NormalizedSink};
use crate::errors::{NeardupError, Result};
use crate::fingerprint::{FingerprintedDocument, Fingerprinter};

/// Fetches and fingerprints documents, dropping those that cannot be obtained.
pub struct Collector<'a> {
    fingerprinter: &'a Fingerprinter,
    sink: Option<&'a dyn NormalizedSink>,
    in_parallel: bool,
}

impl<'a> Collector<'a> {
    /// Creates an instance.
    pub const fn new(fingerprinter: &'a Fingerprinter) -> Self {
        Self {
            fingerprinter,
            sink: None,
            in_parallel: false,
        }
    }

    /// Sets a sink receiving the normalized text of every usable document.
    pub fn sink(mut self, sink: &'a dyn NormalizedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Fingerprints documents in parallel?
    pub const fn in_parallel(mut self, yes: bool) -> Self {
        self.in_parallel = yes;
        self
    }

    /// Fetches the documents of `ids` from `source` and fingerprints them.
    ///
    /// Unavailable documents are recorded in [`Collection::failures()`] and excluded,
    /// and the others keep the order of `ids`. A failure of the sink is only logged.
    pub fn collect<S, I, T>(&self, source: &S, ids: I) -> Collection
    where
        S: DocumentSource + ?Sized,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut documents = vec![];
        let mut failures = vec![];
        for id in ids {
            let id = id.as_ref();
            match source.fetch(id) {
                Ok(doc) => {
                    log::debug!("Read {} ({} bytes)", id, doc.content().len());
                    documents.push(doc);
                }
                Err(e) => {
                    log::warn!("Dropped {}: {}", id, e);
                    failures.push(e);
                }
            }
        }
        self.collect_documents(documents, failures)
    }

    /// Fingerprints documents that are already in memory.
    pub fn collect_documents(
        &self,
        documents: Vec<Document>,
        failures: Vec<NeardupError>,
    ) -> Collection {
        let documents = if self.in_parallel {
            self.fingerprinter.process_all_in_parallel(&documents)
        } else {
            self.fingerprinter.process_all(&documents)
        };
        if let Some(sink) = self.sink {
            for doc in &documents {
                if let Err(e) = sink.store(&doc.label, &doc.normalized) {
                    log::warn!("Could not store the normalized text of {}: {}", doc.label, e);
                }
            }
        }
        log::info!(
            "Fingerprinted {} document(s), dropped {}",
            documents.len(),
            failures.len()
        );
        Collection {
            documents,
            failures,
        }
    }
}

/// Fingerprinted documents of a run together with the failures of dropped ones.
#[derive(Debug)]
pub struct Collection {
    documents: Vec<FingerprintedDocument>,
    failures: Vec<NeardupError>,
}

impl Collection {
    /// Gets the usable documents.
    pub fn documents(&self) -> &[FingerprintedDocument] {
        &self.documents
    }

    /// Gets the failures of the dropped documents.
    pub fn failures(&self) -> &[NeardupError] {
        &self.failures
    }

    /// Gets the number of usable documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Checks if no document is usable.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Compares all pairs of usable documents, returning triplets of the left-side index,
    /// the right-side index, and their comparison.
    ///
    /// # Errors
    ///
    /// [`NeardupError::InsufficientDocuments`] is returned if fewer than two documents are usable.
    pub fn compare_all(&self) -> Result<Vec<(usize, usize, Comparison)>> {
        Ok(self.comparer().all_pairs()?)
    }

    /// Finds the pairs whose normalized Hamming distance is within `radius`.
    ///
    /// # Errors
    ///
    /// [`NeardupError::InsufficientDocuments`] is returned if fewer than two documents are usable,
    /// and [`NeardupError::Relation`] if `radius` is not within `[0,1]`.
    pub fn similar_pairs(&self, radius: f64) -> Result<Vec<(usize, usize, Comparison)>> {
        Ok(self.comparer().similar_pairs(radius)?)
    }

    fn comparer(&self) -> PairwiseComparer {
        self.documents.iter().map(|doc| doc.fingerprint).collect()
    }
}
