//! An exhaustive pairwise comparison of fingerprints.
use lsh::{Fingerprint, FINGERPRINT_BITS};

use crate::comparison::{compare, Comparison};
use crate::errors::{HammingRelationError, Result};

/// Compares every pair of stored fingerprints.
#[derive(Clone, Debug, Default)]
pub struct PairwiseComparer {
    fingerprints: Vec<Fingerprint>,
}

impl PairwiseComparer {
    /// Creates an empty instance.
    pub const fn new() -> Self {
        Self {
            fingerprints: vec![],
        }
    }

    /// Appends a fingerprint, whose id is the number of fingerprints stored before it.
    pub fn add(&mut self, fingerprint: Fingerprint) {
        self.fingerprints.push(fingerprint);
    }

    /// Compares all pairs `(i, j)` with `i < j`, in lexicographic order.
    ///
    /// # Errors
    ///
    /// [`HammingRelationError::InsufficientSketches`] is returned if fewer than two
    /// fingerprints are stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamming_relation::PairwiseComparer;
    /// use lsh::Fingerprint;
    ///
    /// let mut comparer = PairwiseComparer::new();
    /// comparer.add(Fingerprint(0b000));
    /// comparer.add(Fingerprint(0b001));
    /// comparer.add(Fingerprint(0b111));
    ///
    /// let distances: Vec<_> = comparer
    ///     .all_pairs()
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|(i, j, c)| (i, j, c.distance))
    ///     .collect();
    /// assert_eq!(distances, vec![(0, 1, 1), (0, 2, 3), (1, 2, 2)]);
    /// ```
    pub fn all_pairs(&self) -> Result<Vec<(usize, usize, Comparison)>> {
        self.check_sufficient()?;
        let mut results = Vec::with_capacity(self.num_pairs());
        for (i, &x) in self.fingerprints.iter().enumerate() {
            for (j, &y) in self.fingerprints.iter().enumerate().skip(i + 1) {
                results.push((i, j, compare(x, y)));
            }
        }
        log::debug!(
            "[PairwiseComparer::all_pairs] #fingerprints={}, #pairs={}",
            self.num_fingerprints(),
            results.len()
        );
        Ok(results)
    }

    /// Finds all pairs whose normalized Hamming distance `distance / 64` is within `radius`.
    ///
    /// # Errors
    ///
    /// [`HammingRelationError::InvalidRadius`] is returned if `radius` is not within `[0,1]`,
    /// and [`HammingRelationError::InsufficientSketches`] if fewer than two fingerprints are stored.
    pub fn similar_pairs(&self, radius: f64) -> Result<Vec<(usize, usize, Comparison)>> {
        if !(0. ..=1.).contains(&radius) {
            return Err(HammingRelationError::InvalidRadius(radius));
        }
        let bound = (FINGERPRINT_BITS as f64 * radius) as u32;
        let mut matched = self.all_pairs()?;
        matched.retain(|(_, _, c)| c.distance <= bound);
        log::debug!(
            "[PairwiseComparer::similar_pairs] radius={radius}, bound={bound}, #matched={}",
            matched.len()
        );
        Ok(matched)
    }

    /// Gets the number of stored fingerprints.
    pub fn num_fingerprints(&self) -> usize {
        self.fingerprints.len()
    }

    /// Gets the number of pairs to be compared.
    pub fn num_pairs(&self) -> usize {
        let n = self.num_fingerprints();
        n * n.saturating_sub(1) / 2
    }

    /// Gets the stored fingerprints.
    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.fingerprints
    }

    fn check_sufficient(&self) -> Result<()> {
        if self.num_fingerprints() < 2 {
            return Err(HammingRelationError::InsufficientSketches {
                found: self.num_fingerprints(),
            });
        }
        Ok(())
    }
}

impl FromIterator<Fingerprint> for PairwiseComparer {
    fn from_iter<I: IntoIterator<Item = Fingerprint>>(iter: I) -> Self {
        Self {
            fingerprints: iter.into_iter().collect(),
        }
    }
}
