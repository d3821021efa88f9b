//! SimHash for the Cosine similarity of weighted token features.
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::{Fingerprint, FINGERPRINT_BITS};

/// Weighted SimHash over token features.
///
/// Each feature votes on every bit position with its weight: positively where its
/// hash has a one, negatively where it has a zero. A bit of the fingerprint is set
/// only if its vote total is strictly positive, so ties resolve to zero.
///
/// # Reference
///
/// * https://dl.acm.org/doi/10.1145/509907.509965
#[derive(Clone, Copy, Debug)]
pub struct SimHasher {
    seed: u64,
}

impl SimHasher {
    /// Creates a hasher whose token hashes are derived from `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Gets the seed of token hashing.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Hashes a token into 64 uniformly distributed bits.
    #[inline(always)]
    pub fn hash_token(&self, token: &[u8]) -> u64 {
        xxh3_64_with_seed(token, self.seed)
    }

    /// Builds a fingerprint from a sequence of tokens, each occurrence weighing 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsh::SimHasher;
    ///
    /// let hasher = SimHasher::new(42);
    /// let a = hasher.fingerprint(["to", "be", "or", "not", "to", "be"]);
    /// let b = hasher.fingerprint(["be", "to", "not", "or", "be", "to"]);
    /// assert_eq!(a, b);
    /// assert_eq!(hasher.fingerprint(Vec::<&str>::new()).bits(), 0);
    /// ```
    pub fn fingerprint<I, T>(&self, tokens: I) -> Fingerprint
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut acc = SimHashAccumulator::new();
        for token in tokens {
            acc.add(self.hash_token(token.as_ref()), 1);
        }
        acc.finish()
    }

    /// Builds a fingerprint from pre-hashed features and their weights.
    pub fn fingerprint_weighted(&self, feats: &[(u64, i64)]) -> Fingerprint {
        let mut acc = SimHashAccumulator::new();
        for &(h, w) in feats {
            acc.add(h, w);
        }
        acc.finish()
    }
}

/// Signed vote counters, one per bit position.
#[derive(Clone, Debug)]
pub struct SimHashAccumulator {
    weights: [i64; FINGERPRINT_BITS],
}

impl Default for SimHashAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimHashAccumulator {
    /// Creates an accumulator with all counters at zero.
    pub const fn new() -> Self {
        Self {
            weights: [0; FINGERPRINT_BITS],
        }
    }

    /// Adds the votes of a feature hash with the given weight.
    #[inline(always)]
    pub fn add(&mut self, h: u64, weight: i64) {
        for (j, w) in self.weights.iter_mut().enumerate() {
            if (h >> j) & 1 == 1 {
                *w += weight;
            } else {
                *w -= weight;
            }
        }
    }

    /// Gets the current counters, where index `j` corresponds to bit `j`.
    pub const fn weights(&self) -> &[i64; FINGERPRINT_BITS] {
        &self.weights
    }

    /// Produces the fingerprint of the votes so far.
    pub fn finish(&self) -> Fingerprint {
        Fingerprint(
            self.weights
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w > 0)
                .fold(0u64, |acc, (j, _)| acc | (1 << j)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        let hasher = SimHasher::new(7);
        assert_eq!(hasher.fingerprint(Vec::<&[u8]>::new()), Fingerprint(0));
        assert_eq!(hasher.fingerprint_weighted(&[]), Fingerprint(0));
    }

    #[test]
    fn test_single_feature_is_its_hash() {
        let hasher = SimHasher::new(7);
        let h = hasher.hash_token(b"alpha");
        assert_eq!(hasher.fingerprint([b"alpha"]), Fingerprint(h));
    }

    #[test]
    fn test_ties_resolve_to_zero() {
        let mut acc = SimHashAccumulator::new();
        acc.add(0xffff_0000_ffff_0000, 1);
        acc.add(0x0000_ffff_0000_ffff, 1);
        assert!(acc.weights().iter().all(|&w| w == 0));
        assert_eq!(acc.finish(), Fingerprint(0));
    }

    #[test]
    fn test_majority_vote() {
        let mut acc = SimHashAccumulator::new();
        acc.add(0b1100, 1);
        acc.add(0b1010, 1);
        acc.add(0b1001, 1);
        assert_eq!(acc.finish(), Fingerprint(0b1000));
    }

    #[test]
    fn test_weight_equals_repetition() {
        let hasher = SimHasher::new(3);
        let repeated = hasher.fingerprint(["x", "x", "x", "y", "z"]);
        let weighted = hasher.fingerprint_weighted(&[
            (hasher.hash_token(b"x"), 3),
            (hasher.hash_token(b"y"), 1),
            (hasher.hash_token(b"z"), 1),
        ]);
        assert_eq!(repeated, weighted);
    }

    #[test]
    fn test_seed_changes_hash() {
        assert_ne!(
            SimHasher::new(1).hash_token(b"token"),
            SimHasher::new(2).hash_token(b"token")
        );
    }

    #[test]
    fn test_order_independent() {
        let hasher = SimHasher::new(11);
        let a = hasher.fingerprint(["a", "b", "c", "d", "a"]);
        let b = hasher.fingerprint(["d", "a", "c", "a", "b"]);
        assert_eq!(a, b);
    }
}
