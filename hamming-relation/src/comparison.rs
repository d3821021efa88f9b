//! Pairwise comparison of two fingerprints.
use lsh::{Fingerprint, FINGERPRINT_BITS};

use crate::relationship::Relationship;

const DIMENSION: u32 = FINGERPRINT_BITS as u32;

/// Result of comparing two fingerprints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Number of differing bits, within `[0,64]`.
    pub distance: u32,
    /// Similarity in percent, within `[0,100]`.
    pub similarity: f64,
    /// Qualitative bucket of the distance.
    pub relationship: Relationship,
}

/// Computes `(64 - distance) / 64 * 100`, clamped to `[0,100]`.
pub fn similarity_percent(distance: u32) -> f64 {
    let distance = distance.min(DIMENSION);
    (f64::from(DIMENSION - distance) / f64::from(DIMENSION) * 100.).clamp(0., 100.)
}

/// Compares two fingerprints.
///
/// # Examples
///
/// ```
/// use hamming_relation::{compare, Relationship};
/// use lsh::Fingerprint;
///
/// let c = compare(Fingerprint(0b0101), Fingerprint(0b0110));
/// assert_eq!(c.distance, 2);
/// assert_eq!(c.similarity, 96.875);
/// assert_eq!(c.relationship, Relationship::NearDuplicates);
/// ```
pub fn compare(a: Fingerprint, b: Fingerprint) -> Comparison {
    let distance = a.hamming_distance(b);
    Comparison {
        distance,
        similarity: similarity_percent(distance),
        relationship: Relationship::from_distance(distance),
    }
}
