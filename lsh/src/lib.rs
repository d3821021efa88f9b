//! Locality-sensitive fingerprints of 64 bits.
#![deny(missing_docs)]

pub mod simhash;

use std::fmt;

pub use simhash::{SimHashAccumulator, SimHasher};

/// Number of bits in a [`Fingerprint`].
pub const FINGERPRINT_BITS: usize = 64;

/// A 64-bit fingerprint summarizing a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Gets the raw bits.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Counts the bit positions in which two fingerprints differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use lsh::Fingerprint;
    ///
    /// let a = Fingerprint(0b1011);
    /// let b = Fingerprint(0b0110);
    /// assert_eq!(a.hamming_distance(b), 3);
    /// ```
    #[inline(always)]
    pub const fn hamming_distance(self, rhs: Self) -> u32 {
        (self.0 ^ rhs.0).count_ones()
    }
}

impl From<u64> for Fingerprint {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Fingerprint> for u64 {
    fn from(f: Fingerprint) -> Self {
        f.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
