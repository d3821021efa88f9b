//! Error definitions.
use std::result;

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = HammingRelationError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error, PartialEq)]
pub enum HammingRelationError {
    /// Fewer than two fingerprints were given to a pairwise comparison.
    #[error("InsufficientSketches: {found} fingerprint(s) given, at least 2 are required")]
    InsufficientSketches {
        /// Number of fingerprints available.
        found: usize,
    },

    /// The search radius is not within `[0,1]`.
    #[error("InputError: radius must be within [0,1], but got {0}")]
    InvalidRadius(f64),
}
