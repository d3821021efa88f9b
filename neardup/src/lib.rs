//! Near-duplicate detection of web documents.
//!
//! A document is reduced to a 64-bit SimHash fingerprint in three steps:
//! non-content regions such as `<head>`, `<script>`, or `<footer>` are removed,
//! the remaining text is split into word features, and the hashed features vote
//! on each bit of the fingerprint. Two fingerprints are then compared by their
//! Hamming distance.
//!
//! # Examples
//!
//! ```
//! use neardup::{Fingerprinter, Relationship};
//!
//! let fingerprinter = Fingerprinter::default();
//! let a = fingerprinter.fingerprint(b"<head><title>v1</title></head><p>Welcome to Jimbocho</p>");
//! let b = fingerprinter.fingerprint(b"<head><title>v2</title></head><p>Welcome to Jimbocho</p>");
//!
//! let result = neardup::compare(a, b);
//! assert_eq!(result.distance, 0);
//! assert_eq!(result.similarity, 100.);
//! assert_eq!(result.relationship, Relationship::Identical);
//! ```
#![deny(missing_docs)]

pub mod collection;
pub mod document;
pub mod errors;
pub mod feature;
pub mod fingerprint;
pub mod normalize;

pub use collection::{Collection, Collector};
pub use document::{Document, DocumentSource, NormalizedSink};
pub use errors::{NeardupError, Result};
pub use feature::{extract_features, Feature};
pub use fingerprint::{FingerprintedDocument, Fingerprinter};
pub use hamming_relation::{compare, Comparison, Relationship};
pub use lsh::Fingerprint;
pub use normalize::{normalize, Region};

/// Builds the fingerprint of features with the default seed.
pub fn build_fingerprint(features: &[Feature]) -> Fingerprint {
    Fingerprinter::default().build_fingerprint(features)
}
