//! This library interprets the Hamming distance between two 64-bit fingerprints
//! as a similarity percentage and a qualitative relationship, and compares
//! collections of fingerprints pairwise.
#![deny(missing_docs)]

pub mod comparison;
pub mod errors;
pub mod pairwise;
pub mod relationship;

pub use comparison::{compare, similarity_percent, Comparison};
pub use pairwise::PairwiseComparer;
pub use relationship::Relationship;
