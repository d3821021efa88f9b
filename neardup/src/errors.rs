//! Error definitions.
use std::{io, result};

use hamming_relation::errors::HammingRelationError;
use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = NeardupError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Error)]
pub enum NeardupError {
    /// A document could not be obtained from its source.
    /// It only excludes that document from the comparison.
    #[error("SourceUnavailable: could not read {id}: {source}")]
    SourceUnavailable {
        /// Identifier of the document.
        id: String,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },

    /// Fewer than two documents are usable, so no comparison is produced.
    #[error("InsufficientDocuments: {available} usable document(s), at least 2 are required")]
    InsufficientDocuments {
        /// Number of usable documents.
        available: usize,
    },

    /// Contains [`HammingRelationError`].
    #[error(transparent)]
    Relation(HammingRelationError),
}

impl NeardupError {
    pub(crate) fn source_unavailable<S>(id: S, source: io::Error) -> Self
    where
        S: Into<String>,
    {
        Self::SourceUnavailable {
            id: id.into(),
            source,
        }
    }
}

impl From<HammingRelationError> for NeardupError {
    fn from(e: HammingRelationError) -> Self {
        match e {
            HammingRelationError::InsufficientSketches { found } => {
                Self::InsufficientDocuments { available: found }
            }
            e => Self::Relation(e),
        }
    }
}
