//! Documents and the interfaces of their sources and sinks.
use std::io;

use hashbrown::HashMap;

use crate::errors::{NeardupError, Result};

/// Raw content of a document with its identifying label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    label: String,
    content: Vec<u8>,
}

impl Document {
    /// Creates a document.
    pub fn new<S, B>(label: S, content: B) -> Self
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Gets the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Gets the raw content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Supplier of raw documents addressed by identifiers, e.g., paths.
pub trait DocumentSource {
    /// Fetches the document of `id`.
    ///
    /// # Errors
    ///
    /// [`NeardupError::SourceUnavailable`] is returned if the document cannot be obtained.
    fn fetch(&self, id: &str) -> Result<Document>;
}

/// Documents held in memory, keyed by their labels.
impl DocumentSource for HashMap<String, Vec<u8>> {
    fn fetch(&self, id: &str) -> Result<Document> {
        self.get(id)
            .map(|content| Document::new(id, content.clone()))
            .ok_or_else(|| {
                NeardupError::source_unavailable(
                    id,
                    io::Error::new(io::ErrorKind::NotFound, "no such document"),
                )
            })
    }
}

/// Receiver of normalized text for inspection.
pub trait NormalizedSink {
    /// Stores the normalized text of the document labeled `label`.
    fn store(&self, label: &str, normalized: &[u8]) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let mut source = HashMap::new();
        source.insert("a".to_string(), b"text".to_vec());

        let doc = source.fetch("a").unwrap();
        assert_eq!(doc.label(), "a");
        assert_eq!(doc.content(), b"text");

        assert!(matches!(
            source.fetch("b"),
            Err(NeardupError::SourceUnavailable { id, .. }) if id == "b"
        ));
    }
}
