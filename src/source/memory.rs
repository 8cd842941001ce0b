//! In-memory document source.

use crate::error::{Error, Result};
use crate::source::adapter::DocumentSource;
use crate::types::DocumentId;
use std::collections::HashMap;
use std::io;

/// Document source backed by a `HashMap` of id to text.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  documents: HashMap<DocumentId, String>,
}

impl MemorySource {
  /// Create a new empty in-memory source.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds or replaces a document.
  pub fn insert(&mut self, id: impl Into<DocumentId>, text: impl Into<String>) {
    self.documents.insert(id.into(), text.into());
  }

  /// Adds a document, builder style.
  pub fn with(mut self, id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
    self.insert(id, text);
    self
  }
}

impl<I, S> FromIterator<(I, S)> for MemorySource
where
  I: Into<DocumentId>,
  S: Into<String>,
{
  fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
    let mut source = Self::new();
    for (id, text) in iter {
      source.insert(id, text);
    }
    source
  }
}

impl DocumentSource for MemorySource {
  fn load(&self, id: &DocumentId) -> Result<String> {
    self.documents.get(id).cloned().ok_or_else(|| {
      Error::unavailable(
        id.clone(),
        io::Error::new(io::ErrorKind::NotFound, "no such document in memory"),
      )
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_and_tokens() {
    let source = MemorySource::new().with("a", "The cat sat.");
    assert_eq!(source.load(&"a".to_string()).unwrap(), "The cat sat.");
    assert_eq!(source.tokens(&"a".to_string()).unwrap(), vec!["The", "cat", "sat", "."]);
  }

  #[test]
  fn test_corpus_concatenates_in_order() {
    let source: MemorySource = [("a", "one two"), ("b", "three")].into_iter().collect();
    let ids = vec!["b".to_string(), "a".to_string()];
    assert_eq!(source.corpus(&ids).unwrap(), vec!["three", "one", "two"]);
  }

  #[test]
  fn test_missing_document_is_unavailable() {
    let source = MemorySource::new().with("a", "text");
    let ids = vec!["a".to_string(), "missing".to_string()];
    match source.corpus(&ids) {
      Err(Error::DocumentUnavailable { id, source }) => {
        assert_eq!(id, "missing");
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
      }
      other => panic!("expected DocumentUnavailable, got {other:?}"),
    }
  }
}
