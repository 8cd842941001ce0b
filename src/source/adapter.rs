//! Defines the `DocumentSource` trait for pluggable document loading.

use crate::error::Result;
use crate::tokenizer::tokenize;
use crate::types::{Corpus, DocumentId};

/// A trait that resolves document identifiers to their text.
///
/// The aggregators only ever see token sequences; how a document id turns
/// into text (a file on disk, an in-memory fixture) is up to the source.
///
/// The `Send` and `Sync` bounds are required so that document-partitioned
/// workers can load their own documents concurrently.
pub trait DocumentSource: Send + Sync {
  /// Loads the full text of a document.
  ///
  /// # Errors
  ///
  /// Returns [`crate::error::Error::DocumentUnavailable`] when the document
  /// cannot be read. Callers must treat this as fatal: counting over an
  /// incomplete corpus silently undercounts.
  fn load(&self, id: &DocumentId) -> Result<String>;

  /// Loads and tokenizes a single document.
  fn tokens(&self, id: &DocumentId) -> Result<Corpus> {
    Ok(tokenize(&self.load(id)?))
  }

  /// Loads and tokenizes every document, concatenated in list order.
  ///
  /// Stops at the first document that fails to load.
  fn corpus(&self, ids: &[DocumentId]) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for id in ids {
      corpus.extend(self.tokens(id)?);
    }
    Ok(corpus)
  }
}
