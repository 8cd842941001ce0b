//! Filesystem document source.

use crate::error::{Error, Result};
use crate::source::adapter::DocumentSource;
use crate::types::DocumentId;
use std::path::PathBuf;

/// Document source that reads document ids as file paths.
///
/// Relative ids are resolved against an optional root directory, absolute ids
/// are used as they are.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
  root: Option<PathBuf>,
}

impl FsSource {
  /// A source resolving ids against the current directory.
  pub fn new() -> Self {
    Self::default()
  }

  /// A source resolving relative ids against `root`.
  pub fn with_root(root: impl Into<PathBuf>) -> Self {
    Self {
      root: Some(root.into()),
    }
  }

  /// The path a document id resolves to.
  pub fn resolve(&self, id: &str) -> PathBuf {
    match &self.root {
      Some(root) => root.join(id),
      None => PathBuf::from(id),
    }
  }
}

impl DocumentSource for FsSource {
  fn load(&self, id: &DocumentId) -> Result<String> {
    let path = self.resolve(id);
    let bytes = std::fs::read(&path).map_err(|e| Error::unavailable(id.clone(), e))?;
    log::debug!("loaded '{}' ({} bytes)", path.display(), bytes.len());
    // Stray non-UTF-8 bytes are replaced rather than dropping the document.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
  }
}
