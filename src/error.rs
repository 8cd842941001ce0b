//! Error types for a counting run.

use std::io;
use std::path::PathBuf;

/// Everything that can abort a counting run.
///
/// There is no recoverable variant: loading and counting are deterministic,
/// so any failure aborts the run and no partial [`crate::types::ResultMap`]
/// is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// A named document could not be read.
  #[error("document '{id}' is unavailable: {source}")]
  DocumentUnavailable {
    id: String,
    #[source]
    source: io::Error,
  },

  /// The worker pool for a parallel run could not be started.
  #[error("failed to build worker pool: {0}")]
  WorkerPool(String),

  /// A run configuration file could not be read or parsed.
  #[error("failed to load configuration from '{}': {source}", path.display())]
  Config {
    path: PathBuf,
    #[source]
    source: ConfigSource,
  },

  /// A run configuration is structurally invalid.
  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}

/// Underlying cause of an [`Error::Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigSource {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

impl Error {
  pub(crate) fn unavailable(id: impl Into<String>, source: io::Error) -> Self {
    Error::DocumentUnavailable {
      id: id.into(),
      source,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error as _;

  #[test]
  fn test_unavailable_keeps_source() {
    let err = Error::unavailable("hamlet.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(err.to_string().contains("hamlet.txt"));
    assert!(err.source().is_some());
  }
}
