//! Inputs shared by every worker of a counting run.

use crate::source::DocumentSource;
use crate::types::{DocumentId, TargetWords};

/// Read-only inputs of one counting run.
///
/// Everything in here is borrowed and never mutated for the duration of a
/// run, so workers share it without copying or locking.
#[derive(Clone, Copy)]
pub struct CountContext<'a> {
  /// Resolves document ids to their text.
  pub source: &'a dyn DocumentSource,
  /// The documents to count over, in order.
  pub documents: &'a [DocumentId],
  /// The vocabulary to count.
  pub targets: &'a TargetWords,
}

impl<'a> CountContext<'a> {
  pub fn new(
    source: &'a dyn DocumentSource,
    documents: &'a [DocumentId],
    targets: &'a TargetWords,
  ) -> Self {
    Self {
      source,
      documents,
      targets,
    }
  }
}

impl std::fmt::Debug for CountContext<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CountContext")
      .field("documents", &self.documents)
      .field("targets", &self.targets)
      .finish_non_exhaustive()
  }
}
