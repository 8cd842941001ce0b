//! The `Aggregator` trait, implemented by every counting strategy.

use crate::context::CountContext;
use crate::error::Result;
use crate::types::{ResultMap, Strategy};

/// A counting strategy that turns a document list and a target vocabulary
/// into a [`ResultMap`].
///
/// Every implementation must produce exactly the same map for the same
/// inputs: one entry per target word, holding the number of tokens across
/// all documents equal to that word, ignoring case. Strategies only differ in
/// how the work is partitioned and how partial results are combined.
///
/// The `Send` and `Sync` bounds allow boxed aggregators to be handed to other
/// threads, e.g. by a benchmark harness.
pub trait Aggregator: Send + Sync {
  /// Returns the `Strategy` this aggregator implements.
  fn strategy(&self) -> Strategy;

  /// Runs the aggregation to completion.
  ///
  /// # Errors
  ///
  /// Fails with [`crate::error::Error::DocumentUnavailable`] as soon as any
  /// document cannot be loaded. No partial result is returned in that case.
  fn aggregate(&self, context: &CountContext<'_>) -> Result<ResultMap>;
}
