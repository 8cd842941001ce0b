//! The four counting strategies.
//!
//! # Available Aggregators
//!
//! - [`SerialByWord`](crate::aggregators::SerialByWord): one pass over the corpus per target word.
//! - [`SerialByDocument`](crate::aggregators::SerialByDocument): one pass per document, summing counts.
//! - [`ParallelByWord`](crate::aggregators::ParallelByWord): target words sharded across workers, lock-free disjoint writes.
//! - [`ParallelByDocument`](crate::aggregators::ParallelByDocument): documents sharded across workers, merged under one lock.
//!
//! # Example
//!
//! ```rust
//! use wordtally::prelude::*;
//!
//! let source = MemorySource::new().with("a", "the cat sat. the dog sat.");
//! let documents = vec!["a".to_string()];
//! let targets = TargetWords::new(["the", "sat", "cat"]);
//! let context = CountContext::new(&source, &documents, &targets);
//!
//! let aggregator = aggregator(Strategy::ParallelByDocument, Workers::Fixed(2));
//! let results = aggregator.aggregate(&context).unwrap();
//! assert_eq!(results["the"], 2);
//! ```

/// Implements the document-partitioned parallel strategy.
pub mod by_document;
/// Implements the word-partitioned parallel strategy.
pub mod by_word;
/// Implements the single-threaded strategies.
pub mod serial;

pub use by_document::ParallelByDocument;
pub use by_word::ParallelByWord;
pub use serial::{SerialByDocument, SerialByWord};

use crate::aggregator::Aggregator;
use crate::types::{Strategy, Workers};

/// Builds the aggregator for a strategy.
///
/// `workers` is ignored by the serial strategies.
pub fn aggregator(strategy: Strategy, workers: Workers) -> Box<dyn Aggregator> {
  match strategy {
    Strategy::SerialByWord => Box::new(SerialByWord),
    Strategy::SerialByDocument => Box::new(SerialByDocument),
    Strategy::ParallelByWord => Box::new(ParallelByWord::new(workers)),
    Strategy::ParallelByDocument => Box::new(ParallelByDocument::new(workers)),
  }
}

/// Splits `items` into at most `workers` contiguous, disjoint, non-empty shards.
#[cfg(feature = "parallel")]
pub(crate) fn shard<T>(items: &[T], workers: usize) -> Vec<&[T]> {
  if items.is_empty() {
    return Vec::new();
  }
  let size = items.len().div_ceil(workers.max(1));
  items.chunks(size).collect()
}

/// A dedicated pool with a fixed number of threads for one run.
#[cfg(feature = "parallel")]
pub(crate) fn worker_pool(workers: usize) -> crate::error::Result<rayon::ThreadPool> {
  rayon::ThreadPoolBuilder::new()
    .num_threads(workers)
    .thread_name(|i| format!("wordtally-worker-{i}"))
    .build()
    .map_err(|e| crate::error::Error::WorkerPool(e.to_string()))
}
