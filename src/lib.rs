//! Wordtally - counts a fixed vocabulary of target words across a corpus.
//!
//! Wordtally compares two ways of parallelizing the count against a serial
//! baseline: partitioning the *target words* across workers, or partitioning
//! the *documents* across workers. Every strategy returns the same
//! [`ResultMap`](crate::types::ResultMap) for the same inputs.
//!
//! ```rust
//! use wordtally::prelude::*;
//!
//! let source = MemorySource::new().with("play", "The cat sat. The dog sat.");
//! let documents = vec!["play".to_string()];
//! let targets = TargetWords::new(["the", "sat", "cat"]);
//!
//! for strategy in Strategy::ALL {
//!   let results = count(strategy, &source, &documents, &targets).unwrap();
//!   assert_eq!(results["the"], 2);
//!   assert_eq!(results["sat"], 2);
//!   assert_eq!(results["cat"], 1);
//! }
//! ```

pub mod aggregator;
pub mod aggregators;
pub mod config;
pub mod context;
pub mod counter;
pub mod error;
pub mod source;
pub mod tokenizer;
pub mod types;

use crate::context::CountContext;
use crate::source::DocumentSource;
use crate::types::{DocumentId, ResultMap, Strategy, TargetWords, Workers};

/// Counts `targets` over `documents` with the given strategy and as many
/// workers as the machine offers.
pub fn count(
  strategy: Strategy,
  source: &dyn DocumentSource,
  documents: &[DocumentId],
  targets: &TargetWords,
) -> error::Result<ResultMap> {
  let context = CountContext::new(source, documents, targets);
  aggregators::aggregator(strategy, Workers::Auto).aggregate(&context)
}

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::aggregator::*;
  pub use crate::aggregators::*;
  pub use crate::config::RunConfig;
  pub use crate::context::*;
  pub use crate::count;
  pub use crate::error::{Error, Result};
  pub use crate::source::*;
  pub use crate::types::*;
}
