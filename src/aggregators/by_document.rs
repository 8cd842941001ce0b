//! Document-partitioned parallel strategy.
//!
//! The result map is seeded with every target word at zero before any worker
//! starts, so workers only ever update existing keys. Each worker tokenizes
//! its own shard of documents and builds a private `PartialCount` without any
//! synchronization. The merge into the shared map is the only contended
//! region: it happens under a single mutex, taken once per worker and
//! released when the guard drops.

use crate::aggregator::Aggregator;
use crate::context::CountContext;
use crate::error::Result;
use crate::types::{ResultMap, Strategy, Workers};

#[cfg(feature = "parallel")]
use crate::aggregators::{shard, worker_pool};
#[cfg(feature = "parallel")]
use crate::counter::partial_count;
#[cfg(feature = "parallel")]
use crate::types::PartialCount;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::{Mutex, PoisonError};

/// Counts documents in parallel, one shard of documents per worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelByDocument {
  workers: Workers,
}

/// Adds a worker's partial counts into the shared map.
///
/// Holds the lock for the whole read-modify-write of every shared counter.
/// A worker that panics mid-merge takes the whole run down with it, so a
/// poisoned map is never handed back to a caller.
#[cfg(feature = "parallel")]
fn merge(results: &Mutex<ResultMap>, partial: PartialCount) {
  let mut results = results.lock().unwrap_or_else(PoisonError::into_inner);
  for (word, count) in partial {
    if let Some(total) = results.get_mut(&word) {
      *total += count;
    }
  }
}

impl ParallelByDocument {
  pub fn new(workers: Workers) -> Self {
    Self { workers }
  }

  #[cfg(feature = "parallel")]
  fn run(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    let documents = context.documents;
    let targets = context.targets;
    let workers = self.workers.resolve(documents.len());
    let results = Mutex::new(targets.zeroed());

    log::debug!(
      "counting {} words over {} documents with {} workers",
      targets.len(),
      documents.len(),
      workers
    );

    let pool = worker_pool(workers)?;
    pool.install(|| {
      shard(documents, workers)
        .into_par_iter()
        .enumerate()
        .try_for_each(|(worker, documents)| -> Result<()> {
          log::debug!("worker {} of {} owns {} documents", worker, workers, documents.len());
          let mut partial = PartialCount::with_capacity(targets.len());
          for id in documents {
            log::trace!("worker {} of {} is evaluating document {}", worker, workers, id);
            let tokens = context.source.tokens(id)?;
            for (word, count) in partial_count(targets, &tokens) {
              *partial.entry(word).or_insert(0) += count;
            }
          }
          merge(&results, partial);
          Ok(())
        })
    })?;

    Ok(results.into_inner().unwrap_or_else(PoisonError::into_inner))
  }

  #[cfg(not(feature = "parallel"))]
  fn run(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    log::warn!("built without the `parallel` feature, counting documents serially");
    crate::aggregators::serial::count_by_document(context)
  }
}

impl Aggregator for ParallelByDocument {
  fn strategy(&self) -> Strategy {
    Strategy::ParallelByDocument
  }

  fn aggregate(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    self.run(context)
  }
}
