//! Word-partitioned parallel strategy.
//!
//! The corpus is built once and shared read-only. The target words are split
//! into disjoint shards, one per worker, and every worker scans the full
//! corpus for each of its words. Since no two workers own the same word, no
//! two workers ever write the same key: the shared map only has to tolerate
//! concurrent inserts of distinct keys, which `DashMap` does without any
//! lock held by the caller.

use crate::aggregator::Aggregator;
use crate::context::CountContext;
use crate::error::Result;
use crate::types::{ResultMap, Strategy, Workers};

#[cfg(feature = "parallel")]
use crate::aggregators::{shard, worker_pool};
#[cfg(feature = "parallel")]
use crate::counter::frequency;
#[cfg(feature = "parallel")]
use dashmap::DashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts target words in parallel, one shard of words per worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelByWord {
  workers: Workers,
}

impl ParallelByWord {
  pub fn new(workers: Workers) -> Self {
    Self { workers }
  }

  #[cfg(feature = "parallel")]
  fn run(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    let corpus = context.source.corpus(context.documents)?;
    let words = context.targets.as_slice();
    let workers = self.workers.resolve(words.len());
    let results: DashMap<String, usize> = DashMap::with_capacity(words.len());

    log::debug!(
      "counting {} words over {} tokens with {} workers",
      words.len(),
      corpus.len(),
      workers
    );

    let pool = worker_pool(workers)?;
    pool.install(|| {
      shard(words, workers)
        .into_par_iter()
        .enumerate()
        .for_each(|(worker, words)| {
          log::debug!("worker {} of {} owns {} words", worker, workers, words.len());
          for word in words {
            log::trace!("worker {} of {} is evaluating word '{}'", worker, workers, word);
            results.insert(word.clone(), frequency(word, &corpus));
          }
        })
    });

    Ok(results.into_iter().collect())
  }

  #[cfg(not(feature = "parallel"))]
  fn run(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    log::warn!("built without the `parallel` feature, counting words serially");
    crate::aggregators::serial::count_by_word(context)
  }
}

impl Aggregator for ParallelByWord {
  fn strategy(&self) -> Strategy {
    Strategy::ParallelByWord
  }

  fn aggregate(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    self.run(context)
  }
}
