//! Single-threaded reference strategies.
//!
//! These are the correctness oracle for the parallel strategies and the
//! fallback when the crate is built without the `parallel` feature.

use crate::aggregator::Aggregator;
use crate::context::CountContext;
use crate::counter::frequency;
use crate::error::Result;
use crate::types::{ResultMap, Strategy};

/// Counts by iterating the target words over the concatenated corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialByWord;

/// Counts by iterating the documents, adding each one's counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialByDocument;

pub(crate) fn count_by_word(context: &CountContext<'_>) -> Result<ResultMap> {
  let corpus = context.source.corpus(context.documents)?;
  Ok(
    context
      .targets
      .iter()
      .map(|word| (word.clone(), frequency(word, &corpus)))
      .collect(),
  )
}

pub(crate) fn count_by_document(context: &CountContext<'_>) -> Result<ResultMap> {
  let mut results = context.targets.zeroed();
  for id in context.documents {
    let tokens = context.source.tokens(id)?;
    for (word, total) in results.iter_mut() {
      *total += frequency(word, &tokens);
    }
  }
  Ok(results)
}

impl Aggregator for SerialByWord {
  fn strategy(&self) -> Strategy {
    Strategy::SerialByWord
  }

  fn aggregate(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    count_by_word(context)
  }
}

impl Aggregator for SerialByDocument {
  fn strategy(&self) -> Strategy {
    Strategy::SerialByDocument
  }

  fn aggregate(&self, context: &CountContext<'_>) -> Result<ResultMap> {
    count_by_document(context)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::source::MemorySource;
  use crate::types::TargetWords;

  #[test]
  fn test_serial_strategies_agree() {
    let source = MemorySource::new()
      .with("a", "The cat sat. The dog sat.")
      .with("b", "A cat, a hat; the end!");
    let documents = vec!["a".to_string(), "b".to_string()];
    let targets = TargetWords::new(["the", "cat", "hat", "mouse"]);
    let context = CountContext::new(&source, &documents, &targets);

    let by_word = SerialByWord.aggregate(&context).unwrap();
    let by_document = SerialByDocument.aggregate(&context).unwrap();

    assert_eq!(by_word, by_document);
    assert_eq!(by_word["the"], 3);
    assert_eq!(by_word["cat"], 2);
    assert_eq!(by_word["hat"], 1);
    assert_eq!(by_word["mouse"], 0);
  }

  #[test]
  fn test_serial_by_document_stops_on_missing_document() {
    let source = MemorySource::new().with("a", "love");
    let documents = vec!["a".to_string(), "gone".to_string()];
    let targets = TargetWords::new(["love"]);
    let context = CountContext::new(&source, &documents, &targets);

    assert!(SerialByDocument.aggregate(&context).is_err());
    assert!(SerialByWord.aggregate(&context).is_err());
  }
}
