//! Core data types shared by every counting strategy.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A single word or punctuation token produced by the tokenizer.
///
/// Tokens keep the casing of the source text. Comparison against target words
/// is case-insensitive and happens in [`crate::counter`].
pub type Token = String;

/// The ordered token sequence of one or more documents.
pub type Corpus = Vec<Token>;

/// Identifier of a document, resolved by a [`crate::source::DocumentSource`].
pub type DocumentId = String;

/// Final mapping from lowercased target word to its number of occurrences.
///
/// An ordered map so that results from different strategies compare with a
/// plain `==` and print sorted by word.
pub type ResultMap = BTreeMap<String, usize>;

/// Worker-local counts over a subset of documents, merged into a [`ResultMap`].
pub type PartialCount = HashMap<String, usize>;

/// The fixed vocabulary of words to count.
///
/// Words are lowercased on construction, empty entries are dropped and
/// duplicates collapse onto their first occurrence, so the list is always
/// distinct and keeps the caller's order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TargetWords {
  words: Vec<String>,
}

impl TargetWords {
  /// Builds a target list from any sequence of words.
  pub fn new<I, S>(words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut seen = HashSet::new();
    let words = words
      .into_iter()
      .map(|w| w.as_ref().trim().to_lowercase())
      .filter(|w| !w.is_empty())
      .filter(|w| seen.insert(w.clone()))
      .collect();
    Self { words }
  }

  /// Number of distinct target words.
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Whether the list holds no words at all.
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Iterates the words in their original order.
  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.words.iter()
  }

  /// The words as a slice, for sharding across workers.
  pub fn as_slice(&self) -> &[String] {
    &self.words
  }

  /// A result map holding every target word with a count of zero.
  ///
  /// This establishes the complete key set before any counting starts.
  pub fn zeroed(&self) -> ResultMap {
    self.words.iter().map(|w| (w.clone(), 0)).collect()
  }
}

impl From<Vec<String>> for TargetWords {
  fn from(words: Vec<String>) -> Self {
    Self::new(words)
  }
}

impl From<TargetWords> for Vec<String> {
  fn from(targets: TargetWords) -> Self {
    targets.words
  }
}

impl<'a> IntoIterator for &'a TargetWords {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.words.iter()
  }
}

/// How concurrent work is divided between workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
  /// Each worker owns a disjoint subset of the target words.
  ByWord,
  /// Each worker owns a disjoint subset of the documents.
  ByDocument,
}

/// One of the four counting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
  /// Single-threaded, iterating the target words over the full corpus.
  SerialByWord,
  /// Single-threaded, iterating the documents.
  SerialByDocument,
  /// Target words sharded across workers writing into a concurrent map.
  ParallelByWord,
  /// Documents sharded across workers merging under a single lock.
  ParallelByDocument,
}

impl Strategy {
  /// Every strategy, serial ones first.
  pub const ALL: [Strategy; 4] = [
    Strategy::SerialByWord,
    Strategy::SerialByDocument,
    Strategy::ParallelByWord,
    Strategy::ParallelByDocument,
  ];

  /// Builds a strategy from the partition and whether to run it in parallel.
  pub fn new(partition: Partition, parallel: bool) -> Self {
    match (partition, parallel) {
      (Partition::ByWord, false) => Strategy::SerialByWord,
      (Partition::ByDocument, false) => Strategy::SerialByDocument,
      (Partition::ByWord, true) => Strategy::ParallelByWord,
      (Partition::ByDocument, true) => Strategy::ParallelByDocument,
    }
  }

  pub fn is_parallel(self) -> bool {
    matches!(self, Strategy::ParallelByWord | Strategy::ParallelByDocument)
  }

  pub fn partition(self) -> Partition {
    match self {
      Strategy::SerialByWord | Strategy::ParallelByWord => Partition::ByWord,
      Strategy::SerialByDocument | Strategy::ParallelByDocument => Partition::ByDocument,
    }
  }

  fn as_str(self) -> &'static str {
    match self {
      Strategy::SerialByWord => "serial-by-word",
      Strategy::SerialByDocument => "serial-by-document",
      Strategy::ParallelByWord => "parallel-by-word",
      Strategy::ParallelByDocument => "parallel-by-document",
    }
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Strategy {
  type Err = crate::error::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Strategy::ALL
      .into_iter()
      .find(|strategy| strategy.as_str() == s)
      .ok_or_else(|| crate::error::Error::InvalidConfig(format!("unknown strategy '{s}'")))
  }
}

/// Number of workers a parallel aggregator runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workers {
  /// As many workers as the machine offers.
  #[default]
  Auto,
  /// An explicit worker count, clamped to at least one.
  Fixed(usize),
}

impl Workers {
  /// Resolves the worker count for a run over `items` shardable items.
  ///
  /// Never returns more workers than items, and never fewer than one.
  pub fn resolve(self, items: usize) -> usize {
    let requested = match self {
      Workers::Auto => std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1),
      Workers::Fixed(n) => n,
    };
    requested.min(items).max(1)
  }
}

impl From<Option<usize>> for Workers {
  fn from(workers: Option<usize>) -> Self {
    workers.map(Workers::Fixed).unwrap_or_default()
  }
}
