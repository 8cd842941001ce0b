//! Run configuration: which documents, which words, how many workers.

use crate::error::{ConfigSource, Error, Result};
use crate::types::{DocumentId, ResultMap, TargetWords, Workers};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Documents counted when none are configured.
pub const DEFAULT_DOCUMENTS: [&str; 8] = [
  "shakespeare1.txt",
  "shakespeare2.txt",
  "shakespeare3.txt",
  "shakespeare4.txt",
  "shakespeare5.txt",
  "shakespeare6.txt",
  "shakespeare7.txt",
  "shakespeare8.txt",
];

/// Words counted when none are configured.
pub const DEFAULT_WORDS: [&str; 16] = [
  "hate", "love", "death", "night", "sleep", "time", "henry", "hamlet", "you", "my", "blood",
  "poison", "macbeth", "king", "heart", "honest",
];

/// Known counts of [`DEFAULT_WORDS`] over [`DEFAULT_DOCUMENTS`], for manual comparison.
///
/// These were produced by a tokenizer that splits hyphenated compounds, so
/// `self-love` contributed to `love`. The tokenizer here keeps `self-love` as
/// one token, so a default run can report lower counts than this table,
/// most visibly for `love`.
pub const REFERENCE_COUNTS: [(&str, usize); 16] = [
  ("blood", 719),
  ("death", 963),
  ("hamlet", 474),
  ("hate", 188),
  ("heart", 1124),
  ("henry", 612),
  ("honest", 309),
  ("king", 3033),
  ("love", 2399),
  ("macbeth", 288),
  ("my", 13184),
  ("night", 825),
  ("poison", 98),
  ("sleep", 272),
  ("time", 1180),
  ("you", 14580),
];

/// Configuration of a counting run, loadable from JSON.
///
/// Every field is optional in the JSON form; missing fields take the values
/// of [`RunConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
  /// Document ids, resolved against `root` when set.
  pub documents: Vec<DocumentId>,
  /// Target words to count, lowercased and deduplicated on load.
  pub words: TargetWords,
  /// Worker count for the parallel strategies. Unset means one per core.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub workers: Option<usize>,
  /// Directory relative document ids are resolved against.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root: Option<PathBuf>,
  /// Reference counts printed for manual comparison.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected: Option<ResultMap>,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      documents: DEFAULT_DOCUMENTS.iter().map(|d| d.to_string()).collect(),
      words: TargetWords::new(DEFAULT_WORDS),
      workers: None,
      root: None,
      expected: Some(
        REFERENCE_COUNTS
          .iter()
          .map(|(word, count)| (word.to_string(), *count))
          .collect(),
      ),
    }
  }
}

impl RunConfig {
  /// Parses and validates a configuration from a JSON string.
  pub fn from_json_str(json: &str) -> Result<Self> {
    let config: RunConfig = serde_json::from_str(json).map_err(|e| Error::Config {
      path: PathBuf::from("<inline>"),
      source: ConfigSource::Json(e),
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Reads, parses and validates a configuration file.
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let config_error = |source: ConfigSource| Error::Config {
      path: path.to_path_buf(),
      source,
    };
    let json = std::fs::read_to_string(path).map_err(|e| config_error(e.into()))?;
    let config: RunConfig = serde_json::from_str(&json).map_err(|e| config_error(e.into()))?;
    config.validate()?;
    log::debug!("loaded configuration from '{}'", path.display());
    Ok(config)
  }

  /// Checks the configuration describes a runnable count.
  ///
  /// An empty document list is allowed and yields all-zero counts. At least
  /// one non-blank word is required and workers, when set, must be positive.
  pub fn validate(&self) -> Result<()> {
    if self.words.is_empty() {
      return Err(Error::InvalidConfig("no target words configured".into()));
    }
    if self.documents.iter().any(|d| d.trim().is_empty()) {
      return Err(Error::InvalidConfig("blank document id".into()));
    }
    if self.workers == Some(0) {
      return Err(Error::InvalidConfig("workers must be at least 1".into()));
    }
    Ok(())
  }

  pub fn workers(&self) -> Workers {
    self.workers.into()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_reproduces_reference_run() {
    let config = RunConfig::default();
    config.validate().unwrap();
    assert_eq!(config.documents.len(), 8);
    assert_eq!(config.words.len(), 16);
    let expected = config.expected.unwrap();
    assert!(config.words.iter().all(|w| expected.contains_key(w)));
    assert_eq!(expected["king"], 3033);
  }

  #[test]
  fn test_partial_json_takes_defaults() {
    let config = RunConfig::from_json_str(r#"{ "words": ["Love", "hate"], "workers": 3 }"#).unwrap();
    assert_eq!(config.words.as_slice(), ["love", "hate"]);
    assert_eq!(config.workers(), Workers::Fixed(3));
    assert_eq!(config.documents.len(), 8);
  }

  #[test]
  fn test_words_are_normalized_on_load_and_round_trip() {
    let config =
      RunConfig::from_json_str(r#"{ "words": ["King", "king", " ", "HEART"] }"#).unwrap();
    assert_eq!(config.words.as_slice(), ["king", "heart"]);

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""words":["king","heart"]"#), "{json}");
    assert_eq!(RunConfig::from_json_str(&json).unwrap(), config);
  }

  #[test]
  fn test_invalid_configs_are_rejected() {
    assert!(matches!(
      RunConfig::from_json_str(r#"{ "words": [] }"#),
      Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
      RunConfig::from_json_str(r#"{ "workers": 0 }"#),
      Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
      RunConfig::from_json_str(r#"{ "words": [" "] }"#),
      Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
      RunConfig::from_json_str("{ not json"),
      Err(Error::Config { .. })
    ));
  }

  #[test]
  fn test_missing_file_is_a_config_error() {
    let err = RunConfig::from_json_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, Error::Config { source: ConfigSource::Io(_), .. }));
  }
}
