//! Exact, case-insensitive frequency counting.

use crate::types::{PartialCount, TargetWords};

/// Whether `token` equals the already lowercased `word`, ignoring case.
///
/// Both sides must go through `str::to_lowercase`, which lowers a final `Σ`
/// to `ς`. ASCII tokens skip the allocation.
fn matches_lowercase(token: &str, word: &str) -> bool {
  if token.is_ascii() {
    token.eq_ignore_ascii_case(word)
  } else {
    token.to_lowercase() == word
  }
}

/// Counts the tokens equal to `word`, ignoring case.
///
/// Only whole tokens match: `love` does not match `self-love` or `lovely`.
/// The scan is read-only, so any number of workers may call this on the same
/// token slice at once.
pub fn frequency<S: AsRef<str>>(word: &str, tokens: &[S]) -> usize {
  let word = word.to_lowercase();
  tokens
    .iter()
    .filter(|token| matches_lowercase(token.as_ref(), &word))
    .count()
}

/// Counts every target word over one token sequence.
pub fn partial_count<S: AsRef<str>>(targets: &TargetWords, tokens: &[S]) -> PartialCount {
  targets
    .iter()
    .map(|word| (word.clone(), frequency(word, tokens)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::tokenize;

  #[test]
  fn test_frequency_is_case_insensitive() {
    let tokens = tokenize("Love love LOVE lOvE");
    assert_eq!(frequency("love", &tokens), 4);
    assert_eq!(frequency("LOVE", &tokens), 4);
  }

  #[test]
  fn test_frequency_lowers_final_sigma_like_the_target() {
    let tokens = tokenize("ΟΔΟΣ οδος Οδός");
    assert_eq!(frequency("οδος", &tokens), 2);
    assert_eq!(frequency("ΟΔΟΣ", &tokens), 2);
    assert_eq!(frequency("οδός", &tokens), 1);
  }

  #[test]
  fn test_frequency_is_exact() {
    let tokens = tokenize("self-love lovely loves love");
    assert_eq!(frequency("love", &tokens), 1);
  }

  #[test]
  fn test_frequency_of_absent_word() {
    let tokens = tokenize("the cat sat.");
    assert_eq!(frequency("dog", &tokens), 0);
    assert_eq!(frequency("dog", &Vec::<String>::new()), 0);
  }

  #[test]
  fn test_frequency_counts_punctuation_tokens() {
    let tokens = tokenize("the cat sat. the dog sat.");
    assert_eq!(frequency(".", &tokens), 2);
  }

  #[test]
  fn test_partial_count_covers_every_target() {
    let targets = TargetWords::new(["the", "sat", "cat", "poison"]);
    let counts = partial_count(&targets, &tokenize("The cat sat. the dog sat."));
    assert_eq!(counts.len(), 4);
    assert_eq!(counts["the"], 2);
    assert_eq!(counts["sat"], 2);
    assert_eq!(counts["cat"], 1);
    assert_eq!(counts["poison"], 0);
  }
}
