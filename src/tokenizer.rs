//! Text tokenization.
//!
//! A single left-to-right scan splits text into word tokens and punctuation
//! tokens. Everything else is a separator and produces no token.
//!
//! - A word is a maximal run of letters, digits, `_` and `'`.
//! - A single `-` between two word characters is part of the word, so
//!   `self-love` is one token. Leading, trailing and doubled hyphens (`--`)
//!   separate.
//! - Each of `. , ! ? ;` is a token on its own.
//!
//! No case normalization happens here; the counter compares case-insensitively.

use crate::types::Corpus;

fn is_word_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_' || c == '\''
}

fn is_punctuation(c: char) -> bool {
  matches!(c, '.' | ',' | '!' | '?' | ';')
}

/// Lazy iterator over the tokens of a text, borrowing from it.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
  text: &'a str,
  pos: usize,
}

impl<'a> Tokens<'a> {
  pub fn new(text: &'a str) -> Self {
    Self { text, pos: 0 }
  }
}

impl<'a> Iterator for Tokens<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let rest = &self.text[self.pos..];
    let mut chars = rest.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
      if is_word_char(c) {
        let mut end = start + c.len_utf8();
        chars.next();

        while let Some(&(i, d)) = chars.peek() {
          if is_word_char(d) {
            end = i + d.len_utf8();
          } else if d == '-' && rest[i + 1..].chars().next().is_some_and(is_word_char) {
            end = i + 1;
          } else {
            break;
          }
          chars.next();
        }

        self.pos += end;
        return Some(&rest[start..end]);
      }

      if is_punctuation(c) {
        let end = start + c.len_utf8();
        self.pos += end;
        return Some(&rest[start..end]);
      }

      chars.next();
    }

    self.pos = self.text.len();
    None
  }
}

/// Tokenize text, borrowing the tokens from it.
pub fn tokens(text: &str) -> Tokens<'_> {
  Tokens::new(text)
}

/// Tokenize text into an owned corpus.
pub fn tokenize(text: &str) -> Corpus {
  tokens(text).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tokenize() {
    let tokens = tokenize("Hello, World! This is a test.");
    assert_eq!(
      tokens,
      vec!["Hello", ",", "World", "!", "This", "is", "a", "test", "."]
    );
  }

  #[test]
  fn test_keeps_apostrophes_and_case() {
    assert_eq!(tokenize("Don't O'er-leap"), vec!["Don't", "O'er-leap"]);
  }

  #[test]
  fn test_hyphenated_compound_is_one_token() {
    assert_eq!(tokenize("self-love"), vec!["self-love"]);
    assert_eq!(tokenize("well-a-day!"), vec!["well-a-day", "!"]);
  }

  #[test]
  fn test_loose_hyphens_separate() {
    assert_eq!(tokenize("night--day"), vec!["night", "day"]);
    assert_eq!(tokenize("-love- and - hate"), vec!["love", "and", "hate"]);
  }

  #[test]
  fn test_other_characters_are_separators() {
    assert_eq!(tokenize("king:\tqueen\n(knave)"), vec!["king", "queen", "knave"]);
    assert_eq!(tokenize("what?!;"), vec!["what", "?", "!", ";"]);
  }

  #[test]
  fn test_unicode_words() {
    assert_eq!(tokenize("Ça va, señor_1"), vec!["Ça", "va", ",", "señor_1"]);
  }

  #[test]
  fn test_empty_and_blank_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \n\t -- ").is_empty());
  }

  #[test]
  fn test_lazy_tokens_borrow_from_text() {
    let text = String::from("the cat sat.");
    let collected: Vec<&str> = tokens(&text).collect();
    assert_eq!(collected, ["the", "cat", "sat", "."]);
  }
}
