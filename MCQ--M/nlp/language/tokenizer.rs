use anyhow::{Context, Result};
use regex::Regex;

const TOKEN_PATTERN: &str = r"(?x)
    \d+(?:[.,:/]\d+)+                              # 3.14, 1,000, 10:30, 1/2
  | [\p{L}\p{M}\p{N}_]+(?:['’\-][\p{L}\p{M}\p{N}]+)* # words, contractions, hyphenation
  | \S                                             # any other single character
";

/// Splits a sentence into word and punctuation pieces.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compiles the token pattern.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(TOKEN_PATTERN).context("compiling token pattern")?;
        Ok(Self { pattern })
    }

    /// Byte offset and text of each token, in order.
    pub fn pieces<'a>(&'a self, sentence: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        self.pattern
            .find_iter(sentence)
            .map(|found| (found.start(), found.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentence: &str) -> Vec<String> {
        let tokenizer = Tokenizer::new().unwrap();
        tokenizer
            .pieces(sentence)
            .map(|(_, text)| text.to_string())
            .collect()
    }

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(
            texts("The quick brown fox jumps."),
            vec!["The", "quick", "brown", "fox", "jumps", "."]
        );
    }

    #[test]
    fn keeps_numbers_and_contractions_whole() {
        assert_eq!(
            texts("Pi isn't 3.14, it's well-known."),
            vec!["Pi", "isn't", "3.14", ",", "it's", "well-known", "."]
        );
    }

    #[test]
    fn offsets_point_into_the_sentence() {
        let tokenizer = Tokenizer::new().unwrap();
        let sentence = "Ice melts.";
        for (offset, text) in tokenizer.pieces(sentence) {
            assert_eq!(&sentence[offset..offset + text.len()], text);
        }
    }
}
