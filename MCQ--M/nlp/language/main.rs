//! The linguistic model: sentence boundaries, tags and stop words.

/// Stop words, abbreviations and word-class tables.
pub mod lexicon;
/// Sentence boundary detection.
pub mod segmenter;
/// Rule-based part-of-speech tagging.
pub mod tagger;
/// Tag set and token type.
pub mod token;
/// Regex word splitter.
pub mod tokenizer;

pub use lexicon::Lexicon;
pub use segmenter::Sentences;
pub use tagger::Tagger;
pub use token::{PartOfSpeech, Token};
pub use tokenizer::Tokenizer;

use anyhow::Result;

/// Read-only linguistic service shared by every request.
pub trait LanguageModel: Send + Sync {
    /// Trimmed, non-empty sentences of `text` in document order.
    fn sentences<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a>;

    /// Tokens of one sentence with their part-of-speech tags.
    fn tag(&self, sentence: &str) -> Vec<Token>;

    /// Case-insensitive stop-word test.
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Built-in English model backed by [`Lexicon`].
#[derive(Debug, Clone)]
pub struct EnglishModel {
    lexicon: Lexicon,
    tokenizer: Tokenizer,
}

impl EnglishModel {
    /// Builds the lexicon and compiles the tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self {
            lexicon: Lexicon::english(),
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Underlying word tables.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl LanguageModel for EnglishModel {
    fn sentences<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(Sentences::new(text, &self.lexicon))
    }

    fn tag(&self, sentence: &str) -> Vec<Token> {
        let pieces: Vec<(usize, &str)> = self.tokenizer.pieces(sentence).collect();
        Tagger::new(&self.lexicon).tag(&pieces)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.lexicon.is_stop_word(word)
    }
}
