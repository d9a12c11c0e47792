use std::fmt;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    /// Adjective.
    Adj,
    /// Adposition (preposition or postposition).
    Adp,
    /// Adverb.
    Adv,
    /// Auxiliary verb.
    Aux,
    /// Coordinating conjunction.
    Cconj,
    /// Determiner.
    Det,
    /// Interjection.
    Intj,
    /// Common noun.
    Noun,
    /// Numeral.
    Num,
    /// Particle.
    Part,
    /// Pronoun.
    Pron,
    /// Proper noun.
    Propn,
    /// Punctuation.
    Punct,
    /// Subordinating conjunction.
    Sconj,
    /// Symbol.
    Sym,
    /// Main verb.
    Verb,
    /// Anything else.
    X,
}

impl PartOfSpeech {
    /// Uppercase label as printed by common taggers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }

    /// Punctuation or symbol.
    #[must_use]
    pub const fn is_punctuation(self) -> bool {
        matches!(self, Self::Punct | Self::Sym)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Word or punctuation mark with its tag and byte offset in the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text.
    pub text: String,
    /// Part-of-speech tag.
    pub pos: PartOfSpeech,
    /// Byte offset of the token within its sentence.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, offset: usize) -> Self {
        Self {
            text: text.into(),
            pos,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&PartOfSpeech::Propn).unwrap(), "\"PROPN\"");
        assert_eq!(PartOfSpeech::Cconj.to_string(), "CCONJ");
        assert!(PartOfSpeech::Sym.is_punctuation());
        assert!(!PartOfSpeech::Noun.is_punctuation());
    }
}
