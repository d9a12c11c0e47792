use super::{
    lexicon::Lexicon,
    token::{PartOfSpeech, Token},
};

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ic", "ary", "ish",
];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate"];

/// Rule-based part-of-speech tagger over tokenizer output.
#[derive(Debug, Clone, Copy)]
pub struct Tagger<'a> {
    lexicon: &'a Lexicon,
}

struct Draft<'s> {
    text: &'s str,
    lower: String,
    offset: usize,
    pos: PartOfSpeech,
    guessed: bool,
}

impl<'a> Tagger<'a> {
    /// Tagger reading from `lexicon`.
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tags `(offset, text)` pieces of one sentence.
    #[must_use]
    pub fn tag(&self, pieces: &[(usize, &str)]) -> Vec<Token> {
        let mut drafts: Vec<Draft<'_>> = Vec::with_capacity(pieces.len());
        let mut seen_word = false;
        for (index, &(offset, text)) in pieces.iter().enumerate() {
            let lower = text.to_lowercase();
            let next_lower = pieces.get(index + 1).map(|(_, next)| next.to_lowercase());
            let (pos, guessed) = self.lexical(text, &lower, next_lower.as_deref(), !seen_word);
            seen_word |= !pos.is_punctuation();
            drafts.push(Draft {
                text,
                lower,
                offset,
                pos,
                guessed,
            });
        }
        self.apply_context(&mut drafts);
        drafts
            .into_iter()
            .map(|draft| Token::new(draft.text, draft.pos, draft.offset))
            .collect()
    }

    /// Tag from the word alone. The flag marks default noun guesses that
    /// context may still revise.
    fn lexical(
        &self,
        text: &str,
        lower: &str,
        next_lower: Option<&str>,
        sentence_initial: bool,
    ) -> (PartOfSpeech, bool) {
        if !text.chars().any(char::is_alphanumeric) {
            return (symbol_class(text), false);
        }
        if is_numeric(text) || self.lexicon.is_number_word(lower) {
            return (PartOfSpeech::Num, false);
        }
        if lower == "to" {
            let before_verb = next_lower.is_some_and(|next| self.lexicon.is_verb(next));
            let pos = if before_verb {
                PartOfSpeech::Part
            } else {
                PartOfSpeech::Adp
            };
            return (pos, false);
        }
        if let Some(pos) = self.lexicon.closed_class(lower) {
            return (pos, false);
        }
        let stem_lower = strip_possessive(lower);
        let letters: Vec<char> = text.chars().filter(|ch| ch.is_alphabetic()).collect();
        if letters.len() >= 2 && letters.iter().all(|ch| ch.is_uppercase()) {
            return (PartOfSpeech::Propn, false);
        }
        let capitalized = text.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_initial {
            return (PartOfSpeech::Propn, false);
        }
        if self.lexicon.is_adjective(stem_lower) {
            return (PartOfSpeech::Adj, false);
        }
        if self.lexicon.is_inflected_verb(stem_lower) {
            return (PartOfSpeech::Verb, false);
        }
        if let Some(pos) = suffix_class(stem_lower) {
            return (pos, false);
        }
        (PartOfSpeech::Noun, true)
    }

    fn apply_context(&self, drafts: &mut [Draft<'_>]) {
        for index in 0..drafts.len() {
            if !drafts[index].guessed {
                continue;
            }
            let previous = index.checked_sub(1).map(|prev| &drafts[prev]);
            let after_verb_trigger = previous.is_some_and(|prev| {
                prev.pos == PartOfSpeech::Pron
                    || (prev.pos == PartOfSpeech::Part && prev.lower == "to")
                    || (prev.pos == PartOfSpeech::Aux && self.lexicon.is_modal(&prev.lower))
            });
            let third_person = {
                let word = &drafts[index].lower;
                let plural_shape = word.ends_with('s') && !word.ends_with("ss") && word.len() > 2;
                let after_subject = previous.is_some_and(|prev| {
                    matches!(prev.pos, PartOfSpeech::Noun | PartOfSpeech::Propn)
                });
                let next_fits = match drafts.get(index + 1) {
                    None => true,
                    Some(next) => {
                        next.pos.is_punctuation()
                            || matches!(
                                next.pos,
                                PartOfSpeech::Adp | PartOfSpeech::Det | PartOfSpeech::Adv
                            )
                    }
                };
                plural_shape && after_subject && next_fits
            };
            if after_verb_trigger || third_person {
                drafts[index].pos = PartOfSpeech::Verb;
            }
        }
    }
}

fn symbol_class(text: &str) -> PartOfSpeech {
    let symbol = text.chars().all(|ch| {
        matches!(
            ch,
            '$' | '%' | '&' | '+' | '<' | '=' | '>' | '^' | '|' | '~' | '@' | '#' | '©' | '°'
                | '€' | '£' | '¥' | '×' | '÷'
        )
    });
    if symbol {
        PartOfSpeech::Sym
    } else {
        PartOfSpeech::Punct
    }
}

fn is_numeric(text: &str) -> bool {
    text.chars().next().is_some_and(|ch| ch.is_ascii_digit())
        && text
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ',' | ':' | '/'))
}

fn strip_possessive(lower: &str) -> &str {
    lower
        .strip_suffix("'s")
        .or_else(|| lower.strip_suffix("’s"))
        .unwrap_or(lower)
}

fn suffix_class(lower: &str) -> Option<PartOfSpeech> {
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return Some(PartOfSpeech::Adv);
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
        return Some(PartOfSpeech::Adj);
    }
    if (len > 5 && lower.ends_with("ing"))
        || (len > 4 && lower.ends_with("ed"))
        || (len > 4 && VERB_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)))
    {
        return Some(PartOfSpeech::Verb);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::tokenizer::Tokenizer;

    fn tags(sentence: &str) -> Vec<(String, PartOfSpeech)> {
        let lexicon = Lexicon::english();
        let tokenizer = Tokenizer::new().unwrap();
        let pieces: Vec<_> = tokenizer.pieces(sentence).collect();
        Tagger::new(&lexicon)
            .tag(&pieces)
            .into_iter()
            .map(|token| (token.text, token.pos))
            .collect()
    }

    #[test]
    fn tags_the_classic_pangram() {
        use PartOfSpeech::{Adj, Det, Noun, Punct, Verb};
        let expected = [
            ("The", Det),
            ("quick", Adj),
            ("brown", Adj),
            ("fox", Noun),
            ("jumps", Verb),
            (".", Punct),
        ];
        let actual = tags("The quick brown fox jumps.");
        assert_eq!(actual.len(), expected.len());
        for ((text, pos), (want_text, want_pos)) in actual.iter().zip(expected) {
            assert_eq!(text, want_text);
            assert_eq!(*pos, want_pos, "tag of {text}");
        }
    }

    #[test]
    fn proper_nouns_numbers_and_symbols() {
        let tagged = tags("Alice paid $5 to NASA in 1969.");
        let lookup = |word: &str| {
            tagged
                .iter()
                .find(|(text, _)| text == word)
                .map(|(_, pos)| *pos)
                .unwrap()
        };
        assert_eq!(lookup("Alice"), PartOfSpeech::Noun);
        assert_eq!(lookup("$"), PartOfSpeech::Sym);
        assert_eq!(lookup("5"), PartOfSpeech::Num);
        assert_eq!(lookup("to"), PartOfSpeech::Adp);
        assert_eq!(lookup("NASA"), PartOfSpeech::Propn);
        assert_eq!(lookup("1969"), PartOfSpeech::Num);
        assert_eq!(lookup("paid"), PartOfSpeech::Verb);
    }

    #[test]
    fn context_promotes_unknown_words_to_verbs() {
        let tagged = tags("They photosynthesize and we can glorp. We sing.");
        let pos_of = |word: &str| tagged.iter().find(|(text, _)| text == word).unwrap().1;
        assert_eq!(pos_of("photosynthesize"), PartOfSpeech::Verb);
        assert_eq!(pos_of("glorp"), PartOfSpeech::Verb);
        assert_eq!(pos_of("sing"), PartOfSpeech::Verb);
    }

    #[test]
    fn mid_sentence_capitals_are_proper_nouns() {
        let tagged = tags("The probe reached Saturn quickly.");
        assert_eq!(tagged[3], ("Saturn".to_string(), PartOfSpeech::Propn));
        assert_eq!(tagged[4], ("quickly".to_string(), PartOfSpeech::Adv));
    }
}
