use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{CandidateStage, McqError, McqResult},
    language::{LanguageModel, PartOfSpeech, Token},
};

/// Picks the answer for `sentence`.
///
/// Tokens tagged with one of `tags` are the primary candidates. When none
/// exist, whitespace words that are purely alphabetic and not stop words are
/// used instead.
pub fn select_keyword<R: Rng + ?Sized>(
    model: &dyn LanguageModel,
    sentence: &str,
    tokens: &[Token],
    tags: &[PartOfSpeech],
    rng: &mut R,
) -> McqResult<String> {
    let primary: Vec<&str> = tokens
        .iter()
        .filter(|token| tags.contains(&token.pos))
        .map(|token| token.text.as_str())
        .collect();
    if let Some(choice) = primary.choose(rng) {
        return Ok((*choice).to_string());
    }
    let fallback: Vec<&str> = sentence
        .split_whitespace()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| !model.is_stop_word(word))
        .collect();
    fallback
        .choose(rng)
        .map(|choice| (*choice).to_string())
        .ok_or_else(|| McqError::EmptyCandidateSet {
            stage: CandidateStage::Keyword,
            sentence: sentence.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::EnglishModel;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CONTENT: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Propn,
        PartOfSpeech::Adj,
    ];

    #[test]
    fn keyword_comes_from_tagged_content_words() {
        let model = EnglishModel::new().unwrap();
        let sentence = "The quick brown fox jumps.";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let keyword = select_keyword(&model, sentence, &tokens, &CONTENT, &mut rng).unwrap();
            assert!(["quick", "brown", "fox", "jumps"].contains(&keyword.as_str()));
        }
    }

    #[test]
    fn falls_back_to_alphabetic_non_stop_words() {
        let model = EnglishModel::new().unwrap();
        let sentence = "It is over 42 here, truly";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let keyword =
            select_keyword(&model, sentence, &tokens, &[PartOfSpeech::Intj], &mut rng).unwrap();
        assert_eq!(keyword, "truly");
    }

    #[test]
    fn no_candidates_is_an_error() {
        let model = EnglishModel::new().unwrap();
        let sentence = "It is 42.";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = select_keyword(&model, sentence, &tokens, &CONTENT, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            McqError::EmptyCandidateSet {
                stage: CandidateStage::Keyword,
                ..
            }
        ));
    }
}
