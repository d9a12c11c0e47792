use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{CandidateStage, McqError, McqResult},
    language::Token,
};

use super::DISTRACTOR_COUNT;

/// Samples [`DISTRACTOR_COUNT`] wrong options from the sentence's own tokens.
///
/// Every token whose text equals the answer is excluded. Sampling is by
/// position without replacement, so a word repeated in the sentence may
/// appear more than once among the options.
pub fn sample_distractors<R: Rng + ?Sized>(
    sentence: &str,
    tokens: &[Token],
    answer: &str,
    skip_punctuation: bool,
    rng: &mut R,
) -> McqResult<Vec<String>> {
    let pool: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.text != answer)
        .filter(|token| !(skip_punctuation && token.pos.is_punctuation()))
        .collect();
    if pool.len() < DISTRACTOR_COUNT {
        return Err(McqError::EmptyCandidateSet {
            stage: CandidateStage::Distractor,
            sentence: sentence.to_string(),
        });
    }
    Ok(pool
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|token| token.text.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{EnglishModel, LanguageModel};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn answer_text_never_appears_in_pool() {
        let model = EnglishModel::new().unwrap();
        let sentence = "The cat chased the cat.";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let picked = sample_distractors(sentence, &tokens, "cat", false, &mut rng).unwrap();
            assert_eq!(picked.len(), DISTRACTOR_COUNT);
            assert!(picked.iter().all(|text| text != "cat"));
        }
    }

    #[test]
    fn punctuation_can_be_excluded() {
        let model = EnglishModel::new().unwrap();
        let sentence = "Rivers carve deep canyons, slowly.";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let picked = sample_distractors(sentence, &tokens, "carve", true, &mut rng).unwrap();
            assert!(picked.iter().all(|text| text != "," && text != "."));
        }
    }

    #[test]
    fn short_pool_is_an_error() {
        let model = EnglishModel::new().unwrap();
        let sentence = "Birds sing.";
        let tokens = model.tag(sentence);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let err = sample_distractors(sentence, &tokens, "sing", false, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            McqError::EmptyCandidateSet {
                stage: CandidateStage::Distractor,
                ..
            }
        ));
    }
}
