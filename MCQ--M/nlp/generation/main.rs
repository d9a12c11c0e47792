//! Per-sentence question generation.

/// Option shuffling and answer blanking.
pub mod assembly;
/// Wrong-option sampling.
pub mod distractor;
/// Answer selection.
pub mod keyword;

pub use assembly::{assemble, blank_first, Mcq};
pub use distractor::sample_distractors;
pub use keyword::select_keyword;

use rand::Rng;

use crate::{config::GenerationConfig, error::McqResult, language::LanguageModel};

/// Default replacement for the answer in the question text.
pub const BLANK_MARKER: &str = "______";

/// Wrong options per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Builds one question from `sentence`, or reports why it cannot.
pub fn question_for_sentence<R: Rng + ?Sized>(
    model: &dyn LanguageModel,
    config: &GenerationConfig,
    sentence: &str,
    rng: &mut R,
) -> McqResult<Mcq> {
    let tokens = model.tag(sentence);
    let answer = select_keyword(model, sentence, &tokens, &config.keyword_tags, rng)?;
    let distractors = sample_distractors(
        sentence,
        &tokens,
        &answer,
        config.skip_punctuation_distractors,
        rng,
    )?;
    Ok(assemble(
        sentence,
        answer,
        distractors,
        &config.blank_marker,
        rng,
    ))
}
