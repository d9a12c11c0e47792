use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mcq {
    /// Sentence with the answer blanked out.
    pub question: String,
    /// Three distractors and the answer, shuffled.
    pub options: Vec<String>,
    /// Correct option text.
    pub answer: String,
    /// 1-based position of `answer` in `options`.
    pub answer_option: usize,
}

impl Mcq {
    /// Option text at the recorded answer position.
    #[must_use]
    pub fn answer_at_position(&self) -> Option<&str> {
        self.answer_option
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

/// Shuffles the options and blanks the first occurrence of the answer.
pub fn assemble<R: Rng + ?Sized>(
    sentence: &str,
    answer: String,
    distractors: Vec<String>,
    blank_marker: &str,
    rng: &mut R,
) -> Mcq {
    let mut options = distractors;
    options.shuffle(rng);
    let slot = rng.gen_range(0..=options.len());
    options.insert(slot, answer.clone());
    let answer_option = slot + 1;
    Mcq {
        question: blank_first(sentence, &answer, blank_marker),
        options,
        answer,
        answer_option,
    }
}

/// Replaces the first whole-token occurrence of `answer`, or the first plain
/// occurrence when it only appears inside a longer word.
#[must_use]
pub fn blank_first(sentence: &str, answer: &str, marker: &str) -> String {
    if answer.is_empty() {
        return sentence.to_string();
    }
    let bounded = sentence
        .match_indices(answer)
        .map(|(start, _)| start)
        .find(|&start| is_token_boundary(sentence, start, start + answer.len()));
    match bounded.or_else(|| sentence.find(answer)) {
        Some(start) => {
            let mut blanked = String::with_capacity(sentence.len() + marker.len());
            blanked.push_str(&sentence[..start]);
            blanked.push_str(marker);
            blanked.push_str(&sentence[start + answer.len()..]);
            blanked
        }
        None => sentence.to_string(),
    }
}

fn is_token_boundary(sentence: &str, start: usize, end: usize) -> bool {
    let before = sentence[..start].chars().next_back();
    let after = sentence[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
