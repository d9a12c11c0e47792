use serde::{Deserialize, Serialize};

use crate::{generation::BLANK_MARKER, language::PartOfSpeech};

/// What to do with a sentence that cannot yield a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvablePolicy {
    /// Drop the sentence and keep going.
    #[default]
    Skip,
    /// Fail the whole request.
    Fail,
}

/// Settings for sentence selection and question assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of sentences considered, and the upper bound on questions.
    pub max_questions: usize,
    /// Replacement for the answer inside the question text.
    pub blank_marker: String,
    /// Tags eligible as keywords before the stop-word fallback applies.
    pub keyword_tags: Vec<PartOfSpeech>,
    /// Handling of sentences without a keyword or enough distractors.
    pub on_unresolvable: UnresolvablePolicy,
    /// Keep reading sentences past `max_questions` to replace skipped ones.
    pub backfill: bool,
    /// Remove punctuation and symbol tokens from the distractor pool.
    pub skip_punctuation_distractors: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_questions: 5,
            blank_marker: BLANK_MARKER.to_string(),
            keyword_tags: vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Propn,
                PartOfSpeech::Adj,
            ],
            on_unresolvable: UnresolvablePolicy::Skip,
            backfill: false,
            skip_punctuation_distractors: false,
        }
    }
}

impl GenerationConfig {
    /// Validates config invariants.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.max_questions > 0, "max_questions must be positive");
        anyhow::ensure!(
            !self.blank_marker.trim().is_empty(),
            "blank_marker cannot be empty"
        );
        anyhow::ensure!(
            !self.keyword_tags.is_empty(),
            "keyword_tags must name at least one tag"
        );
        Ok(())
    }
}
