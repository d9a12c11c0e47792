use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline stage whose candidate pool came up short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    /// Neither tagged content words nor fallback words were found.
    Keyword,
    /// Fewer than three tokens remain once the answer text is excluded.
    Distractor,
}

impl fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => f.write_str("keyword"),
            Self::Distractor => f.write_str("distractor"),
        }
    }
}

/// Errors emitted by the MCQ pipeline.
#[derive(Debug, Error)]
pub enum McqError {
    /// Uploaded filename ends in neither `.pdf` nor `.txt`.
    #[error("Invalid file type {filename:?}. Please upload a .txt or .pdf file.")]
    InvalidFileType {
        /// Filename as supplied by the client.
        filename: String,
    },
    /// Neither a file nor a text field was supplied.
    #[error("No file or text provided. Please provide text or upload a .txt/.pdf file.")]
    NoInputProvided,
    /// A sentence had no eligible keyword or too few distractor candidates.
    #[error("no eligible {stage} candidates in sentence {sentence:?}")]
    EmptyCandidateSet {
        /// Stage that failed.
        stage: CandidateStage,
        /// Sentence being processed.
        sentence: String,
    },
    /// The uploaded document could not be read.
    #[error("text extraction failed: {0}")]
    Extraction(String),
}

impl McqError {
    /// Stable machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidFileType { .. } => "invalid_file_type",
            Self::NoInputProvided => "no_input_provided",
            Self::EmptyCandidateSet { .. } => "empty_candidate_set",
            Self::Extraction(_) => "extraction_failed",
        }
    }

    /// True for errors caused by the caller's input rather than its content.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidFileType { .. } | Self::NoInputProvided)
    }
}

impl From<lopdf::Error> for McqError {
    fn from(err: lopdf::Error) -> Self {
        Self::Extraction(err.to_string())
    }
}

/// Result alias for pipeline operations.
pub type McqResult<T> = Result<T, McqError>;
