#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Multiple-choice question generation from free-form text.
//!
//! The pipeline is linear: acquire text, segment it into sentences, pick a
//! keyword per sentence, sample distractors from the same sentence, and
//! assemble the question.

/// Error taxonomy surfaced to callers.
#[path = "../error.rs"]
pub mod error;

/// Generation settings shared by the pipeline stages.
#[path = "../config.rs"]
pub mod config;

/// Telemetry helpers.
#[path = "../telemetry.rs"]
pub mod telemetry;

/// Text acquisition from raw input or uploaded documents.
#[path = "../acquisition/main.rs"]
pub mod acquisition;

/// Sentence segmentation and part-of-speech tagging.
#[path = "../language/main.rs"]
pub mod language;

/// Keyword, distractor and question assembly stages.
#[path = "../generation/main.rs"]
pub mod generation;

/// High-level pipeline entry point.
#[path = "../main.rs"]
pub mod runtime;

pub use acquisition::{acquire_text, DocumentKind, InputPayload, UploadedFile};
pub use config::{GenerationConfig, UnresolvablePolicy};
pub use error::{CandidateStage, McqError, McqResult};
pub use generation::{Mcq, BLANK_MARKER, DISTRACTOR_COUNT};
pub use language::{EnglishModel, LanguageModel, PartOfSpeech, Token};
pub use runtime::McqRuntime;
pub use telemetry::{McqTelemetry, McqTelemetryBuilder};
