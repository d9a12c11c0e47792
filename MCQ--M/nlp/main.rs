use std::sync::Arc;

use rand::Rng;
use serde_json::json;
use shared_logging::LogLevel;

use crate::{
    acquisition::{acquire_text, InputPayload},
    config::{GenerationConfig, UnresolvablePolicy},
    error::{McqError, McqResult},
    generation::{question_for_sentence, Mcq},
    language::LanguageModel,
    telemetry::McqTelemetry,
};

/// End-to-end pipeline: acquisition, segmentation and per-sentence
/// generation.
///
/// The runtime holds no per-request state, so one instance can be shared
/// behind an `Arc` across concurrent requests.
#[derive(Clone)]
pub struct McqRuntime {
    model: Arc<dyn LanguageModel>,
    config: GenerationConfig,
    telemetry: Option<McqTelemetry>,
}

impl std::fmt::Debug for McqRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McqRuntime")
            .field("config", &self.config)
            .field("telemetry", &self.telemetry)
            .finish_non_exhaustive()
    }
}

impl McqRuntime {
    /// Creates a runtime without telemetry.
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>, config: GenerationConfig) -> Self {
        Self {
            model,
            config,
            telemetry: None,
        }
    }

    /// Attaches telemetry.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: McqTelemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Generation settings in effect.
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Shared language model.
    #[must_use]
    pub fn model(&self) -> Arc<dyn LanguageModel> {
        Arc::clone(&self.model)
    }

    /// Resolves the request input to text.
    pub fn acquire(&self, payload: InputPayload) -> McqResult<String> {
        let source = match &payload.file {
            Some(file) if !file.is_placeholder() => file.filename.clone(),
            _ => "text".to_string(),
        };
        match acquire_text(payload) {
            Ok(text) => {
                self.log(
                    LogLevel::Debug,
                    "mcq.acquire.complete",
                    json!({ "source": source, "chars": text.chars().count() }),
                );
                Ok(text)
            }
            Err(err) => {
                self.log(
                    LogLevel::Warn,
                    "mcq.acquire.failed",
                    json!({ "source": source, "code": err.code(), "error": err.to_string() }),
                );
                Err(err)
            }
        }
    }

    /// Generates up to `max_questions` questions from `text`.
    pub fn generate_from_text<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
    ) -> McqResult<Vec<Mcq>> {
        let limit = self.config.max_questions;
        let mut mcqs = Vec::with_capacity(limit);
        let mut considered = 0_usize;
        let mut skipped = 0_usize;
        for sentence in self.model.sentences(text) {
            if mcqs.len() >= limit || (!self.config.backfill && considered >= limit) {
                break;
            }
            considered += 1;
            match question_for_sentence(self.model.as_ref(), &self.config, &sentence, rng) {
                Ok(mcq) => mcqs.push(mcq),
                Err(err @ McqError::EmptyCandidateSet { .. }) => {
                    if self.config.on_unresolvable == UnresolvablePolicy::Fail {
                        self.log(
                            LogLevel::Error,
                            "mcq.generate.failed",
                            json!({ "code": err.code(), "error": err.to_string() }),
                        );
                        return Err(err);
                    }
                    skipped += 1;
                    self.log(
                        LogLevel::Warn,
                        "mcq.sentence.skipped",
                        json!({ "sentence": sentence, "reason": err.to_string() }),
                    );
                }
                Err(err) => return Err(err),
            }
        }
        self.log(
            LogLevel::Info,
            "mcq.generate.complete",
            json!({ "considered": considered, "skipped": skipped, "questions": mcqs.len() }),
        );
        if let Some(telemetry) = &self.telemetry {
            let _ = telemetry.event(
                "mcq.batch.generated",
                json!({ "questions": mcqs.len(), "skipped": skipped }),
            );
        }
        Ok(mcqs)
    }

    /// Acquires text from `payload` and generates questions from it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        payload: InputPayload,
        rng: &mut R,
    ) -> McqResult<Vec<Mcq>> {
        let text = self.acquire(payload)?;
        self.generate_from_text(&text, rng)
    }

    fn log(&self, level: LogLevel, message: &str, metadata: serde_json::Value) {
        if let Some(telemetry) = &self.telemetry {
            let _ = telemetry.log(level, message, metadata);
        }
    }
}
