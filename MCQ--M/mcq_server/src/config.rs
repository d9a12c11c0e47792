use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use mcq_nlp::{EnglishModel, GenerationConfig, LanguageModel, McqRuntime, McqTelemetry};
use serde::Deserialize;
use shared_event_bus::FileEventPublisher;
use shared_logging::LogLevel;

/// Whole application configuration, one TOML section per concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Question generation settings.
    pub generation: GenerationConfig,
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Log and event sinks.
    pub telemetry: TelemetryConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port; `0` picks a free one.
    pub port: u16,
    /// Largest accepted request body.
    pub max_upload_bytes: usize,
    /// Seed for the shared random source; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            max_upload_bytes: 10 * 1024 * 1024,
            seed: None,
        }
    }
}

/// Log and event sinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// JSON-lines log file; stderr when absent.
    pub log_path: Option<PathBuf>,
    /// JSON-lines event file; events are dropped when absent.
    pub event_log: Option<PathBuf>,
    /// Minimum level written.
    pub level: LogLevel,
}

impl TelemetryConfig {
    /// Builds telemetry for `module`. Without a log path, records go to
    /// stderr only when `stderr_fallback` is set.
    pub fn build(&self, module: &str, stderr_fallback: bool) -> Result<McqTelemetry> {
        let mut builder = McqTelemetry::builder(module)
            .min_level(self.level)
            .stderr(stderr_fallback);
        if let Some(path) = &self.log_path {
            builder = builder.log_path(path);
        }
        if let Some(path) = &self.event_log {
            let publisher = FileEventPublisher::new(path)
                .with_context(|| format!("opening event log {}", path.display()))?;
            builder = builder.event_publisher(Arc::new(publisher));
        }
        builder.build()
    }
}

impl AppConfig {
    /// Constructs the pipeline with the built-in English model.
    pub fn runtime(&self, telemetry: Option<McqTelemetry>) -> Result<McqRuntime> {
        let model: Arc<dyn LanguageModel> =
            Arc::new(EnglishModel::new().context("building language model")?);
        let runtime = McqRuntime::new(model, self.generation.clone());
        Ok(match telemetry {
            Some(telemetry) => runtime.with_telemetry(telemetry),
            None => runtime,
        })
    }

    /// Reads a TOML file. Missing sections and fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Loads `path` when given, defaults otherwise, then applies the
    /// environment and validates.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `MCQ_HOST`, `MCQ_PORT`, `MCQ_LOG_PATH` and `MCQ_SEED`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("MCQ_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MCQ_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("MCQ_PORT={port:?} is not a port number"))?;
        }
        if let Some(path) = lookup("MCQ_LOG_PATH") {
            self.telemetry.log_path = Some(PathBuf::from(path));
        }
        if let Some(seed) = lookup("MCQ_SEED") {
            self.server.seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("MCQ_SEED={seed:?} is not an unsigned integer"))?,
            );
        }
        Ok(())
    }

    /// Checks every section.
    pub fn validate(&self) -> Result<()> {
        self.generation
            .validate()
            .context("invalid [generation] section")?;
        anyhow::ensure!(!self.server.host.trim().is_empty(), "server.host cannot be empty");
        anyhow::ensure!(
            self.server.max_upload_bytes > 0,
            "server.max_upload_bytes must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcq_nlp::UnresolvablePolicy;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn loads_partial_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mcq.toml");
        fs::write(
            &path,
            r#"
[generation]
max_questions = 3
on_unresolvable = "fail"

[server]
port = 9090

[telemetry]
level = "warn"
"#,
        )
        .unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.generation.max_questions, 3);
        assert_eq!(config.generation.on_unresolvable, UnresolvablePolicy::Fail);
        assert_eq!(config.generation.blank_marker, "______");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.telemetry.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            ("MCQ_HOST", "0.0.0.0"),
            ("MCQ_PORT", "8123"),
            ("MCQ_LOG_PATH", "/tmp/mcq.log"),
            ("MCQ_SEED", "99"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();
        config
            .apply_env(|key| vars.get(key).map(ToString::to_string))
            .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.server.seed, Some(99));
        assert_eq!(
            config.telemetry.log_path.as_deref(),
            Some(Path::new("/tmp/mcq.log"))
        );
    }

    #[test]
    fn bad_values_are_rejected() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(|key| (key == "MCQ_PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("MCQ_PORT"));

        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[generation]\nmax_questions = 0\n").unwrap();
        assert!(AppConfig::resolve(Some(&path)).is_err());
    }

    #[test]
    fn telemetry_section_writes_to_configured_log() {
        let dir = tempdir().unwrap();
        let telemetry = TelemetryConfig {
            log_path: Some(dir.path().join("logs/server.log")),
            event_log: Some(dir.path().join("events/mcq.jsonl")),
            level: LogLevel::Info,
        };
        let handle = telemetry.build("mcq-server", false).unwrap();
        handle
            .log(LogLevel::Info, "mcq.server.test", serde_json::json!({}))
            .unwrap();
        let content = fs::read_to_string(dir.path().join("logs/server.log")).unwrap();
        assert!(content.contains("mcq.server.test"));
        assert!(dir.path().join("events").is_dir());
    }
}
