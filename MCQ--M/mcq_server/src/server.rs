use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use mcq_nlp::{InputPayload, Mcq, McqError, McqRuntime, McqTelemetry, UploadedFile};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_logging::LogLevel;
use tokio::net::TcpListener;

use crate::{config::AppConfig, render};

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    runtime: Arc<McqRuntime>,
    rng: Arc<Mutex<ChaCha8Rng>>,
    telemetry: Option<McqTelemetry>,
    max_upload_bytes: usize,
}

impl AppState {
    /// Wraps `runtime`; the random source is seeded from `seed` or entropy.
    pub fn new(
        runtime: McqRuntime,
        seed: Option<u64>,
        max_upload_bytes: usize,
        telemetry: Option<McqTelemetry>,
    ) -> Self {
        let rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            runtime: Arc::new(runtime),
            rng: Arc::new(Mutex::new(rng)),
            telemetry,
            max_upload_bytes,
        }
    }

    /// Per-request generator drawn from the shared source, so the lock is
    /// never held while a request is processed.
    fn request_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.rng.lock().gen())
    }

    fn log(&self, level: LogLevel, message: &str, metadata: serde_json::Value) {
        if let Some(telemetry) = &self.telemetry {
            let _ = telemetry.log(level, message, metadata);
        }
    }
}

/// JSON error body with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn invalid_request(status: StatusCode, message: String) -> Self {
        Self {
            status,
            code: "invalid_request",
            message,
        }
    }

    fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal_error",
            message,
        }
    }
}

impl From<McqError> for ApiError {
    fn from(err: McqError) -> Self {
        let status = if err.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        Self {
            status,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.message, "code": self.code })),
        )
            .into_response()
    }
}

/// Body of `POST /api/mcqs`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Text to question.
    pub text: String,
    /// Makes this request reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Questions returned by the JSON endpoint and the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated questions, in sentence order.
    pub mcqs: Vec<Mcq>,
}

/// Builds the application routes.
pub fn router(state: AppState) -> Router {
    let limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(index))
        .route("/generate_mcqs/", post(generate_form))
        .route("/api/mcqs", post(generate_json))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

/// Serves on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("reading listener address")?;
    state.log(
        LogLevel::Info,
        "mcq.server.listening",
        json!({ "addr": addr.to_string() }),
    );
    axum::serve(listener, router(state))
        .await
        .context("http server terminated")
}

/// Binds the configured address and serves.
pub async fn run(config: &AppConfig) -> Result<()> {
    let telemetry = config.telemetry.build("mcq-server", true)?;
    let runtime = config.runtime(Some(telemetry.clone()))?;
    let state = AppState::new(
        runtime,
        config.server.seed,
        config.server.max_upload_bytes,
        Some(telemetry),
    );
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    serve(listener, state).await
}

async fn index() -> Html<String> {
    Html(render::index_page())
}

async fn generate_form(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, ApiError> {
    let mut multipart = multipart
        .map_err(|rejection| ApiError::invalid_request(rejection.status(), rejection.body_text()))?;
    let mut payload = InputPayload::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::invalid_request(err.status(), err.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| ApiError::invalid_request(err.status(), err.body_text()))?;
                payload.file = Some(UploadedFile::new(filename, bytes.to_vec()));
            }
            "text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| ApiError::invalid_request(err.status(), err.body_text()))?;
                payload.text = Some(text);
            }
            _ => {}
        }
    }
    let rng = state.request_rng();
    let mcqs = run_pipeline(&state, payload, rng).await?;
    Ok(Html(render::results_page(&mcqs)))
}

async fn generate_json(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = request
        .map_err(|rejection| ApiError::invalid_request(rejection.status(), rejection.body_text()))?;
    let rng = request
        .seed
        .map_or_else(|| state.request_rng(), ChaCha8Rng::seed_from_u64);
    let mcqs = run_pipeline(&state, InputPayload::from_text(request.text), rng).await?;
    Ok(Json(GenerateResponse { mcqs }))
}

async fn run_pipeline(
    state: &AppState,
    payload: InputPayload,
    mut rng: ChaCha8Rng,
) -> Result<Vec<Mcq>, ApiError> {
    let runtime = Arc::clone(&state.runtime);
    let outcome = tokio::task::spawn_blocking(move || runtime.generate(payload, &mut rng))
        .await
        .map_err(|err| ApiError::internal(format!("generation task failed: {err}")))?;
    match outcome {
        Ok(mcqs) => {
            state.log(
                LogLevel::Info,
                "mcq.http.generated",
                json!({ "questions": mcqs.len() }),
            );
            Ok(mcqs)
        }
        Err(err) => {
            state.log(
                LogLevel::Warn,
                "mcq.http.rejected",
                json!({ "code": err.code(), "error": err.to_string() }),
            );
            Err(err.into())
        }
    }
}
