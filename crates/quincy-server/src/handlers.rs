//! HTTP request handlers for the triage server.
//!
//! Implements the analysis and mock-data endpoints using axum. Downstream
//! failures collapse into a single HTTP 500 with one of two user-facing
//! messages; full diagnostic detail stays in the server logs.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use quincy_domain::Finding;
use quincy_extractor::{AnalyzeError, Analyzer};
use quincy_llm::CompletionProvider;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::error;

/// 400 message for an absent or blank telemetry blob
pub const MISSING_DATA_MESSAGE: &str = "Missing data";

/// 500 message when the failure looks like a credential problem
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Check your GEMINI_API_KEY.";

/// 500 message for every other downstream failure
pub const GENERIC_FAILURE_MESSAGE: &str =
    "AI processing failed. Check server logs for malformed JSON or API key issues.";

/// Shared application state
///
/// One analyzer (and therefore one provider client) per process, shared
/// read-only across requests.
pub struct AppState<P>
where
    P: CompletionProvider,
{
    /// The prompt → provider → parse pipeline
    pub analyzer: Analyzer<P>,
    /// Directory mock telemetry files are served from
    pub data_dir: PathBuf,
}

impl<P> Clone for AppState<P>
where
    P: CompletionProvider,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: self.analyzer.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

/// Analysis request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw process and network telemetry
    #[serde(default, rename = "rawData")]
    pub raw_data: String,
}

/// Analysis success response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Validated findings, in provider order
    pub findings: Vec<Finding>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Liveness status
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request carried no telemetry
    MissingData,
    /// Analysis pipeline failure (provider, parse, or schema)
    Analysis(AnalyzeError),
    /// Requested mock file does not exist
    DataFileNotFound(String),
    /// Mock file exists but could not be read
    DataFileUnreadable,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingData => (StatusCode::BAD_REQUEST, MISSING_DATA_MESSAGE.to_string()),
            AppError::Analysis(e) => {
                let message = if e.is_auth_failure() {
                    AUTH_FAILED_MESSAGE
                } else {
                    GENERIC_FAILURE_MESSAGE
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::DataFileNotFound(filename) => (
                StatusCode::NOT_FOUND,
                format!(
                    "Mock file '{}' not found. Make sure it's at the project root.",
                    filename
                ),
            ),
            AppError::DataFileUnreadable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read data file.".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /analyze - Run one triage analysis over a telemetry blob
///
/// Blank input is rejected before any provider call is made.
async fn analyze<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    if request.raw_data.trim().is_empty() {
        return Err(AppError::MissingData);
    }

    match state.analyzer.analyze(&request.raw_data).await {
        Ok(findings) => Ok(Json(AnalyzeResponse { findings })),
        Err(e) => {
            // Full detail is for operators only; the client gets one of
            // two fixed messages.
            error!("Analysis failed: {}", e);
            Err(AppError::Analysis(e))
        }
    }
}

/// GET /load-data/:filename - Serve a mock telemetry file as text/plain
async fn load_data<P>(
    State(state): State<AppState<P>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError>
where
    P: CompletionProvider + Send + Sync + 'static,
{
    let path = state.data_dir.join(&filename);

    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => {
            Ok(([(header::CONTENT_TYPE, "text/plain")], contents).into_response())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!("Mock file {} not found", path.display());
            Err(AppError::DataFileNotFound(filename))
        }
        Err(e) => {
            error!("Error reading mock file {}: {}", path.display(), e);
            Err(AppError::DataFileUnreadable)
        }
    }
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<P>(state: AppState<P>) -> AxumRouter
where
    P: CompletionProvider + Send + Sync + 'static,
{
    AxumRouter::new()
        .route("/analyze", post(analyze::<P>))
        .route("/load-data/:filename", get(load_data::<P>))
        .route("/health", get(health))
        .with_state(state)
}
