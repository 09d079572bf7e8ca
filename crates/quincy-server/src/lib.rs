//! Quincy Server
//!
//! HTTP service for AI-assisted endpoint triage: accepts raw process and
//! network telemetry, runs it through the analysis pipeline, and returns
//! validated findings. Also serves mock telemetry files for demos.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use quincy_extractor::Analyzer;
use quincy_llm::GeminiProvider;
use tokio::net::TcpListener;
use tracing::info;

/// Environment variable holding the Gemini credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The provider credential is not set
    #[error("GEMINI_API_KEY is not set in the environment")]
    MissingApiKey,

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the triage HTTP server
///
/// Reads the provider credential from the environment, builds the shared
/// provider client once, and starts the axum server. Refuses to start
/// without a credential.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let api_key = std::env::var(API_KEY_VAR).map_err(|_| ServerError::MissingApiKey)?;

    info!("Starting Quincy triage server");
    info!("Bind address: {}", config.bind_addr());
    info!("Model: {}", config.model);
    info!("Data directory: {}", config.data_dir.display());

    // One provider client per process, shared across requests
    let provider = GeminiProvider::new(api_key, &config.model);

    let state = AppState {
        analyzer: Analyzer::new(provider),
        data_dir: config.data_dir.clone(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
