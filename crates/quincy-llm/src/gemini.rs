//! Gemini Provider Implementation
//!
//! Integration with Google's Gemini `generateContent` REST API.
//!
//! # Behavior
//!
//! - Exactly one upstream call per `complete` invocation, no retry
//! - No timeout override beyond reqwest's transport default
//! - No streaming: the full candidate text is awaited before returning
//! - Raw failure bodies are logged for operator diagnosis, never surfaced
//!   verbatim to callers

use crate::{CompletionProvider, ProviderError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for triage analysis
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Marker the upstream puts in error bodies when the credential is bad
const AUTH_ERROR_MARKER: &str = "API key";

/// Gemini API provider
///
/// Holds one shared `reqwest::Client`; the intended usage is a single
/// instance constructed at process start and reused across requests.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response envelope from the generateContent API
///
/// Every level is optional: content filtering, truncation, or an empty
/// candidate list all arrive as a well-formed envelope with pieces missing.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Pull the first candidate's first text part, if any
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Gemini API credential
    /// - `model`: model to use (e.g. "gemini-2.5-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API endpoint (used for tests against a local stub)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                ProviderError::Transport(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Gemini API error (HTTP {}): {}", status, body);

            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
                || body.contains(AUTH_ERROR_MARKER)
            {
                return Err(ProviderError::Auth(format!("HTTP {}: {}", status, body)));
            }
            return Err(ProviderError::Transport(format!("HTTP {}", status)));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini envelope: {}", e);
            ProviderError::Transport(format!("Malformed response envelope: {}", e))
        })?;

        match envelope.first_text() {
            Some(text) if !text.trim().is_empty() => {
                debug!("Gemini returned {} chars", text.len());
                Ok(text.to_string())
            }
            _ => {
                error!("Gemini returned an envelope with no usable text");
                Err(ProviderError::EmptyResponse)
            }
        }
    }
}

impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.generate(prompt).await
    }
}
