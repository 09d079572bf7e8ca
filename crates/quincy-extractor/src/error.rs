//! Error types for prompt construction and response extraction

use quincy_llm::ProviderError;
use thiserror::Error;

/// Text marker that identifies credential failures in provider error text
const AUTH_ERROR_MARKER: &str = "API key";

/// Errors that can occur while extracting findings from provider text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Response text is not valid JSON after fence stripping
    ///
    /// Carries the offending cleaned text for server-side diagnostics;
    /// callers must not surface it to clients.
    #[error("Malformed provider response: {detail}")]
    MalformedResponse {
        /// JSON parser message
        detail: String,
        /// The cleaned text that failed to parse
        text: String,
    },

    /// Top-level JSON value is not an array of findings
    #[error("Expected a JSON array of findings, got {0}")]
    NotAnArray(String),

    /// A record does not conform to the finding shape
    #[error("Finding {index} failed schema validation: {reason}")]
    SchemaValidation {
        /// Zero-based index of the offending record
        index: usize,
        /// What was missing or mistyped
        reason: String,
    },
}

/// Errors for a full analysis round trip (prompt → provider → parse)
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The completion provider failed
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider answered but the text failed extraction
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl AnalyzeError {
    /// Whether this failure should be reported as an authentication problem
    ///
    /// True for typed auth failures and for any error whose text carries
    /// the upstream's API-key marker.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            AnalyzeError::Provider(ProviderError::Auth(_)) => true,
            other => other.to_string().contains(AUTH_ERROR_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_auth_error_is_auth_failure() {
        let err = AnalyzeError::Provider(ProviderError::Auth("HTTP 403: denied".to_string()));
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_auth_marker_in_transport_error_is_auth_failure() {
        let err = AnalyzeError::Provider(ProviderError::Transport(
            "HTTP 400: API key not valid".to_string(),
        ));
        assert!(err.is_auth_failure());
    }

    #[test]
    fn test_other_errors_are_not_auth_failures() {
        let err = AnalyzeError::Provider(ProviderError::EmptyResponse);
        assert!(!err.is_auth_failure());

        let err = AnalyzeError::Extract(ExtractError::NotAnArray("object".to_string()));
        assert!(!err.is_auth_failure());
    }
}
