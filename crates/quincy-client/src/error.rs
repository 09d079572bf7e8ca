//! Error types for the client SDK.

use thiserror::Error;

/// Client operation errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// No telemetry was provided
    #[error("No telemetry provided - paste or load process data first")]
    EmptyInput,

    /// An analysis is already loading; overlapping requests are refused
    #[error("An analysis is already in flight")]
    AnalysisInFlight,

    /// Server answered with an error payload
    #[error("Server error: {0}")]
    Server(String),

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem error (reading telemetry, writing exports)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            ClientError::Connection(e.to_string())
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Server(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
