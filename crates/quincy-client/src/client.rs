//! Analysis client implementation.

use crate::error::ClientError;
use quincy_domain::Finding;
use serde::{Deserialize, Serialize};

/// Where the client is in its one-analysis-at-a-time lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    /// No request in flight, nothing rendered yet
    Idle,
    /// A request is in flight; further analyses are refused
    Loading,
    /// The last request settled successfully
    Rendered,
    /// The last request failed
    Failed,
}

/// Analysis request body
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "rawData")]
    raw_data: &'a str,
}

/// Analysis success body
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    findings: Vec<Finding>,
}

/// Error body from the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Triage analysis client
///
/// Owns the findings from the most recent successful analysis so export
/// serializes in-memory state rather than re-fetching.
pub struct AnalysisClient {
    endpoint: String,
    http: reqwest::Client,
    state: AnalysisState,
    findings: Vec<Finding>,
}

impl AnalysisClient {
    /// Create a new client for the given server endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            state: AnalysisState::Idle,
            findings: Vec::new(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> AnalysisState {
        self.state
    }

    /// Findings from the most recent successful analysis
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Run one analysis round trip
    ///
    /// Refuses to overlap requests: while a request is loading, a second
    /// call fails immediately with `AnalysisInFlight` and no request is
    /// issued. Whatever the outcome, the client always leaves `Loading`
    /// exactly once per submitted request.
    pub async fn analyze(&mut self, raw_data: &str) -> Result<&[Finding], ClientError> {
        if self.state == AnalysisState::Loading {
            return Err(ClientError::AnalysisInFlight);
        }

        let data = raw_data.trim();
        if data.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        self.state = AnalysisState::Loading;

        match self.post_analyze(data).await {
            Ok(findings) => {
                self.findings = findings;
                self.state = AnalysisState::Rendered;
                Ok(&self.findings)
            }
            Err(e) => {
                self.state = AnalysisState::Failed;
                Err(e)
            }
        }
    }

    async fn post_analyze(&self, raw_data: &str) -> Result<Vec<Finding>, ClientError> {
        let url = format!("{}/analyze", self.endpoint);

        let response = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { raw_data })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            // Prefer the server's error field, fall back to the status
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP error! status: {}", status),
            };
            return Err(ClientError::Server(message));
        }

        let body: AnalyzeResponse = response.json().await?;
        Ok(body.findings)
    }
}
