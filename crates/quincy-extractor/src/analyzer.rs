//! Core Analyzer implementation

use crate::error::AnalyzeError;
use crate::parser::extract_findings;
use crate::prompt::PromptBuilder;
use quincy_domain::Finding;
use quincy_llm::CompletionProvider;
use std::sync::Arc;
use tracing::{debug, info};

/// The Analyzer turns raw telemetry into validated findings
///
/// One provider call per analysis, no retry. The provider is shared so a
/// single instance can serve concurrent requests.
pub struct Analyzer<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
}

impl<P> Analyzer<P>
where
    P: CompletionProvider + Send + Sync,
{
    /// Create a new Analyzer around a completion provider
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Analyze a telemetry blob
    ///
    /// The caller is responsible for rejecting empty input before this is
    /// reached; by the time we are here one provider call is always made.
    pub async fn analyze(&self, raw_data: &str) -> Result<Vec<Finding>, AnalyzeError> {
        let prompt = PromptBuilder::new(raw_data).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = self.provider.complete(&prompt).await?;
        debug!("Provider response length: {} chars", response.len());

        let findings = extract_findings(&response)?;
        info!("Extracted {} findings", findings.len());

        Ok(findings)
    }
}

impl<P> Clone for Analyzer<P>
where
    P: CompletionProvider,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}
