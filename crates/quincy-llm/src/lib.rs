//! Quincy Completion Provider Layer
//!
//! The generative-AI completion service is a black box behind the
//! [`CompletionProvider`] trait: one prompt in, one blob of free text out.
//! Everything downstream treats that text as untrusted.
//!
//! # Providers
//!
//! - `GeminiProvider`: Google Gemini `generateContent` REST integration
//! - `MockProvider`: deterministic test double with call counting
//!
//! # Examples
//!
//! ```
//! use quincy_llm::{CompletionProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("[]");
//! let text = provider.complete("analyze this").await.unwrap();
//! assert_eq!(text, "[]");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::future::Future;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur when calling the completion provider
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// Upstream rejected the credential
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Call succeeded but no usable text was present in the envelope
    #[error("Provider returned an empty or invalid response")]
    EmptyResponse,

    /// Network, rate-limit, quota, or malformed-envelope failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Trait for completion provider operations
///
/// Implementations make exactly one upstream call per `complete` invocation:
/// no retry, no streaming, no timeout beyond the transport default.
pub trait CompletionProvider {
    /// Generate a text completion for the given prompt
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Mock completion provider for deterministic testing
///
/// Returns a pre-configured response (or error) without making any network
/// calls, and counts invocations so tests can assert how many upstream
/// calls a code path made. Clones share the same counter.
///
/// # Examples
///
/// ```
/// use quincy_llm::{CompletionProvider, MockProvider, ProviderError};
///
/// # async fn example() {
/// let provider = MockProvider::with_error(ProviderError::EmptyResponse);
/// assert!(provider.complete("prompt").await.is_err());
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    result: Arc<Mutex<Result<String, ProviderError>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a MockProvider returning a fixed text for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            result: Arc::new(Mutex::new(Ok(response.into()))),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockProvider failing every call with the given error
    pub fn with_error(error: ProviderError) -> Self {
        Self {
            result: Arc::new(Mutex::new(Err(error))),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Replace the scripted result for subsequent calls
    pub fn set_result(&self, result: Result<String, ProviderError>) {
        *self.result.lock().unwrap() = result;
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl CompletionProvider for MockProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
        *self.call_count.lock().unwrap() += 1;
        self.result.lock().unwrap().clone()
    }
}
