//! Quincy Extractor
//!
//! Converts raw endpoint telemetry into structured findings via an LLM.
//!
//! # Architecture
//!
//! ```text
//! Telemetry → PromptBuilder → CompletionProvider → parser → Vec<Finding>
//! ```
//!
//! The completion service is free text underneath, so the parser is the
//! trust boundary: it strips Markdown fence noise, parses JSON, and
//! schema-validates every record before anything downstream sees it.
//!
//! # Example Usage
//!
//! ```
//! use quincy_extractor::Analyzer;
//! use quincy_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new("[]");
//! let analyzer = Analyzer::new(provider);
//!
//! let findings = analyzer.analyze("PID  NAME  USER ...").await?;
//! assert!(findings.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod error;
mod parser;
mod prompt;

pub use analyzer::Analyzer;
pub use error::{AnalyzeError, ExtractError};
pub use parser::extract_findings;
pub use prompt::PromptBuilder;
