//! Quincy Domain Layer
//!
//! Core types for AI-assisted endpoint triage. A `Finding` is a single
//! structured suspicious-artifact record produced by the analysis step.
//! All entities are request-scoped; nothing here persists between requests.
//!
//! This crate holds the typed contract between the untrusted, free-text
//! upstream completion service and everything that consumes findings.
//! No I/O lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod finding;
pub mod severity;

// Re-exports for convenience
pub use finding::{Finding, Pid};
pub use severity::Severity;
