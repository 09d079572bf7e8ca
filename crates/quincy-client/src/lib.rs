//! Quincy Client SDK
//!
//! Drives one analysis round trip against a triage server and turns the
//! findings into a rendered report and an exportable file.
//!
//! The client holds an explicit state machine
//! (`Idle → Loading → Rendered | Failed`) with a hard in-flight guard: a
//! second analysis while one is loading is refused rather than overlapped.

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod export;
pub mod render;

pub use client::{AnalysisClient, AnalysisState};
pub use error::ClientError;
pub use export::{export_findings, write_export, EXPORT_FILE_NAME};
pub use render::{render_findings, severity_accent};
