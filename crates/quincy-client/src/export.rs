//! Findings export - in-memory findings to a downloadable JSON file

use crate::error::ClientError;
use quincy_domain::Finding;
use std::path::{Path, PathBuf};

/// Name of the exported findings file
pub const EXPORT_FILE_NAME: &str = "dfir_findings.json";

/// Serialize findings for export
///
/// Pretty-printed with two-space indentation, matching what an analyst
/// expects to diff or attach to a ticket.
pub fn export_findings(findings: &[Finding]) -> String {
    // A Vec<Finding> cannot fail to serialize
    serde_json::to_string_pretty(findings).unwrap_or_else(|_| "[]".to_string())
}

/// Write the export file into the given directory
///
/// Returns the path of the written file.
pub fn write_export(findings: &[Finding], dir: &Path) -> Result<PathBuf, ClientError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, export_findings(findings))?;
    Ok(path)
}
