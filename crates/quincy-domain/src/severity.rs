//! Severity module - threat levels assigned to findings

use serde::{Deserialize, Serialize};

/// Threat severity of a finding
///
/// The serialized labels are case-sensitive: the upstream model is
/// instructed to emit exactly "High", "Medium", or "Low", and schema
/// validation rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Likely-malicious artifact requiring immediate attention
    High,

    /// Suspicious artifact warranting investigation
    Medium,

    /// Benign or low-risk artifact
    Low,
}

impl Severity {
    /// Get the severity label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Parse a severity label (case-sensitive, exact match)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_labels() {
        assert_eq!(Severity::parse("High"), Some(Severity::High));
        assert_eq!(Severity::parse("Medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("Low"), Some(Severity::Low));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Severity::parse("high"), None);
        assert_eq!(Severity::parse("HIGH"), None);
        assert_eq!(Severity::parse("Critical"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"High\"");

        let parsed: Severity = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Severity::Low);

        let bad: Result<Severity, _> = serde_json::from_str("\"low\"");
        assert!(bad.is_err());
    }
}
