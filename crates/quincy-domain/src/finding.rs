//! Finding module - the structured suspicious-artifact record

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Process identifier as reported by the upstream model
///
/// The model is asked for a process ID but is free text underneath, so the
/// wire shape accepts either a JSON number or a string. Both render the
/// same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pid {
    /// Numeric process ID
    Number(i64),
    /// Process ID carried as a string
    Text(String),
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pid::Number(n) => write!(f, "{}", n),
            Pid::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Pid {
    fn from(n: i64) -> Self {
        Pid::Number(n)
    }
}

impl From<&str> for Pid {
    fn from(s: &str) -> Self {
        Pid::Text(s.to_string())
    }
}

/// A single suspicious artifact flagged by the analysis step
///
/// Findings carry no uniqueness constraint; order is whatever the upstream
/// returned (sorted by severity by convention, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Process ID
    pub pid: Pid,

    /// Process name
    pub name: String,

    /// Full process path
    pub path: String,

    /// User running the process
    pub user: String,

    /// Network connection details, or "NONE"
    pub connections: String,

    /// DFIR reason why this entry is suspicious
    pub explanation: String,

    /// Threat level
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_finding() -> Finding {
        Finding {
            pid: Pid::Number(4312),
            name: "svch0st.exe".to_string(),
            path: "C:\\Users\\Public\\svch0st.exe".to_string(),
            user: "SYSTEM".to_string(),
            connections: "185.220.101.4:443 ESTABLISHED".to_string(),
            explanation: "Masquerading system binary in a user-writable path".to_string(),
            severity: Severity::High,
        }
    }

    #[test]
    fn test_finding_round_trip() {
        let finding = sample_finding();
        let json = serde_json::to_string(&finding).unwrap();
        let parsed: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, finding);
    }

    #[test]
    fn test_pid_accepts_number_or_string() {
        let from_number: Pid = serde_json::from_str("4312").unwrap();
        assert_eq!(from_number, Pid::Number(4312));

        let from_string: Pid = serde_json::from_str("\"4312\"").unwrap();
        assert_eq!(from_string, Pid::Text("4312".to_string()));

        assert_eq!(from_number.to_string(), "4312");
        assert_eq!(from_string.to_string(), "4312");
    }

    #[test]
    fn test_finding_deserializes_string_pid() {
        let json = r#"{
            "pid": "880",
            "name": "nc.exe",
            "path": "C:\\Temp\\nc.exe",
            "user": "alice",
            "connections": "10.0.0.5:4444",
            "explanation": "Netcat listener",
            "severity": "Medium"
        }"#;

        let finding: Finding = serde_json::from_str(json).unwrap();
        assert_eq!(finding.pid, Pid::Text("880".to_string()));
        assert_eq!(finding.severity, Severity::Medium);
    }
}
