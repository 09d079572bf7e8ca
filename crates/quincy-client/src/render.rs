//! Findings rendering - findings in, report HTML out

use quincy_domain::Finding;

/// Map a severity label to its display accent
///
/// Case-sensitive exact match on "High" and "Medium"; anything else falls
/// into the green bucket. The default-safe arm is deliberate: an
/// unrecognized label renders as low-risk rather than alarming.
pub fn severity_accent(label: &str) -> &'static str {
    match label {
        "High" => "red-400",
        "Medium" => "yellow-300",
        _ => "green-300",
    }
}

/// Render findings as report HTML
///
/// Empty findings produce a "clean" banner; otherwise one card per finding
/// in the order the server returned them.
pub fn render_findings(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return CLEAN_BANNER.to_string();
    }

    let mut html = format!(
        "<p class=\"text-white text-lg mb-4 font-semibold\">AI Triage: Found \
         <span class=\"text-red-400\">{}</span> Suspicious Artifact(s)</p>\n",
        findings.len()
    );

    for finding in findings {
        let accent = severity_accent(finding.severity.as_str());
        html.push_str(&format!(
            r#"<div class="flagged-item p-4 rounded-lg shadow-xl mb-4">
  <p class="text-xl font-bold text-red-300">{name} (PID: {pid})</p>
  <p class="text-sm text-gray-300 mb-2">Path: <span class="font-mono text-xs text-white">{path}</span></p>
  <p class="text-sm text-gray-300 mb-2">User: {user}</p>
  <p class="text-sm text-gray-300 mb-2">Network: <span class="font-mono text-xs text-yellow-300">{connections}</span></p>
  <p class="text-sm text-gray-300 mb-2">Severity: <span class="font-bold text-{accent}">{severity}</span></p>
  <p class="text-sm font-semibold text-red-400 mt-2">AI Explanation:</p>
  <p class="text-sm text-gray-200">{explanation}</p>
</div>
"#,
            name = finding.name,
            pid = finding.pid,
            path = finding.path,
            user = finding.user,
            connections = finding.connections,
            accent = accent,
            severity = finding.severity,
            explanation = finding.explanation,
        ));
    }

    html
}

const CLEAN_BANNER: &str = r#"<div class="p-6 bg-green-700/30 rounded-lg text-center border border-green-600">
  <p class="text-xl font-bold text-green-300">Endpoint Clean</p>
  <p class="text-green-200">No suspicious artifacts found.</p>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use quincy_domain::{Pid, Severity};

    fn finding(severity: Severity) -> Finding {
        Finding {
            pid: Pid::Number(880),
            name: "nc.exe".to_string(),
            path: "C:\\Temp\\nc.exe".to_string(),
            user: "alice".to_string(),
            connections: "10.0.0.5:4444 ESTABLISHED".to_string(),
            explanation: "Netcat reverse shell".to_string(),
            severity,
        }
    }

    #[test]
    fn test_empty_findings_render_clean_banner() {
        let html = render_findings(&[]);
        assert!(html.contains("Endpoint Clean"));
        assert!(!html.contains("flagged-item"));
    }

    #[test]
    fn test_one_finding_renders_one_card() {
        let html = render_findings(&[finding(Severity::High)]);
        assert_eq!(html.matches("flagged-item").count(), 1);
        assert!(html.contains("nc.exe (PID: 880)"));
        assert!(html.contains("text-red-400"));
        assert!(!html.contains("Endpoint Clean"));
    }

    #[test]
    fn test_card_count_matches_findings() {
        let findings = vec![finding(Severity::High), finding(Severity::Low)];
        let html = render_findings(&findings);
        assert_eq!(html.matches("flagged-item").count(), 2);
        assert!(html.contains("Found <span class=\"text-red-400\">2</span>"));
    }

    #[test]
    fn test_severity_accent_mapping() {
        assert_eq!(severity_accent("High"), "red-400");
        assert_eq!(severity_accent("Medium"), "yellow-300");
        assert_eq!(severity_accent("Low"), "green-300");
    }

    #[test]
    fn test_severity_accent_defaults_to_green() {
        // Case-sensitive: anything that isn't exactly High/Medium is green
        assert_eq!(severity_accent("high"), "green-300");
        assert_eq!(severity_accent("MEDIUM"), "green-300");
        assert_eq!(severity_accent("Critical"), "green-300");
        assert_eq!(severity_accent(""), "green-300");
    }

    #[test]
    fn test_medium_finding_uses_yellow_accent() {
        let html = render_findings(&[finding(Severity::Medium)]);
        assert!(html.contains("text-yellow-300\">Medium"));
    }
}
