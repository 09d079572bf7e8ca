//! Parse provider output into validated findings

use crate::error::ExtractError;
use quincy_domain::{Finding, Pid, Severity};
use serde_json::Value;
use tracing::debug;

/// Parse provider text into findings
///
/// Strips Markdown code-fence markers wherever they occur, trims, then
/// parses the remainder as JSON and schema-validates every record.
///
/// An empty string after cleaning is "no findings", not an error: a model
/// that has nothing to report sometimes answers with an empty fenced block
/// or nothing at all. This boundary case is intentional.
pub fn extract_findings(raw: &str) -> Result<Vec<Finding>, ExtractError> {
    let cleaned = strip_code_fences(raw);
    debug!("Provider output after fence stripping: {}", cleaned);

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| ExtractError::MalformedResponse {
            detail: e.to_string(),
            text: cleaned.clone(),
        })?;

    let records = value
        .as_array()
        .ok_or_else(|| ExtractError::NotAnArray(json_type_name(&value).to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            validate_finding(record)
                .map_err(|reason| ExtractError::SchemaValidation { index, reason })
        })
        .collect()
}

/// Remove fence delimiters (triple backtick plus an attached language tag)
///
/// Pure textual substitution, not a Markdown parse: only the delimiters go,
/// the content between them stays.
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find("```") {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + 3..];

        // Drop a language tag glued to the fence, e.g. ```json
        let tag_len: usize = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.len_utf8())
            .sum();
        rest = &rest[tag_len..];
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validate one record against the finding shape
fn validate_finding(record: &Value) -> Result<Finding, String> {
    let obj = record
        .as_object()
        .ok_or_else(|| format!("record is {}, not an object", json_type_name(record)))?;

    let pid = match obj.get("pid") {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Pid::Number)
            .ok_or_else(|| format!("'pid' is not an integer: {}", n))?,
        Some(Value::String(s)) => Pid::Text(s.clone()),
        Some(other) => {
            return Err(format!(
                "'pid' must be a string or number, got {}",
                json_type_name(other)
            ))
        }
        None => return Err("missing field 'pid'".to_string()),
    };

    let severity_label = required_str(obj, "severity")?;
    let severity = Severity::parse(severity_label).ok_or_else(|| {
        format!(
            "'severity' must be one of \"High\", \"Medium\", \"Low\", got \"{}\"",
            severity_label
        )
    })?;

    Ok(Finding {
        pid,
        name: required_str(obj, "name")?.to_string(),
        path: required_str(obj, "path")?.to_string(),
        user: required_str(obj, "user")?.to_string(),
        connections: required_str(obj, "connections")?.to_string(),
        explanation: required_str(obj, "explanation")?.to_string(),
        severity,
    })
}

fn required_str<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a str, String> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!(
            "'{}' must be a string, got {}",
            field,
            json_type_name(other)
        )),
        None => Err(format!("missing field '{}'", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_FINDING: &str = r#"{
        "pid": 4312,
        "name": "svch0st.exe",
        "path": "C:\\Users\\Public\\svch0st.exe",
        "user": "SYSTEM",
        "connections": "185.220.101.4:443 ESTABLISHED",
        "explanation": "Masquerading system binary in a user-writable path",
        "severity": "High"
    }"#;

    fn array_of(finding_json: &str) -> String {
        format!("[{}]", finding_json)
    }

    #[test]
    fn test_parse_clean_json() {
        let findings = extract_findings(&array_of(VALID_FINDING)).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].name, "svch0st.exe");
        assert_eq!(findings[0].severity, Severity::High);
    }

    #[test]
    fn test_parse_is_idempotent_on_serialized_findings() {
        let original = extract_findings(&array_of(VALID_FINDING)).unwrap();
        let serialized = serde_json::to_string(&original).unwrap();
        let reparsed = extract_findings(&serialized).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_strips_json_fence() {
        let findings = extract_findings("```json\n[]\n```").unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_strips_fence_without_language_tag() {
        let response = format!("```\n{}\n```", array_of(VALID_FINDING));
        let findings = extract_findings(&response).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_strips_fences_anywhere_in_text() {
        // Delimiters in the middle of the payload go too; this mirrors the
        // global substitution the cleaning step is specified as.
        let response = format!("```json\n{}```\n", array_of(VALID_FINDING));
        let findings = extract_findings(&response).unwrap();
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_empty_string_is_no_findings() {
        assert!(extract_findings("").unwrap().is_empty());
        assert!(extract_findings("   \n\t  ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_after_fence_stripping_is_no_findings() {
        assert!(extract_findings("```json\n```").unwrap().is_empty());
        assert!(extract_findings("``` ```").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_malformed_response() {
        let result = extract_findings("{not json");
        match result {
            Err(ExtractError::MalformedResponse { text, .. }) => {
                assert_eq!(text, "{not json");
            }
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_prose_is_malformed_response() {
        let result = extract_findings("I could not find any suspicious processes.");
        assert!(matches!(
            result,
            Err(ExtractError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let result = extract_findings(r#"{"findings": []}"#);
        assert!(matches!(result, Err(ExtractError::NotAnArray(_))));
    }

    #[test]
    fn test_missing_field_fails_validation() {
        let record = r#"{"pid": 1, "name": "x", "path": "/x", "user": "root",
                         "connections": "NONE", "severity": "Low"}"#;
        let result = extract_findings(&array_of(record));
        match result {
            Err(ExtractError::SchemaValidation { index, reason }) => {
                assert_eq!(index, 0);
                assert!(reason.contains("explanation"));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_severity_fails_validation() {
        let record = r#"{"pid": 1, "name": "x", "path": "/x", "user": "root",
                         "connections": "NONE", "explanation": "why",
                         "severity": "Critical"}"#;
        let result = extract_findings(&array_of(record));
        assert!(matches!(
            result,
            Err(ExtractError::SchemaValidation { index: 0, .. })
        ));
    }

    #[test]
    fn test_wrong_typed_field_fails_validation() {
        let record = r#"{"pid": 1, "name": 42, "path": "/x", "user": "root",
                         "connections": "NONE", "explanation": "why",
                         "severity": "Low"}"#;
        let result = extract_findings(&array_of(record));
        match result {
            Err(ExtractError::SchemaValidation { reason, .. }) => {
                assert!(reason.contains("'name'"));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_record_fails_validation() {
        let result = extract_findings(r#"["just a string"]"#);
        assert!(matches!(
            result,
            Err(ExtractError::SchemaValidation { index: 0, .. })
        ));
    }

    #[test]
    fn test_second_record_reports_its_index() {
        let bad = r#"{"pid": 2}"#;
        let response = format!("[{}, {}]", VALID_FINDING, bad);
        let result = extract_findings(&response);
        assert!(matches!(
            result,
            Err(ExtractError::SchemaValidation { index: 1, .. })
        ));
    }

    #[test]
    fn test_pid_may_be_string_or_number() {
        let record = VALID_FINDING.replace("4312", "\"4312\"");
        let findings = extract_findings(&array_of(&record)).unwrap();
        assert_eq!(findings[0].pid, Pid::Text("4312".to_string()));
    }

    #[test]
    fn test_boolean_pid_fails_validation() {
        let record = VALID_FINDING.replace("4312", "true");
        let result = extract_findings(&array_of(&record));
        match result {
            Err(ExtractError::SchemaValidation { reason, .. }) => {
                assert!(reason.contains("'pid'"));
            }
            other => panic!("expected SchemaValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_strip_code_fences_plain_text() {
        assert_eq!(strip_code_fences("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn test_strip_code_fences_keeps_inner_content() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("``````"), "");
    }
}
