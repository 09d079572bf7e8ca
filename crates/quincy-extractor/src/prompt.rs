//! LLM prompt engineering for triage analysis

/// Builds the fixed triage instruction prompt around raw telemetry
///
/// The telemetry is embedded verbatim at the end of the prompt: it is
/// opaque text from the model's point of view and is never escaped or
/// re-parsed here.
pub struct PromptBuilder {
    raw_data: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given telemetry blob
    pub fn new(raw_data: impl Into<String>) -> Self {
        Self {
            raw_data: raw_data.into(),
        }
    }

    /// Build the complete triage prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role framing and intelligence sources
        prompt.push_str(TRIAGE_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Output schema and JSON-only reminder
        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str("\n\n");

        // 3. The raw telemetry, verbatim
        prompt.push_str("Data:\n");
        prompt.push_str(&self.raw_data);
        prompt.push('\n');

        prompt
    }
}

const TRIAGE_INSTRUCTIONS: &str = r#"You are a DFIR triage assistant.
Analyze the following raw process and network data from a potentially compromised endpoint.
Before providing any final analysis or feedback, cross-reference key indicators from the raw data against authoritative cyber threat intelligence sources.
Specifically, search for and integrate findings related to file hashes, IP addresses, domains, and known vulnerabilities from the following:
- VirusTotal: for malware analysis reports and file reputation based on submitted hashes and IP addresses.
- Exploit-DB (Exploits Database): to identify known exploit code or techniques that match observed process behavior or software versions.
- NIST National Vulnerability Database (NVD): to check for documented Common Vulnerabilities and Exposures (CVEs) and associated weaknesses that correspond to any identified software versions or suspicious network activity patterns.
Consider the context of recent cyber threat trends, such as ransomware campaigns, phishing attacks, and advanced persistent threats (APTs), to enhance your analysis.
Return findings sorted by severity and include MITRE ATT&CK technique IDs if applicable.
An entry that turns out to be benign may still be included with a Low severity."#;

const OUTPUT_FORMAT: &str = r#"Return a JSON array of suspicious findings. Each finding must include:
- pid: Process ID
- name: Process name
- path: Full process path
- user: User running the process
- connections: Network connection details or 'NONE'
- severity: One of "High", "Medium", or "Low" based on threat level
- explanation: DFIR reason why this entry is suspicious

Respond ONLY with valid JSON. No commentary, no Markdown."#;
