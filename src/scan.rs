/// Scan verdict returned by the SecureFileGuard gateway
///
/// The gateway replies with a small JSON object whose fields are all
/// optional. Missing or empty fields fall back to fixed placeholder text
/// so the results panel always shows a complete verdict.

use serde::Deserialize;

/// The structured verdict for one uploaded file.
///
/// `status` and `threat` are what the user sees. `message` carries the
/// gateway's human-readable detail (e.g. the quarantine reason); it is
/// logged for diagnostics but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub threat: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ScanResult {
    /// The status line shown in the results panel.
    /// Absent or empty status renders as "Unknown".
    pub fn status_line(&self) -> String {
        format!("Status: {}", present(self.status.as_deref(), "Unknown"))
    }

    /// The threat line shown in the results panel.
    /// Absent or empty threat renders as "None detected".
    pub fn threat_line(&self) -> String {
        format!("Threat: {}", present(self.threat.as_deref(), "None detected"))
    }
}

/// Substitute `fallback` when the field is missing or empty.
fn present<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}
