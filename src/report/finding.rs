use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity level of a check result, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Informational,
    Low,
    Medium,
    High,
}

/// Raised when a severity label does not name a known level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported severity: {0}")]
pub struct SeverityError(pub String);

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Informational,
        Severity::Low,
        Severity::Medium,
        Severity::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Informational => "Informational",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl FromStr for Severity {
    type Err = SeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SeverityError(s.to_string()))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single result produced by a check.
///
/// The severity is kept as the producer wrote it; it is only parsed when the
/// result is exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Endpoint")]
    pub endpoint: String,

    #[serde(rename = "Severity")]
    pub severity: String,

    /// Identifier of the check that produced this result
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Remediation")]
    pub remediation: String,
}

impl CheckResult {
    pub fn parsed_severity(&self) -> Result<Severity, SeverityError> {
        self.severity.parse()
    }
}

/// Read a JSON array of results, in the same shape the json exporter writes
pub fn load_results(path: &Path) -> Result<Vec<CheckResult>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read results from {}", path.display()))?;
    let results = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse results in {}", path.display()))?;
    Ok(results)
}
