use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::config::ExportConfig;
use crate::report::finding::{CheckResult, Severity, SeverityError};
use crate::report::{csv, json, terminal};

/// Everything that can stop an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nil parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("no result found")]
    EmptyResults,

    #[error(transparent)]
    Severity(#[from] SeverityError),

    #[error("max severity ({max}) reached ({sev})")]
    MaxSeverityReached { max: Severity, sev: Severity },

    #[error("unsupported exporter: {name}")]
    UnsupportedExporter { name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// An output format results can be exported to.
/// Each exporter owns one artifact: a `<output_name>.<ext>` file or the console.
pub trait Exporter: Send + Sync {
    /// Format name as it appears in configuration (e.g. "csv")
    fn name(&self) -> &str;

    /// Short description of the artifact this exporter produces
    fn description(&self) -> &str;

    /// Render the full result list
    fn export(&self, results: &[CheckResult], output_name: &str) -> Result<(), ExportError>;
}

static EXPORTERS: &[&dyn Exporter] = &[
    &csv::CsvExporter,
    &json::JsonExporter,
    &terminal::StdoutExporter,
];

/// Registry of all available exporters
pub fn all_exporters() -> &'static [&'static dyn Exporter] {
    EXPORTERS
}

/// Find an exporter by its format name
pub fn exporter_by_name(name: &str) -> Option<&'static dyn Exporter> {
    EXPORTERS.iter().copied().find(|e| e.name() == name)
}

/// Export results in every configured format.
///
/// All severities are checked against `config.max_severity` before anything
/// is written. Formats run in configured order, duplicates skipped; the first
/// failing format stops the loop and artifacts already written are kept.
pub fn export(
    results: &[CheckResult],
    config: Option<&ExportConfig>,
    output_name: &str,
) -> Result<(), ExportError> {
    let config = config.ok_or(ExportError::MissingParameter { name: "config" })?;
    if results.is_empty() {
        return Err(ExportError::EmptyResults);
    }

    check_severities(results, config.max_severity)?;

    let mut exported = HashSet::new();
    for format in &config.export_formats {
        if !exported.insert(format.as_str()) {
            debug!("Skipping duplicate format {}", format);
            continue;
        }

        let exporter = exporter_by_name(format).ok_or_else(|| ExportError::UnsupportedExporter {
            name: format.clone(),
        })?;

        debug!("Exporting {} results as {}", results.len(), exporter.name());
        exporter.export(results, output_name)?;
    }

    Ok(())
}

/// Fails on the first result that does not parse or sits above `max`
fn check_severities(results: &[CheckResult], max: Severity) -> Result<(), ExportError> {
    for result in results {
        let sev = result.parsed_severity()?;
        if sev > max {
            return Err(ExportError::MaxSeverityReached { max, sev });
        }
    }
    Ok(())
}
