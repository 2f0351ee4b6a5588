use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use owo_colors::OwoColorize;

use crate::export::{ExportError, Exporter};
use crate::report::finding::{CheckResult, Severity};

const HEADER: [&str; 5] = ["URL", "Endpoint", "Severity", "Plugin", "Remediation"];
const SEVERITY_COLUMN: usize = 2;

/// Prints results as a color-coded table on stdout
pub struct StdoutExporter;

impl Exporter for StdoutExporter {
    fn name(&self) -> &str {
        "stdout"
    }

    fn description(&self) -> &str {
        "Color-coded table printed to the terminal"
    }

    fn export(&self, results: &[CheckResult], _output_name: &str) -> Result<(), ExportError> {
        let table = build_table(results)?;
        println!("{table}");
        Ok(())
    }
}

/// Severity label wrapped in its terminal color
pub fn severity_cell(severity: Severity) -> String {
    let label = severity.as_str();
    match severity {
        Severity::High => label.red().to_string(),
        Severity::Medium => label.yellow().to_string(),
        Severity::Low => label.green().to_string(),
        Severity::Informational => label.cyan().to_string(),
    }
}

/// Table rows, sorted ascending on the rendered severity cell.
///
/// The sort compares the colored strings themselves, so rows group by color
/// code (red, green, yellow, cyan) rather than by severity rank.
pub fn table_rows(results: &[CheckResult]) -> Result<Vec<[String; 5]>, ExportError> {
    let mut rows = results
        .iter()
        .map(|result| -> Result<[String; 5], ExportError> {
            let severity = result.parsed_severity()?;
            Ok([
                result.url.clone(),
                result.endpoint.clone(),
                severity_cell(severity),
                result.name.clone(),
                result.remediation.clone(),
            ])
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    rows.sort_by(|a, b| a[SEVERITY_COLUMN].cmp(&b[SEVERITY_COLUMN]));
    Ok(rows)
}

pub fn build_table(results: &[CheckResult]) -> Result<Table, ExportError> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADER);

    for row in table_rows(results)? {
        table.add_row(row);
    }

    Ok(table)
}
