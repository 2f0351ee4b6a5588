use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::info;

use crate::export::{ExportError, Exporter};
use crate::report::finding::CheckResult;

pub const CSV_HEADER: &str = "url,endpoint,severity,checkName,remediation";

/// Writes one comma-joined line per result to `<output_name>.csv`.
///
/// Fields are not quoted or escaped: a value holding a comma or a newline
/// breaks its row.
pub struct CsvExporter;

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Comma-separated rows written to <out>.csv (fields are not escaped)"
    }

    fn export(&self, results: &[CheckResult], output_name: &str) -> Result<(), ExportError> {
        let file = File::create(format!("{}.csv", output_name))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", CSV_HEADER)?;
        for result in results {
            writeln!(
                writer,
                "{},{},{},{},{}",
                result.url, result.endpoint, result.severity, result.name, result.remediation
            )?;
        }
        writer.flush()?;

        info!("Results were exported as csv in: {}", output_name);
        Ok(())
    }
}
