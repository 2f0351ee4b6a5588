use std::fs::File;
use std::io::Write;

use tracing::info;

use crate::export::{ExportError, Exporter};
use crate::report::finding::CheckResult;

/// Writes all results as one JSON array to `<output_name>.json`
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON array of results written to <out>.json"
    }

    fn export(&self, results: &[CheckResult], output_name: &str) -> Result<(), ExportError> {
        let mut file = File::create(format!("{}.json", output_name))?;

        let bytes = serde_json::to_vec(results)?;
        file.write_all(&bytes)?;

        info!("Results were exported as json in: {}", output_name);
        Ok(())
    }
}
