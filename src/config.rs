use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::ExportArgs;
use crate::report::finding::Severity;

pub const CONFIG_FILE_NAME: &str = ".scanexport.toml";

/// scanexport configuration (loaded from .scanexport.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanExportConfig {
    #[serde(default)]
    pub export: ExportConfig,
}

/// Settings read by the exporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Highest severity a result may carry; anything above refuses the export
    #[serde(default = "default_max_severity")]
    pub max_severity: Severity,

    /// Formats to export, in order. Duplicates are exported once.
    #[serde(default = "default_formats", rename = "formats")]
    pub export_formats: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            max_severity: default_max_severity(),
            export_formats: default_formats(),
        }
    }
}

fn default_max_severity() -> Severity {
    Severity::High
}

fn default_formats() -> Vec<String> {
    vec!["stdout".to_string()]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ScanExportConfig {
    /// Try to load .scanexport.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match Self::load_from(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Load an explicit config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str::<ScanExportConfig>(&content).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Build the effective export config: file values first, CLI flags on top
pub fn resolve(args: &ExportArgs) -> Result<ExportConfig> {
    let mut config = if let Some(ref path) = args.config {
        ScanExportConfig::load_from(path)?.export
    } else if args.no_config {
        ExportConfig::default()
    } else {
        let cwd = std::env::current_dir()?;
        ScanExportConfig::load(&cwd)
            .map(|c| c.export)
            .unwrap_or_default()
    };

    if let Some(max) = args.max_severity {
        config.max_severity = max;
    }
    if !args.format.is_empty() {
        config.export_formats = args.format.clone();
    }

    debug!(
        "Effective config: max severity {}, formats [{}]",
        config.max_severity,
        config.export_formats.join(", ")
    );
    Ok(config)
}

/// Walk up from the start directory to find .scanexport.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE_NAME);
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .scanexport.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        println!("⚠️  {} already exists in this directory", CONFIG_FILE_NAME);
        return Ok(());
    }

    let default_config = r#"# scanexport configuration

[export]
# Refuse to export if any result is above this severity.
# Values: "Informational", "Low", "Medium", "High"
max_severity = "High"

# Formats to export, in order: "csv", "json", "stdout"
formats = ["stdout"]
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created {}", CONFIG_FILE_NAME);
    println!("   Edit it to customize your export settings.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args() -> ExportArgs {
        ExportArgs {
            input: PathBuf::from("results.json"),
            out: "results".to_string(),
            format: Vec::new(),
            max_severity: None,
            config: None,
            no_config: true,
        }
    }

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.max_severity, Severity::High);
        assert_eq!(config.export_formats, vec!["stdout"]);
    }

    #[test]
    fn test_parse_export_table() {
        let config: ScanExportConfig = toml::from_str(
            r#"
            [export]
            max_severity = "Medium"
            formats = ["csv", "json", "csv"]
            "#,
        )
        .unwrap();
        assert_eq!(config.export.max_severity, Severity::Medium);
        assert_eq!(config.export.export_formats, vec!["csv", "json", "csv"]);
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let config: ScanExportConfig = toml::from_str("").unwrap();
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_load_walks_up_to_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[export]\nmax_severity = \"Low\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = ScanExportConfig::load(&nested).unwrap();
        assert_eq!(config.export.max_severity, Severity::Low);
        assert_eq!(config.export.export_formats, vec!["stdout"]);
    }

    #[test]
    fn test_load_ignores_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[export\n").unwrap();
        assert!(ScanExportConfig::load(dir.path()).is_none());
    }

    #[test]
    fn test_load_from_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[export]\nmax_severity = \"Critical\"\n").unwrap();

        let err = ScanExportConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_resolve_cli_overrides() {
        let mut args = args();
        args.max_severity = Some(Severity::Low);
        args.format = vec!["json".to_string(), "csv".to_string()];

        let config = resolve(&args).unwrap();
        assert_eq!(config.max_severity, Severity::Low);
        assert_eq!(config.export_formats, vec!["json", "csv"]);
    }

    #[test]
    fn test_resolve_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[export]\nformats = [\"csv\"]\n").unwrap();

        let mut args = args();
        args.no_config = false;
        args.config = Some(path);

        let config = resolve(&args).unwrap();
        assert_eq!(config.max_severity, Severity::High);
        assert_eq!(config.export_formats, vec!["csv"]);
    }
}
