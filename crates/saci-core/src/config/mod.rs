//! Configuration management

use crate::error::{Result, SaciError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Account the report is generated for
    #[serde(default)]
    pub account: AccountConfig,

    /// External PDF renderer settings
    #[serde(default)]
    pub pdf: PdfConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging toggles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// When false, no log output is produced unless RUST_LOG is set
    #[serde(default = "default_true")]
    pub enable_logging: bool,

    /// Default tracing filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Account identity shown in the report header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountConfig {
    #[serde(default = "default_account_id")]
    pub id: String,

    #[serde(default = "default_account_name")]
    pub name: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            id: default_account_id(),
            name: default_account_name(),
        }
    }
}

fn default_account_id() -> String {
    "012345678912".to_string()
}

fn default_account_name() -> String {
    "Azure-test-account".to_string()
}

/// wkhtmltopdf invocation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdfConfig {
    /// Binary name or path
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Minimum acceptable version reported by the binary
    #[serde(default = "default_min_version")]
    pub min_version: String,

    /// Switch that makes the binary print its version
    #[serde(default = "default_version_flag")]
    pub version_flag: String,

    /// Extra arguments placed before the input/output paths
    #[serde(default = "default_pdf_args")]
    pub args: Vec<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            min_version: default_min_version(),
            version_flag: default_version_flag(),
            args: default_pdf_args(),
        }
    }
}

fn default_binary() -> String {
    "wkhtmltopdf".to_string()
}

fn default_min_version() -> String {
    "0.12.2".to_string()
}

fn default_version_flag() -> String {
    "--version".to_string()
}

fn default_pdf_args() -> Vec<String> {
    vec!["--quiet".to_string(), "--enable-local-file-access".to_string()]
}

/// Report presentation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Cloud label rendered in the header (e.g. azure, aws)
    #[serde(default = "default_cloud")]
    pub cloud: String,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cloud: default_cloud(),
            title: default_title(),
        }
    }
}

fn default_cloud() -> String {
    "azure".to_string()
}

fn default_title() -> String {
    "CIS Benchmark Report".to_string()
}

impl Config {
    /// Load config from a specific path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            config.validate()?;
            tracing::debug!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::debug!("No configuration at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Serialize to the on-disk YAML form
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    fn validate(&self) -> Result<()> {
        if self.pdf.binary.trim().is_empty() {
            return Err(SaciError::Config("pdf.binary must not be empty".into()));
        }
        if self.pdf.min_version.trim().is_empty() {
            return Err(SaciError::Config("pdf.min_version must not be empty".into()));
        }
        Ok(())
    }
}
