//! Error types for saci

use thiserror::Error;

/// Result type alias using SaciError
pub type Result<T> = std::result::Result<T, SaciError>;

/// Error type alias for convenience
pub type Error = SaciError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
    pub const DEPENDENCY: i32 = 4;
}

/// Main error type for saci
#[derive(Debug, Error)]
pub enum SaciError {
    #[error("Missing field '{key}' in test case {index}")]
    MissingField { key: String, index: usize },

    #[error("Malformed document: path '{path}' not found")]
    MalformedDocument { path: String },

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dependency error: {0}")]
    Dependency(String),

    #[error("PDF conversion failed: {0}")]
    Conversion(String),
}

impl SaciError {
    /// Shorthand for a missing test-case attribute
    pub fn missing(key: impl Into<String>, index: usize) -> Self {
        Self::MissingField {
            key: key.into(),
            index,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingField { .. }
            | Self::MalformedDocument { .. }
            | Self::Xml(_)
            | Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::Dependency(_) => exit_codes::DEPENDENCY,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
