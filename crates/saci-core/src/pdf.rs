//! HTML to PDF conversion through an external renderer

use crate::config::PdfConfig;
use crate::error::{Result, SaciError};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Converts HTML documents into PDF files
pub trait PdfConverter {
    /// Convert an HTML file on disk into a PDF at `output`
    fn convert_file(&self, html: &Path, output: &Path) -> Result<()>;

    /// Convert an HTML string into a PDF at `output`
    ///
    /// The HTML is written to a temporary `.html` file that is removed
    /// once conversion finishes.
    fn convert_html(&self, html: &str, output: &Path) -> Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix("saci-report-")
            .suffix(".html")
            .tempfile()?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        self.convert_file(tmp.path(), output)
    }
}

/// wkhtmltopdf command-line converter
#[derive(Debug, Clone)]
pub struct Wkhtmltopdf {
    binary: String,
    args: Vec<String>,
}

impl Wkhtmltopdf {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            args: config.args.clone(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }
}

impl PdfConverter for Wkhtmltopdf {
    fn convert_file(&self, html: &Path, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(
            "Running {} {:?} {:?} {:?}",
            self.binary,
            self.args,
            html,
            output
        );
        let result = Command::new(&self.binary)
            .args(&self.args)
            .arg(html)
            .arg(output)
            .output()
            .map_err(|e| SaciError::Dependency(format!("failed to run {}: {}", self.binary, e)))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(SaciError::Conversion(format!(
                "{} exited with {}: {}",
                self.binary,
                result.status,
                stderr.trim()
            )));
        }

        if !output.exists() {
            return Err(SaciError::Conversion(format!(
                "{} reported success but {:?} was not written",
                self.binary, output
            )));
        }

        tracing::info!("PDF written to {:?}", output);
        Ok(())
    }
}
