//! Runtime dependency checks
//!
//! The PDF step shells out to wkhtmltopdf, so before doing any work we make
//! sure the binary exists and is recent enough.

use crate::config::Config;
use crate::error::{Result, SaciError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::process::Command;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"\d+(?:\.\d+)*").unwrap();
}

/// Outcome of a binary version check
#[derive(Debug, Clone, Serialize)]
pub struct BinaryStatus {
    pub binary: String,
    pub required: String,
    /// Version reported by the binary, if it ran
    pub reported: Option<String>,
    pub adequate: bool,
}

/// Outcome of the full precheck
#[derive(Debug, Clone, Serialize)]
pub struct PrecheckReport {
    pub binary: BinaryStatus,
    pub config_path: PathBuf,
    pub config_found: bool,
    pub logging_enabled: bool,
}

impl PrecheckReport {
    pub fn passed(&self) -> bool {
        self.binary.adequate
    }
}

/// Run `binary <flag>` and compare the reported version against `required`
///
/// A binary that cannot be spawned or reports no version is not adequate;
/// this is a status, not an error.
pub fn binary_check(binary: &str, required: &str, flag: &str) -> BinaryStatus {
    let reported = match Command::new(binary).arg(flag).output() {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            extract_version(&stdout).or_else(|| extract_version(&stderr))
        }
        Err(e) => {
            tracing::info!("{}: binary not runnable ({})", binary, e);
            None
        }
    };

    let adequate = reported
        .as_deref()
        .map(|v| compare_versions(v, required) != Ordering::Less)
        .unwrap_or(false);

    if let Some(ref v) = reported {
        if !adequate {
            tracing::warn!(
                "Binary version ({}, {}) not adequate (required = {})",
                binary,
                v,
                required
            );
        }
    }

    BinaryStatus {
        binary: binary.to_string(),
        required: required.to_string(),
        reported,
        adequate,
    }
}

/// Verify runtime dependencies for report generation
pub fn precheck(config: &Config, config_path: PathBuf) -> PrecheckReport {
    let binary = binary_check(
        &config.pdf.binary,
        &config.pdf.min_version,
        &config.pdf.version_flag,
    );
    let config_found = config_path.exists();

    if config_found {
        tracing::info!("Existing configuration file found at {:?}", config_path);
    } else {
        tracing::info!(
            "No configuration file at {:?}, using defaults",
            config_path
        );
    }

    PrecheckReport {
        binary,
        config_path,
        config_found,
        logging_enabled: config.logging.enable_logging,
    }
}

/// Like [`precheck`], but failing with a dependency error
pub fn require(config: &Config, config_path: PathBuf) -> Result<PrecheckReport> {
    let report = precheck(config, config_path);
    if report.passed() {
        return Ok(report);
    }
    let status = &report.binary;
    Err(SaciError::Dependency(match status.reported {
        Some(ref v) => format!(
            "{} {} is older than required {}",
            status.binary, v, status.required
        ),
        None => format!(
            "{} (>= {}) is not installed or not on PATH",
            status.binary, status.required
        ),
    }))
}

/// First dotted version number in `text`
///
/// wkhtmltopdf prints e.g. `wkhtmltopdf 0.12.6 (with patched qt)`.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_RE.find(text).map(|m| m.as_str().to_string())
}

/// Compare dotted versions numerically, missing components count as zero
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| -> Vec<u64> {
        s.split('.')
            .map(|part| part.trim().parse().unwrap_or(0))
            .collect()
    };
    let (a, b) = (parse(a), parse(b));
    let len = a.len().max(b.len());

    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
