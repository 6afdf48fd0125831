//! Precheck command

use crate::app::OutputFormat;
use crate::output::status;
use anyhow::Result;
use saci_core::{precheck, Config, SaciError};
use std::path::Path;

pub fn run(config: &Config, config_path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let report = precheck(config, config_path.to_path_buf());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Cli if !quiet => {
            let binary = &report.binary;
            println!(
                "Binary:          {} (required >= {})",
                binary.binary, binary.required
            );
            println!(
                "Reported:        {}",
                binary.reported.as_deref().unwrap_or("not found")
            );
            println!(
                "Config file:     {} ({})",
                report.config_path.display(),
                if report.config_found { "found" } else { "defaults" }
            );
            println!("Logging:         {}", report.logging_enabled);
        }
        OutputFormat::Cli => {}
    }

    if !report.passed() {
        if !quiet {
            status::warn("Precheck (dependency) failed");
        }
        return Err(SaciError::Dependency(format!(
            "{} >= {} is required",
            report.binary.binary, report.binary.required
        ))
        .into());
    }

    if !quiet && format == OutputFormat::Cli {
        status::success("Precheck passed");
    }
    Ok(())
}
