//! Report command

use crate::app::ReportArgs;
use crate::output::status;
use anyhow::Result;
use chrono::Local;
use saci_core::report::{default_report_name, DEBUG_JSON_NAME};
use saci_core::{generate, precheck, Config, ReportOptions, Wkhtmltopdf};
use std::path::{Path, PathBuf};

pub fn run(
    args: ReportArgs,
    config: &Config,
    config_path: &Path,
    quiet: bool,
    debug: bool,
) -> Result<()> {
    if !args.skip_precheck {
        precheck::require(config, config_path.to_path_buf())?;
    }

    let now = Local::now();
    let account_name = args
        .account_name
        .unwrap_or_else(|| config.account.name.clone());
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_report_name(&account_name, &now)));

    let mut options = ReportOptions::from_config(config, args.input, output);
    options.context.account_name = account_name;
    options.context.generated = now;
    if let Some(id) = args.account_id {
        options.context.account_id = id;
    }
    options.html_output = args.html;

    if debug {
        let dir = options
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        options.debug_json = Some(dir.join(DEBUG_JSON_NAME));

        if !quiet {
            status::info(&format!("config file is: {}", config_path.display()));
            status::info(&format!("input file is: {}", options.input.display()));
            status::info(&format!("output file is: {}", options.output.display()));
            status::info(&format!("quiet is: {}", quiet));
            status::info(&format!("debug is: {}", debug));
        }
    }

    let converter = Wkhtmltopdf::from_config(&config.pdf);
    let outcome = generate(&options, &converter)?;
    tracing::info!("PDF generation complete");

    if !quiet {
        status::success(&format!(
            "PDF report created ({}): {} controls, {} passed, {} failed",
            outcome.pdf.display(),
            outcome.summary.total,
            outcome.summary.passed,
            outcome.summary.failed
        ));
        if let Some(ref html) = outcome.html {
            status::info(&format!("HTML report kept at {}", html.display()));
        }
        if let Some(ref json) = outcome.debug_json {
            status::info(&format!("Normalized records exported to {}", json.display()));
        }
    }

    Ok(())
}
