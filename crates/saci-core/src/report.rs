//! End-to-end report generation
//!
//! read XML -> locate test cases -> normalize -> render HTML -> convert to PDF

use crate::config::Config;
use crate::document;
use crate::error::Result;
use crate::normalize::{build_controlresult, build_controlresults, ControlResult};
use crate::pdf::PdfConverter;
use crate::render::{render_html, ReportContext, Summary};
use crate::xml;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// File name of the debug export of normalized records
pub const DEBUG_JSON_NAME: &str = "testdata.json";

/// Inputs for a single report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Keep the rendered HTML at this path
    pub html_output: Option<PathBuf>,
    /// Export normalized records as JSON to this path
    pub debug_json: Option<PathBuf>,
    pub context: ReportContext,
}

impl ReportOptions {
    /// Build options with header values taken from config
    pub fn from_config(config: &Config, input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            html_output: None,
            debug_json: None,
            context: ReportContext {
                title: config.report.title.clone(),
                account_id: config.account.id.clone(),
                account_name: config.account.name.clone(),
                cloud: config.report.cloud.clone(),
                generated: Local::now(),
            },
        }
    }
}

/// What a report run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub records: Vec<ControlResult>,
    pub summary: Summary,
    pub pdf: PathBuf,
    pub html: Option<PathBuf>,
    pub debug_json: Option<PathBuf>,
}

/// Default PDF name: `cis_report_<account>_<YYYYmmdd_HHMM>.pdf`
pub fn default_report_name(account: &str, now: &DateTime<Local>) -> String {
    format!("cis_report_{}_{}.pdf", account, now.format("%Y%m%d_%H%M"))
}

/// Parse an NUnit XML file and normalize its test cases
pub fn load_records(input: &Path) -> Result<Vec<ControlResult>> {
    let doc = xml::parse_file(input)?;
    let cases = document::test_cases(&doc)?;
    build_controlresults(&cases)
}

/// Parse an XML file and normalize its outermost test suite as one control
pub fn load_control(input: &Path) -> Result<ControlResult> {
    let doc = xml::parse_file(input)?;
    build_controlresult(document::suite(&doc)?)
}

/// Write records as a pretty-printed JSON array
pub fn export_json(records: &[ControlResult], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    ensure_parent(path)?;
    std::fs::write(path, content + "\n")?;
    tracing::debug!("Exported {} records to {:?}", records.len(), path);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}

/// Run the full pipeline, writing the PDF through `converter`
pub fn generate(options: &ReportOptions, converter: &dyn PdfConverter) -> Result<ReportOutcome> {
    tracing::info!("Generating report from {:?}", options.input);
    let records = load_records(&options.input)?;
    let summary = Summary::from_records(&records);

    if let Some(ref path) = options.debug_json {
        export_json(&records, path)?;
    }

    let html = render_html(&records, &options.context);
    if let Some(ref path) = options.html_output {
        ensure_parent(path)?;
        std::fs::write(path, &html)?;
    }

    converter.convert_html(&html, &options.output)?;

    Ok(ReportOutcome {
        records,
        summary,
        pdf: options.output.clone(),
        html: options.html_output.clone(),
        debug_json: options.debug_json.clone(),
    })
}
