//! Output formatters

pub mod json;
pub mod status;
pub mod terminal;

use crate::app::OutputFormat;
use saci_core::ControlResult;

/// Format control results
pub fn format_records(records: &[ControlResult], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_records(records),
        OutputFormat::Cli => terminal::format_records(records),
    }
}
