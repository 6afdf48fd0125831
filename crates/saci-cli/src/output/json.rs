//! JSON output formatter

use saci_core::ControlResult;

pub fn format_records(records: &[ControlResult]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
