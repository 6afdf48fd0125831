//! Terminal output formatter

use saci_core::ControlResult;

pub fn format_records(records: &[ControlResult]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut output = String::new();

    for record in records {
        output.push_str(&format!(
            "{:<5} {:<8} {}\n",
            record.control_id, record.result, record.description
        ));
        output.push_str(&format!("      scored: {}\n", record.scored_control));
        if record.is_failure() {
            output.push_str(&format!("      reason: {}\n", record.fail_reason));
        }
    }

    output
}
