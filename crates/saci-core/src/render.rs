//! HTML report renderer

use crate::normalize::ControlResult;
use chrono::{DateTime, Local};

/// Header values for a rendered report
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub title: String,
    pub account_id: String,
    pub account_name: String,
    /// Cloud label, e.g. `azure`
    pub cloud: String,
    pub generated: DateTime<Local>,
}

/// Pass/fail tallies shown above the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_records(records: &[ControlResult]) -> Self {
        let failed = records.iter().filter(|r| !is_pass(r)).count();
        Self {
            total: records.len(),
            passed: records.len() - failed,
            failed,
        }
    }
}

/// A record passes when its result says so and no failure was recorded
fn is_pass(record: &ControlResult) -> bool {
    let result = record.result.to_ascii_lowercase();
    (result == "pass" || result == "passed" || result == "success") && !record.is_failure()
}

const STYLE: &str = r#"
body { font-family: Helvetica, Arial, sans-serif; font-size: 11px; color: #222; margin: 24px; }
h1 { font-size: 20px; margin-bottom: 4px; }
.meta { color: #555; margin-bottom: 16px; }
.summary span { display: inline-block; margin-right: 16px; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin-top: 12px; }
th, td { border: 1px solid #ccc; padding: 4px 6px; text-align: left; vertical-align: top; }
th { background: #2f4f6f; color: #fff; }
tr.pass td.result { color: #1a7f37; font-weight: bold; }
tr.fail td.result { color: #c62828; font-weight: bold; }
"#;

/// Render control results into a standalone HTML document
pub fn render_html(records: &[ControlResult], ctx: &ReportContext) -> String {
    let summary = Summary::from_records(records);
    let mut output = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");

    output.push_str(&format!(
        "<title>{} - {}</title>\n",
        escape_html(&ctx.title),
        escape_html(&ctx.account_name)
    ));
    output.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));

    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&ctx.title)));
    output.push_str(&format!(
        "<div class=\"meta\">Account: {} ({}) &middot; Cloud: {} &middot; Generated: {}</div>\n",
        escape_html(&ctx.account_name),
        escape_html(&ctx.account_id),
        escape_html(&ctx.cloud),
        ctx.generated.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!(
        "<div class=\"summary\"><span>Total: {}</span><span>Passed: {}</span><span>Failed: {}</span></div>\n",
        summary.total, summary.passed, summary.failed
    ));

    output.push_str("<table>\n<thead>\n<tr>");
    for heading in [
        "Control",
        "Description",
        "Result",
        "Scored",
        "Fail Reason",
        "Offenders",
    ] {
        output.push_str(&format!("<th>{}</th>", heading));
    }
    output.push_str("</tr>\n</thead>\n<tbody>\n");

    for record in records {
        let class = if is_pass(record) { "pass" } else { "fail" };
        output.push_str(&format!("<tr class=\"{}\">", class));
        output.push_str(&format!("<td>{}</td>", escape_html(&record.control_id)));
        output.push_str(&format!("<td>{}</td>", escape_html(&record.description)));
        output.push_str(&format!(
            "<td class=\"result\">{}</td>",
            escape_html(&record.result)
        ));
        output.push_str(&format!(
            "<td>{}</td>",
            escape_html(&record.scored_control)
        ));
        output.push_str(&format!("<td>{}</td>", escape_html(&record.fail_reason)));
        output.push_str(&format!(
            "<td>{}</td>",
            escape_html(&record.offenders.join(", "))
        ));
        output.push_str("</tr>\n");
    }

    if records.is_empty() {
        output.push_str("<tr><td colspan=\"6\"><em>No controls found</em></td></tr>\n");
    }

    output.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    output
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
