//! Test-case to control-result normalization
//!
//! Each raw test case (as produced by the XML reader) becomes one
//! [`ControlResult`]. Field names on the serialized record are fixed: report
//! viewers read the debug JSON export directly.

use crate::error::{Result, SaciError};
use crate::keys::strip_keys;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value of `failReason` when a test case carries no failure
pub const NO_FAILURE: &str = "NA";

/// Placeholder entry for `Offenders` until offender extraction exists
pub const OFFENDERS_PLACEHOLDER: &str = "Future Use";

/// Number of leading description characters used as the control id
pub const CONTROL_ID_LEN: usize = 3;

/// Normalized outcome of one compliance check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResult {
    #[serde(rename = "Result")]
    pub result: String,

    #[serde(rename = "failReason")]
    pub fail_reason: String,

    #[serde(rename = "Offenders")]
    pub offenders: Vec<String>,

    /// Opaque boolean-like string taken from `executed`
    #[serde(rename = "ScoredControl")]
    pub scored_control: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "ControlId")]
    pub control_id: String,
}

impl ControlResult {
    pub fn is_failure(&self) -> bool {
        self.fail_reason != NO_FAILURE
    }
}

/// Attribute keys read from a test case
struct FieldKeys {
    result: &'static str,
    executed: &'static str,
    description: &'static str,
    message: &'static str,
}

const DECORATED: FieldKeys = FieldKeys {
    result: "@result",
    executed: "@executed",
    description: "@description",
    message: "@message",
};

const STRIPPED: FieldKeys = FieldKeys {
    result: "result",
    executed: "executed",
    description: "description",
    message: "message",
};

/// Normalize an ordered list of raw test cases
///
/// The output has the same length and order as the input. The first test
/// case missing an expected attribute aborts the whole batch.
pub fn build_controlresults(raw_list: &[Value]) -> Result<Vec<ControlResult>> {
    let results = raw_list
        .iter()
        .enumerate()
        .map(|(index, test)| normalize(test, index, &DECORATED))
        .collect::<Result<Vec<_>>>();

    if let Err(ref e) = results {
        tracing::error!("Normalization aborted: {}", e);
    }
    results
}

/// Normalize a single control mapping
///
/// Keys are stripped of the attribute marker first, so decorated and
/// undecorated mappings are both accepted.
pub fn build_controlresult(raw: &Value) -> Result<ControlResult> {
    let cleaned = strip_keys(raw);
    normalize(&cleaned, 0, &STRIPPED)
}

fn normalize(test: &Value, index: usize, keys: &FieldKeys) -> Result<ControlResult> {
    let fields = test
        .as_object()
        .ok_or_else(|| SaciError::missing(bare(keys.result), index))?;

    let result = scalar(fields, keys.result, index)?;
    let fail_reason = failure_message(fields, keys, index)?;
    let scored_control = scalar(fields, keys.executed, index)?;
    let description = scalar(fields, keys.description, index)?;
    let control_id = control_id(&description);

    Ok(ControlResult {
        result,
        fail_reason,
        offenders: vec![OFFENDERS_PLACEHOLDER.to_string()],
        scored_control,
        description,
        control_id,
    })
}

/// First three characters of a description, or all of it when shorter
pub fn control_id(description: &str) -> String {
    description.chars().take(CONTROL_ID_LEN).collect()
}

fn scalar(fields: &Map<String, Value>, key: &str, index: usize) -> Result<String> {
    fields
        .get(key)
        .and_then(scalar_string)
        .ok_or_else(|| SaciError::missing(bare(key), index))
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn failure_message(fields: &Map<String, Value>, keys: &FieldKeys, index: usize) -> Result<String> {
    let failure = match fields.get("failure") {
        None | Some(Value::Null) => return Ok(NO_FAILURE.to_string()),
        Some(failure) => failure,
    };

    // Attribute first, then a <message> child (plain text or text node).
    let message = failure
        .get(keys.message)
        .or_else(|| failure.get(STRIPPED.message))
        .and_then(|m| match m {
            Value::Object(node) => node.get("#text").and_then(scalar_string),
            other => scalar_string(other),
        });

    message.ok_or_else(|| SaciError::missing("failure.message", index))
}

fn bare(key: &str) -> &str {
    key.trim_start_matches(crate::keys::ATTRIBUTE_MARKER)
}
