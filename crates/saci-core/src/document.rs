//! Navigation of parsed test-result documents
//!
//! NUnit reports nest the interesting test cases three suites deep:
//! `test-results/test-suite/results/test-suite/results/test-suite/results/test-case`.

use crate::error::{Result, SaciError};
use serde_json::Value;

/// Path from the document root to the list of test cases
pub const TEST_CASE_PATH: &[&str] = &[
    "test-results",
    "test-suite",
    "results",
    "test-suite",
    "results",
    "test-suite",
    "results",
    "test-case",
];

/// Path from the document root to the outermost test suite
pub const SUITE_PATH: &[&str] = &["test-results", "test-suite"];

/// Follow `path` through nested mappings
///
/// On failure the error names the path up to and including the first
/// segment that could not be resolved.
pub fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = doc;
    for (depth, segment) in path.iter().enumerate() {
        current = current
            .get(*segment)
            .filter(|v| !v.is_null())
            .ok_or_else(|| SaciError::MalformedDocument {
                path: path[..=depth].join("."),
            })?;
    }
    Ok(current)
}

/// Locate the raw test-case list of an NUnit document
///
/// A lone test case (parsed as a single mapping) is returned as a
/// one-element list.
pub fn test_cases(doc: &Value) -> Result<Vec<Value>> {
    let node = lookup(doc, TEST_CASE_PATH)?;
    let cases = match node {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![node.clone()],
        _ => {
            return Err(SaciError::MalformedDocument {
                path: TEST_CASE_PATH.join("."),
            })
        }
    };
    tracing::debug!("Located {} test cases", cases.len());
    Ok(cases)
}

/// Locate the outermost test suite of an NUnit document
pub fn suite(doc: &Value) -> Result<&Value> {
    lookup(doc, SUITE_PATH)
}
