//! Audit result loading
//!
//! Accepts either a bare object of audit id → result, or the same object
//! wrapped as `{"audits": {...}}`.

use crate::error::{ReportError, Result};
use crate::models::{AuditResult, AuditResults};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// Load audit results from a JSON file
pub fn load_audit_results(path: &Path) -> Result<AuditResults> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: IndexMap<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|source| ReportError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let results = parse_audit_results(raw)?;
    debug!(
        "Loaded {} audit results from {}",
        results.len(),
        path.display()
    );
    Ok(results)
}

/// Convert a raw JSON object into typed audit results.
///
/// When `audits` holds an object of result objects, that object is the
/// result set and every other top-level key (`lighthouseVersion`, `url`,
/// ...) is ignored. Otherwise the whole input is the result set, so a bare
/// map may still contain an audit named `audits`.
pub fn parse_audit_results(
    mut raw: IndexMap<String, serde_json::Value>,
) -> Result<AuditResults> {
    if raw.get("audits").is_some_and(is_result_map) {
        if let Some(serde_json::Value::Object(inner)) = raw.shift_remove("audits") {
            raw = inner.into_iter().collect();
        }
    }

    raw.into_iter()
        .map(|(id, value)| {
            let result: AuditResult = serde_json::from_value(value).map_err(|e| {
                ReportError::InvalidResults(format!("audit `{id}`: {e}"))
            })?;
            Ok((id, result))
        })
        .collect()
}

fn is_result_map(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .is_some_and(|audits| audits.values().all(serde_json::Value::is_object))
}
