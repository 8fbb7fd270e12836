//! Category configuration loading
//!
//! Loads the category specification from `audit-report.toml` or
//! `.auditreportrc.json`, or from an explicit path.
//!
//! # Configuration Format
//!
//! ```toml
//! # audit-report.toml
//!
//! [categories.performance]
//! name = "Performance"
//! weight = 1
//! audits = [
//!   { id = "first-meaningful-paint", weight = 5 },
//!   { id = "speed-index-metric", weight = 1 },
//! ]
//!
//! [categories.accessibility]
//! name = "Accessibility"
//! description = "These checks highlight opportunities to improve accessibility."
//! audits = [{ id = "color-contrast", weight = 1 }]
//! ```
//!
//! Categories appear in the report in the order they are declared here.

use crate::error::{ReportError, Result};
use crate::models::ReportSpec;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names searched by [`find_report_config`], in order
pub const CONFIG_FILE_NAMES: &[&str] = &["audit-report.toml", ".auditreportrc.json"];

/// Load and validate a category specification from `path`.
///
/// `.toml` files are parsed as TOML, everything else as JSON.
pub fn load_report_config(path: &Path) -> Result<ReportSpec> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = if is_toml(path) {
        parse_toml_config(path, &content)?
    } else {
        parse_json_config(path, &content)?
    };
    spec.validate()?;

    debug!(
        "Loaded report config from {} ({} categories)",
        path.display(),
        spec.categories.len()
    );
    Ok(spec)
}

/// Locate the report config in `dir`
pub fn find_report_config(dir: &Path) -> Result<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ReportError::ConfigNotFound(dir.to_path_buf()))
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn parse_toml_config(path: &Path, content: &str) -> Result<ReportSpec> {
    toml::from_str(content).map_err(|source| ReportError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json_config(path: &Path, content: &str) -> Result<ReportSpec> {
    serde_json::from_str(content).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_toml_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "audit-report.toml",
            r#"
[categories.performance]
name = "Performance"
weight = 1
audits = [{ id = "first-meaningful-paint", weight = 5 }, { id = "tti" }]

[categories.accessibility]
description = "Accessible to all"
audits = []

[categories.best-practices]
audits = [{ id = "uses-https", weight = 1 }]
"#,
        );

        let spec = load_report_config(&path).unwrap();
        let ids: Vec<&str> = spec.categories.keys().map(String::as_str).collect();
        assert_eq!(ids, ["performance", "accessibility", "best-practices"]);

        let perf = &spec.categories["performance"];
        assert_eq!(perf.name.as_deref(), Some("Performance"));
        assert_eq!(perf.weight, Some(1.0));
        assert_eq!(perf.audits[0].weight, Some(5.0));
        assert_eq!(perf.audits[1].weight, None);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "spec.json",
            r#"{"categories": {"b": {"audits": [{"id": "x", "weight": 2}]}, "a": {"audits": []}}}"#,
        );
        let spec = load_report_config(&path).unwrap();
        let ids: Vec<&str> = spec.categories.keys().map(String::as_str).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_structurally_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "spec.json", r#"{"categories": "nope"}"#);
        match load_report_config(&path) {
            Err(ReportError::Json { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected JSON error, got {other:?}"),
        }

        let path = write(dir.path(), "bad.toml", "categories = 3");
        assert!(matches!(load_report_config(&path), Err(ReportError::Toml { .. })));
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "spec.json",
            r#"{"categories": {"perf": {"audits": [{"id": "x", "weight": -2}]}}}"#,
        );
        assert!(matches!(
            load_report_config(&path),
            Err(ReportError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_find_report_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_report_config(dir.path()),
            Err(ReportError::ConfigNotFound(_))
        ));

        write(dir.path(), ".auditreportrc.json", "{}");
        assert_eq!(
            find_report_config(dir.path()).unwrap(),
            dir.path().join(".auditreportrc.json")
        );

        // TOML wins when both exist
        write(dir.path(), "audit-report.toml", "");
        assert_eq!(
            find_report_config(dir.path()).unwrap(),
            dir.path().join("audit-report.toml")
        );
    }

    #[test]
    fn test_empty_toml_is_empty_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "audit-report.toml", "");
        assert!(load_report_config(&path).unwrap().categories.is_empty());
    }
}
