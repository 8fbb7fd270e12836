//! JSON reporter
//!
//! Outputs the scored report as JSON for downstream renderers, jq, or
//! further processing.

use crate::models::ReportJson;
use anyhow::Result;

/// Render report as pretty-printed JSON
pub fn render(report: &ReportJson) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
pub fn render_compact(report: &ReportJson) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["categories"][0]["id"], "performance");
        assert_eq!(parsed["categories"][0]["score"], 55.0);
        assert_eq!(parsed["categories"][0]["audits"][0]["result"]["score"], true);
    }

    #[test]
    fn test_json_render_compact() {
        let report = test_report();
        let json_str = render_compact(&report).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let parsed: ReportJson = serde_json::from_str(&json_str).expect("parse compact JSON");
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_json_omits_missing_name_and_description() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let second = parsed["categories"][1].as_object().expect("category object");
        assert!(!second.contains_key("name"));
        assert!(!second.contains_key("weight"));
        assert_eq!(second["description"], "Unscored checks");
    }

    #[test]
    fn test_json_empty_categories() {
        let mut report = test_report();
        report.categories.clear();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["categories"].as_array().expect("categories array").len(), 0);
    }
}
