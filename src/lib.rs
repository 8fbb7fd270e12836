//! audit-report - weighted category scoring for audit results
//!
//! Converts raw audit results (pass/fail or numeric measurements) into a
//! report of categories, each scored 0-100 as the weighted mean of its
//! member audits.
//!
//! ```
//! use audit_report::models::{AuditResult, AuditResults, ReportSpec};
//! use audit_report::scoring::generate_report_json;
//!
//! let spec: ReportSpec = serde_json::from_str(
//!     r#"{"categories": {"pwa": {"audits": [
//!         {"id": "viewport", "weight": 1},
//!         {"id": "manifest", "weight": 1}
//!     ]}}}"#,
//! ).unwrap();
//!
//! let mut results = AuditResults::new();
//! results.insert("viewport".into(), AuditResult::scored(true));
//! results.insert("manifest".into(), AuditResult::scored(false));
//!
//! let report = generate_report_json(&spec, &results);
//! assert_eq!(report.categories[0].score, 50.0);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use error::{ReportError, Result};
pub use models::{AuditResult, AuditResults, ReportJson, ReportSpec, Scored};
pub use scoring::{generate_report_json, ReportBuilder};
