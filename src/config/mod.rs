//! Input loading for audit-report
//!
//! This module handles:
//! - Category configuration (audit-report.toml / .auditreportrc.json)
//! - Audit result files produced by the auditing pipeline

mod audit_results;
mod report_config;

pub use audit_results::{load_audit_results, parse_audit_results};
pub use report_config::{find_report_config, load_report_config, CONFIG_FILE_NAMES};
