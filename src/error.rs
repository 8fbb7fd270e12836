//! Error types for loading and validating report inputs
//!
//! Scoring itself never fails. Everything here concerns getting a
//! well-formed category specification and audit result set into memory.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating report inputs
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid category specification: {0}")]
    InvalidSpec(String),

    #[error("Invalid audit results: {0}")]
    InvalidResults(String),

    #[error("No report config found in {0} (expected audit-report.toml or .auditreportrc.json)")]
    ConfigNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ReportError>;
