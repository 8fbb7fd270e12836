//! Core data models for audit-report
//!
//! Inputs (audit results and the category specification) and the report
//! produced from them. JSON field names are camelCase to match what
//! auditing pipelines emit and what renderers consume.

use crate::error::{ReportError, Result};
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Audit results keyed by audit id
pub type AuditResults = IndexMap<String, AuditResult>;

/// The `score` field of an audit result.
///
/// Pass/fail audits report a boolean, measured audits report a number
/// already expressed on a 0-100 scale, and informational audits report
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scored {
    Boolean(bool),
    Numeric(f64),
    #[default]
    Absent,
}

impl Scored {
    pub fn is_absent(&self) -> bool {
        matches!(self, Scored::Absent)
    }

    /// Score on the 0-100 scale, or `None` for informational audits.
    ///
    /// Numbers pass through unchanged; NaN counts as 0.
    pub fn as_score(&self) -> Option<f64> {
        match self {
            Scored::Boolean(true) => Some(100.0),
            Scored::Boolean(false) => Some(0.0),
            Scored::Numeric(n) if n.is_nan() => Some(0.0),
            Scored::Numeric(n) => Some(*n),
            Scored::Absent => None,
        }
    }
}

impl From<bool> for Scored {
    fn from(value: bool) -> Self {
        Scored::Boolean(value)
    }
}

impl From<f64> for Scored {
    fn from(value: f64) -> Self {
        Scored::Numeric(value)
    }
}

impl Serialize for Scored {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scored::Boolean(b) => serializer.serialize_bool(*b),
            Scored::Numeric(n) => serializer.serialize_f64(*n),
            Scored::Absent => serializer.serialize_none(),
        }
    }
}

struct ScoredVisitor;

impl<'de> Visitor<'de> for ScoredVisitor {
    type Value = Scored;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, a number, or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Scored, E> {
        Ok(Scored::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scored, E> {
        Ok(Scored::Numeric(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scored, E> {
        Ok(Scored::Numeric(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scored, E> {
        Ok(Scored::Numeric(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Scored, E> {
        Ok(Scored::Absent)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Scored, E> {
        Ok(Scored::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Scored, D::Error> {
        Scored::deserialize(d)
    }
}

impl<'de> Deserialize<'de> for Scored {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ScoredVisitor)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Raw result of a single audit, as produced by the auditing pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(default, skip_serializing_if = "Scored::is_absent")]
    pub score: Scored,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_info: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    /// The audit's checks had nothing to run against
    #[serde(default, skip_serializing_if = "is_false")]
    pub not_applicable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_string: Option<String>,
}

impl AuditResult {
    /// Result carrying only a score
    pub fn scored(score: impl Into<Scored>) -> Self {
        Self {
            score: score.into(),
            ..Default::default()
        }
    }

    /// Informational result: a raw value and no score
    pub fn informative(raw_value: serde_json::Value) -> Self {
        Self {
            raw_value: Some(raw_value),
            ..Default::default()
        }
    }
}

/// Reference from a category to one of its member audits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl AuditRef {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight: Some(weight),
        }
    }

    /// Configured weight, 0 when not declared or not finite
    pub fn weight(&self) -> f64 {
        self.weight.filter(|w| w.is_finite()).unwrap_or(0.0)
    }
}

/// A category as declared in the report specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weight of this category in the report-level score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub audits: Vec<AuditRef>,
}

/// Category specification, keyed by category id in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSpec {
    #[serde(default)]
    pub categories: IndexMap<String, CategorySpec>,
}

impl ReportSpec {
    /// Reject specs that would silently produce a wrong report.
    pub fn validate(&self) -> Result<()> {
        for (id, category) in &self.categories {
            if id.trim().is_empty() {
                return Err(ReportError::InvalidSpec(
                    "category with an empty id".to_string(),
                ));
            }
            check_weight(category.weight, || format!("category `{id}`"))?;

            let mut seen = HashSet::new();
            for audit in &category.audits {
                if audit.id.trim().is_empty() {
                    return Err(ReportError::InvalidSpec(format!(
                        "category `{id}` lists an audit with an empty id"
                    )));
                }
                if !seen.insert(audit.id.as_str()) {
                    return Err(ReportError::InvalidSpec(format!(
                        "category `{id}` lists audit `{}` more than once",
                        audit.id
                    )));
                }
                check_weight(audit.weight, || {
                    format!("audit `{}` in category `{id}`", audit.id)
                })?;
            }
        }
        Ok(())
    }
}

fn check_weight(weight: Option<f64>, owner: impl FnOnce() -> String) -> Result<()> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(ReportError::InvalidSpec(format!(
            "{} has invalid weight {w} (must be a finite, non-negative number)",
            owner()
        ))),
        _ => Ok(()),
    }
}

/// One audit as it appears in a category of the finished report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub id: String,
    /// Weight actually used for the category average
    pub weight: f64,
    /// Normalized 0-100 score
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuditResult>,
}

/// A scored category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub score: f64,
    pub audits: Vec<AuditReport>,
}

/// The finished report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportJson {
    /// Weighted mean of the category scores by category weight
    pub score: f64,
    pub categories: Vec<CategoryReport>,
}
