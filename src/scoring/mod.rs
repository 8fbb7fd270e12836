//! Weighted Category Scoring
//!
//! Turns raw audit results into per-category scores.
//!
//! # Scoring Formula
//!
//! ```text
//! Audit score    = 100 / 0 for boolean results, the number itself otherwise
//! Audit weight   = configured weight, or 0 when the audit is unscored
//! Category score = clamp(Σ(score × weight) / Σweight, 0, 100)
//! Report score   = clamp(Σ(category × category_weight) / Σcategory_weight, 0, 100)
//! ```
//!
//! Any mean whose total weight is 0 is 0.
//!
//! # Unscored Audits
//!
//! - Results without a `score` (informational audits)
//! - Audits the category lists but the results never mention
//! - Not-applicable audits (shown with score 100)
//!
//! All three keep their place in the report with weight 0, so they never
//! pull a category average up or down.
//!
//! # Example
//!
//! A category with four audits of weight 1 scoring `true`, `100`, `20` and
//! `false` scores (100 + 100 + 20 + 0) / 4 = 55.

mod normalize;
mod report_builder;
mod weighted_mean;

pub use normalize::{normalize, NormalizedAudit};
pub use report_builder::{generate_report_json, ReportBuilder};
pub use weighted_mean::{clamped_weighted_mean, weighted_mean, ScoreItem, Weighted};
