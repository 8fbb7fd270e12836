//! Audit score normalization
//!
//! Maps a raw audit result onto the 0-100 scale and decides whether the
//! audit may carry weight in its category average.

use crate::models::{AuditRef, AuditResult};

/// Score assigned to not-applicable audits. They are displayed as passing
/// but never counted.
const NOT_APPLICABLE_SCORE: f64 = 100.0;

/// A normalized audit: its 0-100 score and the weight it carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedAudit {
    pub score: f64,
    pub weight: f64,
}

impl NormalizedAudit {
    /// Score 0, weight 0: present in the report, invisible to the average
    const UNSCORED: NormalizedAudit = NormalizedAudit {
        score: 0.0,
        weight: 0.0,
    };

    pub fn is_counted(&self) -> bool {
        self.weight > 0.0
    }
}

/// Normalize the result for `audit_ref`, if one was produced.
///
/// Missing results and results without a score are unscored. Booleans map
/// to 100/0, numbers pass through, and not-applicable audits score 100
/// with no weight.
pub fn normalize(audit_ref: &AuditRef, result: Option<&AuditResult>) -> NormalizedAudit {
    let Some(result) = result else {
        return NormalizedAudit::UNSCORED;
    };

    if result.not_applicable {
        return NormalizedAudit {
            score: NOT_APPLICABLE_SCORE,
            weight: 0.0,
        };
    }

    match result.score.as_score() {
        Some(score) => NormalizedAudit {
            score,
            weight: audit_ref.weight(),
        },
        None => NormalizedAudit::UNSCORED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scored;
    use serde_json::json;

    #[test]
    fn test_boolean_scores() {
        let r = AuditRef::new("a", 2.0);
        assert_eq!(
            normalize(&r, Some(&AuditResult::scored(true))),
            NormalizedAudit {
                score: 100.0,
                weight: 2.0,
            }
        );
        assert_eq!(
            normalize(&r, Some(&AuditResult::scored(false))),
            NormalizedAudit {
                score: 0.0,
                weight: 2.0,
            }
        );
    }

    #[test]
    fn test_numeric_passes_through() {
        let r = AuditRef::new("a", 1.0);
        let n = normalize(&r, Some(&AuditResult::scored(37.5)));
        assert_eq!(n.score, 37.5);
        assert!(n.is_counted());
    }

    #[test]
    fn test_unscored_forces_zero_weight() {
        let r = AuditRef::new("a", 10.0);
        let n = normalize(&r, Some(&AuditResult::informative(json!("you passed"))));
        assert_eq!(n, NormalizedAudit::UNSCORED);
        assert!(!n.is_counted());
    }

    #[test]
    fn test_missing_result_is_unscored() {
        let r = AuditRef::new("a", 10.0);
        assert_eq!(normalize(&r, None), NormalizedAudit::UNSCORED);
    }

    #[test]
    fn test_undeclared_weight_is_zero() {
        let r = AuditRef {
            id: "a".into(),
            weight: None,
        };
        let n = normalize(&r, Some(&AuditResult::scored(true)));
        assert_eq!(n.score, 100.0);
        assert_eq!(n.weight, 0.0);
    }

    #[test]
    fn test_not_applicable() {
        let r = AuditRef::new("a", 3.0);
        let result = AuditResult {
            score: Scored::Boolean(false),
            not_applicable: true,
            ..Default::default()
        };
        assert_eq!(
            normalize(&r, Some(&result)),
            NormalizedAudit {
                score: 100.0,
                weight: 0.0,
            }
        );
    }
}
