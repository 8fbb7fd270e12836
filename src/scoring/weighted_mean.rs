//! Weighted arithmetic mean tolerant of missing values

use crate::models::{AuditReport, CategoryReport};

/// Anything that contributes a (score, weight) pair to an average.
///
/// Either side may be missing; a missing value counts as 0.
pub trait Weighted {
    fn score(&self) -> Option<f64>;
    fn weight(&self) -> Option<f64>;
}

/// A bare (score, weight) pair
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreItem {
    pub score: Option<f64>,
    pub weight: Option<f64>,
}

impl ScoreItem {
    pub fn new(score: f64, weight: f64) -> Self {
        Self {
            score: Some(score),
            weight: Some(weight),
        }
    }

    pub fn score_only(score: f64) -> Self {
        Self {
            score: Some(score),
            weight: None,
        }
    }

    pub fn weight_only(weight: f64) -> Self {
        Self {
            score: None,
            weight: Some(weight),
        }
    }
}

impl Weighted for ScoreItem {
    fn score(&self) -> Option<f64> {
        self.score
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

impl Weighted for AuditReport {
    fn score(&self) -> Option<f64> {
        Some(self.score)
    }

    fn weight(&self) -> Option<f64> {
        Some(self.weight)
    }
}

impl Weighted for CategoryReport {
    fn score(&self) -> Option<f64> {
        Some(self.score)
    }

    fn weight(&self) -> Option<f64> {
        self.weight
    }
}

/// Weighted arithmetic mean of `items`.
///
/// Returns 0 when the total weight is 0, which includes the empty list.
/// Scores are not range-checked here.
pub fn weighted_mean<T: Weighted>(items: &[T]) -> f64 {
    let (sum_score_weight, sum_weight) =
        items
            .iter()
            .fold((0.0, 0.0), |(sum_score_weight, sum_weight), item| {
                let score = item.score().unwrap_or(0.0);
                let weight = item.weight().unwrap_or(0.0);
                (sum_score_weight + score * weight, sum_weight + weight)
            });

    if sum_weight == 0.0 {
        return 0.0;
    }
    sum_score_weight / sum_weight
}

/// [`weighted_mean`] clamped into the 0-100 score range.
///
/// A NaN mean (from a NaN score or weight in an unvalidated spec) is 0.
pub fn clamped_weighted_mean<T: Weighted>(items: &[T]) -> f64 {
    let mean = weighted_mean(items);
    if mean.is_nan() {
        return 0.0;
    }
    mean.clamp(0.0, 100.0)
}
