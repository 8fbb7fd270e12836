//! Category report builder
//!
//! Normalizes every audit a category references, averages them by weight,
//! and assembles the categories in specification order.

use super::normalize::normalize;
use super::weighted_mean::clamped_weighted_mean;
use crate::models::{
    AuditReport, AuditResults, CategoryReport, CategorySpec, ReportJson, ReportSpec,
};
use tracing::{debug, info, warn};

/// Builds reports for one category specification.
///
/// Holds no state besides the borrowed spec, so one builder can score any
/// number of result sets.
pub struct ReportBuilder<'a> {
    spec: &'a ReportSpec,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(spec: &'a ReportSpec) -> Self {
        Self { spec }
    }

    /// Score every category against `results`
    pub fn generate_report_json(&self, results: &AuditResults) -> ReportJson {
        let categories: Vec<CategoryReport> = self
            .spec
            .categories
            .iter()
            .map(|(id, category)| self.build_category(id, category, results))
            .collect();

        let score = clamped_weighted_mean(&categories);

        info!(
            "Report score: {:.1} across {} categories",
            score,
            categories.len()
        );

        ReportJson { score, categories }
    }

    fn build_category(
        &self,
        id: &str,
        category: &CategorySpec,
        results: &AuditResults,
    ) -> CategoryReport {
        let audits: Vec<AuditReport> = category
            .audits
            .iter()
            .map(|audit_ref| {
                let result = results.get(&audit_ref.id);
                if result.is_none() {
                    warn!(
                        "No result for audit '{}' in category '{}'; scoring it as unscored",
                        audit_ref.id, id
                    );
                }
                let normalized = normalize(audit_ref, result);
                AuditReport {
                    id: audit_ref.id.clone(),
                    weight: normalized.weight,
                    score: normalized.score,
                    result: result.cloned(),
                }
            })
            .collect();

        let score = clamped_weighted_mean(&audits);
        let counted = audits.iter().filter(|a| a.weight > 0.0).count();

        debug!(
            "Category '{}': {:.1} ({} of {} audits weighted)",
            id,
            score,
            counted,
            audits.len()
        );

        CategoryReport {
            id: id.to_string(),
            name: category.name.clone(),
            description: category.description.clone(),
            weight: category.weight,
            score,
            audits,
        }
    }
}

/// Score `results` against `spec`.
///
/// Shorthand for `ReportBuilder::new(spec).generate_report_json(results)`.
pub fn generate_report_json(spec: &ReportSpec, results: &AuditResults) -> ReportJson {
    ReportBuilder::new(spec).generate_report_json(results)
}
