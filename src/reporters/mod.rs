//! Output reporters for audit-report
//!
//! The report leaves this crate as JSON; presentation (HTML, terminal)
//! belongs to whatever consumes it.

mod json;

pub use json::{render, render_compact};

use crate::models::ReportJson;
use anyhow::Result;

/// Render a report, pretty-printed unless `compact` is set
pub fn report(report: &ReportJson, compact: bool) -> Result<String> {
    if compact {
        render_compact(report)
    } else {
        render(report)
    }
}
