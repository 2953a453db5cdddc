//! Structural format validation for case files.
//!
//! Read-only: produces ordered error and warning lists without touching the
//! data. Errors block a TestRail upload; warnings are advisory and never
//! change the exit outcome on their own.

use serde::Serialize;

use crate::record::{Priority, TestCaseRecord};

/// Warn when a title exceeds this many characters (TestRail truncates).
pub const MAX_TITLE_CHARS: usize = 250;

/// Warn when the section hierarchy nests deeper than this.
pub const MAX_HIERARCHY_DEPTH: usize = 4;

/// Format validation report. `errors` fail the run; `warnings` do not.
#[derive(Debug, Default, Serialize)]
pub struct FormatReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl FormatReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate per-row format constraints. Column presence is checked at read
/// time; by the time records exist the schema is known good.
pub fn validate_records(records: &[TestCaseRecord]) -> FormatReport {
    let mut report = FormatReport::default();

    for (idx, record) in records.iter().enumerate() {
        let row = idx + 2;
        let title = record.title.trim();
        let steps = record.steps.trim();
        let expected = record.expected_result.trim();
        let priority = record.priority.trim();

        let title_chars = title.chars().count();
        if !title.is_empty() && title_chars > MAX_TITLE_CHARS {
            report.warnings.push(format!(
                "row {row}: Title exceeds {MAX_TITLE_CHARS} characters ({title_chars})"
            ));
        }

        // Empty priority is allowed here; the upload check is stricter.
        if !priority.is_empty() && Priority::parse(priority).is_none() {
            report.errors.push(format!(
                "row {row}: invalid Priority '{priority}' (valid: {})",
                Priority::NAMES.join(", ")
            ));
        }

        if !steps.is_empty() && expected.is_empty() {
            report
                .warnings
                .push(format!("row {row}: Steps present but Expected Result is empty"));
        }
        if !expected.is_empty() && steps.is_empty() {
            report
                .warnings
                .push(format!("row {row}: Expected Result present but Steps is empty"));
        }

        let depth = record.hierarchy_depth();
        if depth > MAX_HIERARCHY_DEPTH {
            report.warnings.push(format!(
                "row {row}: Section Hierarchy depth {depth} exceeds the recommended maximum of {MAX_HIERARCHY_DEPTH}"
            ));
        }
    }

    report
}
