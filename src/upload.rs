//! Upload readiness check: the strict pre-upload gate.
//!
//! Stricter than the format validator: every case row must carry Steps, an
//! Expected Result, and a priority from the closed set (empty is invalid
//! here). Also inspects the raw file for a BOM and an oversized payload, and
//! fails outright when the file contains no case rows at all.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::csv_io::{self, UTF8_BOM};
use crate::record::Priority;

/// File sizes beyond this many bytes draw a warning; uploads get slow.
const MAX_COMFORTABLE_SIZE: u64 = 10 * 1024 * 1024;

/// Upload readiness report.
#[derive(Debug, Default, Serialize)]
pub struct UploadReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Distinct non-empty section names seen.
    pub sections: usize,
    /// Case rows (non-marker) seen.
    pub cases: usize,
}

impl UploadReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run the full readiness check against a file on disk.
pub fn check_file(path: &Path) -> Result<UploadReport> {
    let mut report = UploadReport::default();

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > MAX_COMFORTABLE_SIZE {
            report.warnings.push(format!(
                "file is large ({:.2} MB); TestRail import may be slow",
                metadata.len() as f64 / (1024.0 * 1024.0)
            ));
        }
    }

    let content = csv_io::read_utf8(path)?;
    if content.starts_with(UTF8_BOM) {
        report
            .warnings
            .push("file starts with a BOM; some TestRail imports reject it".to_string());
    }

    let records = csv_io::records_from_str(&content)?;

    let mut section_names: HashSet<&str> = HashSet::new();
    for (idx, record) in records.iter().enumerate() {
        let row = idx + 2;
        let section = record.section.trim();
        if !section.is_empty() {
            section_names.insert(section);
        }

        if record.is_section_marker() {
            continue;
        }
        report.cases += 1;

        if record.steps.trim().is_empty() {
            report
                .errors
                .push(format!("row {row}: case has a Title but Steps is empty"));
        }
        if record.expected_result.trim().is_empty() {
            report.errors.push(format!(
                "row {row}: case has a Title but Expected Result is empty"
            ));
        }

        let priority = record.priority.trim();
        if Priority::parse(priority).is_none() {
            report
                .errors
                .push(format!("row {row}: invalid Priority '{priority}'"));
        }
    }
    report.sections = section_names.len();

    if report.cases == 0 {
        report
            .errors
            .push("file contains no test cases".to_string());
    }
    if report.sections == 0 {
        report.warnings.push(
            "no sections defined; TestRail will import without a folder structure".to_string(),
        );
    }
    if report.cases > 0 {
        report.warnings.push(format!(
            "found {} section(s), {} test case(s)",
            report.sections, report.cases
        ));
    }

    Ok(report)
}
