//! Section-preserving happy case filtering.
//!
//! Two passes over the classified rows: the first marks which sections retain
//! at least one happy row, the second emits section markers for those
//! sections plus every happy row, in input order. Excluded rows and markers
//! for emptied sections are dropped. Rows are never reordered, deduplicated,
//! or mutated.

use std::collections::HashMap;

use crate::classify::{classify, Classification, Label};
use crate::record::TestCaseRecord;
use crate::ruleset::{Ruleset, SectionKeyMode};

/// How one input row was categorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Section header row (empty title), never classified.
    SectionMarker,
    /// Case row with its classification.
    Case(Classification),
}

/// One input row with its category and 1-based file row number (the CSV
/// header is row 1, so data rows start at 2).
#[derive(Debug, Clone)]
pub struct ClassifiedRow {
    pub record: TestCaseRecord,
    pub kind: RowKind,
    pub row_number: usize,
}

/// Counts over one classification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub total_cases: usize,
    pub happy: usize,
    pub excluded: usize,
    pub section_markers: usize,
}

/// Detail line for one dropped case row.
#[derive(Debug, Clone)]
pub struct ExcludedRow {
    pub row_number: usize,
    pub title_preview: String,
    pub reason: String,
}

/// Result of a full classify-and-filter run.
#[derive(Debug)]
pub struct FilterOutcome {
    /// Retained rows in input order: kept section markers plus happy rows.
    pub rows: Vec<TestCaseRecord>,
    pub stats: FilterStats,
    pub excluded: Vec<ExcludedRow>,
}

const TITLE_PREVIEW_CHARS: usize = 40;

/// Classify every input row against a ruleset, keeping input order.
pub fn classify_rows(records: &[TestCaseRecord], rules: &Ruleset) -> Vec<ClassifiedRow> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let kind = if record.is_section_marker() {
                RowKind::SectionMarker
            } else {
                RowKind::Case(classify(record, rules))
            };
            ClassifiedRow {
                record: record.clone(),
                kind,
                row_number: idx + 2,
            }
        })
        .collect()
}

/// Grouping identity for a section marker, per the ruleset's key mode.
fn section_key(record: &TestCaseRecord, mode: SectionKeyMode) -> (String, Option<String>) {
    match mode {
        SectionKeyMode::Name => (record.section.clone(), None),
        SectionKeyMode::NameAndHierarchy => (
            record.section.clone(),
            Some(record.section_hierarchy.clone()),
        ),
    }
}

/// Filter already-classified rows down to happy rows and the section markers
/// that still have at least one happy row beneath them.
pub fn filter_classified(classified: &[ClassifiedRow], rules: &Ruleset) -> FilterOutcome {
    let mut stats = FilterStats::default();
    let mut excluded = Vec::new();

    // Pass 1: which sections keep a happy row. A happy row before any marker
    // belongs to no section and is kept unconditionally.
    let mut section_has_happy: HashMap<(String, Option<String>), bool> = HashMap::new();
    let mut current_key: Option<(String, Option<String>)> = None;

    for row in classified {
        match &row.kind {
            RowKind::SectionMarker => {
                let key = section_key(&row.record, rules.section_key);
                section_has_happy.entry(key.clone()).or_insert(false);
                current_key = Some(key);
                stats.section_markers += 1;
            }
            RowKind::Case(classification) => {
                stats.total_cases += 1;
                match classification.label {
                    Label::Happy => {
                        stats.happy += 1;
                        if let Some(key) = &current_key {
                            section_has_happy.insert(key.clone(), true);
                        }
                    }
                    Label::Exclude => {
                        stats.excluded += 1;
                        excluded.push(ExcludedRow {
                            row_number: row.row_number,
                            title_preview: row
                                .record
                                .title
                                .chars()
                                .take(TITLE_PREVIEW_CHARS)
                                .collect(),
                            reason: classification.reason.clone(),
                        });
                    }
                }
            }
        }
    }

    // Pass 2: emit in input order.
    let mut rows = Vec::new();
    for row in classified {
        match &row.kind {
            RowKind::SectionMarker => {
                let key = section_key(&row.record, rules.section_key);
                if section_has_happy.get(&key).copied().unwrap_or(false) {
                    rows.push(row.record.clone());
                }
            }
            RowKind::Case(classification) => {
                if classification.label == Label::Happy {
                    rows.push(row.record.clone());
                }
            }
        }
    }

    FilterOutcome {
        rows,
        stats,
        excluded,
    }
}

/// Classify and filter in one call.
pub fn filter_happy(records: &[TestCaseRecord], rules: &Ruleset) -> FilterOutcome {
    let classified = classify_rows(records, rules);
    filter_classified(&classified, rules)
}
