//! Happy / exclude classification for individual case rows.
//!
//! The checks run in a fixed order and the first hit wins. Ordering only
//! affects the reported reason: any single list hit excludes the row, so the
//! final label is the same under any permutation. A row that matches nothing
//! is happy by default (absence of evidence is treated as the normal path).

use crate::record::TestCaseRecord;
use crate::ruleset::{EdgeScope, Ruleset, TitleScope};

/// Classification outcome for a case row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Normal-path scenario, kept by the filter.
    Happy,
    /// Error, boundary, or abnormal-condition scenario, dropped.
    Exclude,
}

/// Label plus the human-readable reason for the first matching check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    pub reason: String,
}

impl Classification {
    fn happy() -> Self {
        Self {
            label: Label::Happy,
            reason: String::new(),
        }
    }

    fn exclude(reason: String) -> Self {
        Self {
            label: Label::Exclude,
            reason,
        }
    }
}

/// Classify one case row against a ruleset.
///
/// Pure function of the record's text fields and the ruleset: no I/O, no
/// side effects. Section markers should not be passed here; they have no
/// classification.
pub fn classify(record: &TestCaseRecord, rules: &Ruleset) -> Classification {
    let title = record.title.trim();
    let steps = record.steps.trim();
    let expected = record.expected_result.trim();
    let section = record.section.trim();
    let hierarchy = record.section_hierarchy.trim();

    // 1. Expected Result error phrases
    for keyword in &rules.expected_keywords {
        if expected.contains(keyword) {
            return Classification::exclude(format!("Expected Result contains '{keyword}'"));
        }
    }

    // 2. Title scope keywords
    let title_scope = match rules.title_scope {
        TitleScope::TitleOnly => title.to_string(),
        TitleScope::TitleAndSection => format!("{title} {section} {hierarchy}"),
    };
    for keyword in &rules.title_keywords {
        if title_scope.contains(keyword) {
            let field = match rules.title_scope {
                TitleScope::TitleOnly => "Title",
                TitleScope::TitleAndSection => "Title/Section",
            };
            return Classification::exclude(format!("{field} contains '{keyword}'"));
        }
    }

    // 3. Steps abnormal-precondition patterns
    for pattern in &rules.steps_patterns {
        if pattern.is_match(steps) {
            return Classification::exclude("Steps match abnormal-state pattern".to_string());
        }
    }

    // 4. Edge case keywords over the combined scope
    let combined = match rules.edge_scope {
        EdgeScope::TitleSteps => format!("{title} {steps}"),
        EdgeScope::TitleStepsExpected => format!("{title} {steps} {expected}"),
        EdgeScope::AllFields => format!("{title} {steps} {expected} {section} {hierarchy}"),
    };
    for keyword in &rules.edge_keywords {
        if combined.contains(keyword) {
            return Classification::exclude(format!("edge case keyword '{keyword}'"));
        }
    }

    // 5. Numeric boundary patterns (strict ruleset only)
    for pattern in &rules.boundary_patterns {
        if pattern.is_match(&combined) {
            return Classification::exclude("boundary-value pattern".to_string());
        }
    }

    Classification::happy()
}
