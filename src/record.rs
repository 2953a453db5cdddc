//! Test case record model for the TestRail-compatible 7-column CSV shape.
//!
//! A row with an empty (after trim) `Title` is a section marker: it names a
//! grouping header for the case rows that follow it and is never classified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a test case spreadsheet.
///
/// Field order matters: the CSV writer derives the output header from it, so
/// it must match the canonical TestRail column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    #[serde(rename = "Section", default)]
    pub section: String,
    #[serde(rename = "Section Hierarchy", default)]
    pub section_hierarchy: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Preconditions", default)]
    pub preconditions: String,
    #[serde(rename = "Steps", default)]
    pub steps: String,
    #[serde(rename = "Expected Result", default)]
    pub expected_result: String,
    #[serde(rename = "Priority", default)]
    pub priority: String,
}

impl TestCaseRecord {
    /// A section marker carries only `Section`/`Section Hierarchy` and is
    /// identified by an empty title.
    pub fn is_section_marker(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Nesting depth of the `Section Hierarchy` path (`A > B > C` = 3).
    /// An empty hierarchy has depth 0.
    pub fn hierarchy_depth(&self) -> usize {
        let hierarchy = self.section_hierarchy.trim();
        if hierarchy.is_empty() {
            0
        } else {
            hierarchy.matches('>').count() + 1
        }
    }
}

/// TestRail priority values. The CSV carries these as free text; `parse`
/// decides membership in the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Highest,
    High,
    Medium,
    Low,
    Lowest,
}

impl Priority {
    /// All valid priority names, in rank order.
    pub const NAMES: &'static [&'static str] = &["Highest", "High", "Medium", "Low", "Lowest"];

    /// Parse an exact priority name. Returns `None` for anything outside the
    /// closed set, including the empty string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Highest" => Some(Self::Highest),
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            "Lowest" => Some(Self::Lowest),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highest => write!(f, "Highest"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::Lowest => write!(f, "Lowest"),
        }
    }
}
