//! # casetrim - TestRail CSV post-processing
//!
//! Casetrim post-processes test case spreadsheets produced by AI-assisted
//! authoring: it classifies each row as a happy path case or an edge/error
//! case against curated keyword rulesets, filters files down to their happy
//! cases while preserving section grouping, and runs structural and quality
//! checks against the TestRail 7-column import format.
//!
//! ## Core Concepts
//!
//! - **Records**: rows of the 7-column CSV; a row with an empty title is a
//!   section marker, everything else is a test case
//! - **Rulesets**: immutable keyword/regex bundles; three built-in variants
//!   differ in list strength, field scoping, and output destination
//! - **Section-preserving filter**: keeps a section header only when the
//!   section retains at least one happy case
//!
//! ## Modules
//!
//! - [`record`] - Test case record model and the priority enum
//! - [`csv_io`] - Strict CSV reading/writing for the TestRail shape
//! - [`ruleset`] - Exclusion keyword lists and pattern configuration
//! - [`classify`] - Ordered first-match-wins row classification
//! - [`filter`] - Section-preserving happy case filtering
//! - [`validate`] - Structural format validation
//! - [`upload`] - Pre-upload readiness checks
//! - [`quality`] - Advisory quality scoring
//! - [`report`] - Console report formatting
//!
//! ## Example
//!
//! ```
//! use casetrim::csv_io;
//! use casetrim::filter::filter_happy;
//! use casetrim::ruleset::Ruleset;
//!
//! let csv = "\
//! Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result,Priority
//! \"로그인\",\"로그인\",\"\",\"\",\"\",\"\",\"\"
//! \"로그인\",\"로그인\",\"로그인 성공 시 메인 페이지로 이동\",\"\",\"1. 로그인\",\"메인 이동\",\"High\"
//! \"로그인\",\"로그인\",\"비밀번호 오류 시 에러 메시지 표시\",\"\",\"1. 로그인\",\"에러 메시지\",\"High\"
//! ";
//! let records = csv_io::records_from_str(csv).unwrap();
//! let rules = Ruleset::baseline().unwrap();
//! let outcome = filter_happy(&records, &rules);
//!
//! assert_eq!(outcome.stats.happy, 1);
//! assert_eq!(outcome.stats.excluded, 1);
//! // Section marker plus the one happy row
//! assert_eq!(outcome.rows.len(), 2);
//! ```

pub mod classify;
pub mod csv_io;
pub mod filter;
pub mod quality;
pub mod record;
pub mod report;
pub mod ruleset;
pub mod upload;
pub mod validate;

/// Canonical column names for the TestRail-compatible import format.
pub mod columns {
    /// Required header names, in canonical order.
    pub const REQUIRED_COLUMNS: &[&str] = &[
        "Section",
        "Section Hierarchy",
        "Title",
        "Preconditions",
        "Steps",
        "Expected Result",
        "Priority",
    ];
}
