//! Advisory quality scoring for authored test cases.
//!
//! Computes field-completion statistics and a list of improvement
//! suggestions from vagueness heuristics, then folds both into a 0-100
//! score. Purely informational: the score never gates an exit code.

use regex::Regex;
use serde::Serialize;

use crate::record::TestCaseRecord;

/// Titles shorter than this many characters draw a suggestion.
const MIN_TITLE_CHARS: usize = 10;

/// Words that make a short title read like a placeholder.
const VAGUE_TITLE_WORDS: &[&str] = &["테스트", "확인", "검증", "체크"];

/// Phrases that make a short expected result unmeasurable.
const VAGUE_EXPECTED_PHRASES: &[&str] = &["정상", "성공", "처리", "완료"];

/// Highest-priority share above this ratio suggests inflated priorities.
const MAX_HIGHEST_RATIO: f64 = 0.3;

/// Completion and priority-distribution counters over the case rows.
#[derive(Debug, Default, Clone, Serialize)]
pub struct QualityStats {
    pub total_cases: usize,
    pub with_preconditions: usize,
    pub with_steps: usize,
    pub with_expected: usize,
    pub priority_highest: usize,
    pub priority_high: usize,
    pub priority_medium: usize,
    pub priority_low: usize,
}

/// Full quality report: stats, suggestions, and the advisory score.
#[derive(Debug, Serialize)]
pub struct QualityReport {
    pub stats: QualityStats,
    pub suggestions: Vec<String>,
    pub score: u32,
}

/// Analyze the case rows of a file. Section markers are skipped.
pub fn analyze(records: &[TestCaseRecord]) -> QualityReport {
    let numbered_steps = Regex::new(r"^\d+\.").expect("static pattern");

    let mut stats = QualityStats::default();
    let mut suggestions = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let row = idx + 2;
        if record.is_section_marker() {
            continue;
        }

        let title = record.title.trim();
        let steps = record.steps.trim();
        let expected = record.expected_result.trim();

        stats.total_cases += 1;
        if !record.preconditions.trim().is_empty() {
            stats.with_preconditions += 1;
        }
        if !steps.is_empty() {
            stats.with_steps += 1;
        }
        if !expected.is_empty() {
            stats.with_expected += 1;
        }
        match record.priority.trim() {
            "Highest" => stats.priority_highest += 1,
            "High" => stats.priority_high += 1,
            "Medium" => stats.priority_medium += 1,
            "Low" => stats.priority_low += 1,
            _ => {}
        }

        check_title(row, title, &mut suggestions);
        check_steps(row, steps, &numbered_steps, &mut suggestions);
        check_expected(row, expected, &mut suggestions);
    }

    if stats.total_cases > 0 {
        let highest_ratio = stats.priority_highest as f64 / stats.total_cases as f64;
        if highest_ratio > MAX_HIGHEST_RATIO {
            suggestions.push(format!(
                "{:.1}% of cases are Highest priority; re-examine the distribution",
                highest_ratio * 100.0
            ));
        }
    }

    let score = calculate_score(&stats, suggestions.len());
    QualityReport {
        stats,
        suggestions,
        score,
    }
}

fn check_title(row: usize, title: &str, suggestions: &mut Vec<String>) {
    if title.is_empty() {
        return;
    }
    let chars = title.chars().count();
    if chars < MIN_TITLE_CHARS {
        suggestions.push(format!(
            "row {row}: Title is too short ({chars} chars); state the condition and outcome"
        ));
    }
    let word_count = title.split_whitespace().count();
    if word_count < 4 && VAGUE_TITLE_WORDS.iter().any(|w| title.contains(w)) {
        suggestions.push(format!(
            "row {row}: Title is vague; include the concrete condition and expected outcome"
        ));
    }
}

fn check_steps(row: usize, steps: &str, numbered: &Regex, suggestions: &mut Vec<String>) {
    if steps.is_empty() {
        return;
    }
    if !numbered.is_match(steps) {
        suggestions.push(format!(
            "row {row}: Steps do not start with numbered ordering (1. 2. 3.)"
        ));
    }
    // An "입력" step without a quoted value or 예: marker usually means the
    // author left the input unspecified.
    for line in steps.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.contains("입력") && !line.contains('\'') && !line.contains('"') && !line.contains("예:")
        {
            let preview: String = line.chars().take(50).collect();
            suggestions.push(format!(
                "row {row}: spell out the concrete input value in Steps (currently: '{preview}')"
            ));
            break;
        }
    }
}

fn check_expected(row: usize, expected: &str, suggestions: &mut Vec<String>) {
    if expected.is_empty() {
        return;
    }
    let chars = expected.chars().count();
    if chars < 30 && VAGUE_EXPECTED_PHRASES.iter().any(|p| expected.contains(p)) {
        suggestions.push(format!(
            "row {row}: Expected Result is vague; state a measurable outcome"
        ));
    }
}

/// 0-100 score: up to 25 points each for Steps and Expected Result
/// completion rates, minus 2 points per suggestion (capped at 50), floored
/// at zero and truncated.
fn calculate_score(stats: &QualityStats, suggestion_count: usize) -> u32 {
    if stats.total_cases == 0 {
        return 0;
    }
    let total = stats.total_cases as f64;
    let steps_rate = stats.with_steps as f64 / total;
    let expected_rate = stats.with_expected as f64 / total;

    let mut score = 100.0;
    score -= (1.0 - steps_rate) * 25.0;
    score -= (1.0 - expected_rate) * 25.0;
    score -= (suggestion_count * 2).min(50) as f64;

    score.max(0.0) as u32
}
