//! Console report rendering.
//!
//! Formatters build plain strings from report data so the command handlers
//! stay print-free and the output is testable. Coloring comes from the
//! `colored` crate and degrades to plain text when not attached to a tty.

use colored::Colorize;
use std::path::Path;

use crate::classify::Label;
use crate::filter::{ClassifiedRow, FilterOutcome, RowKind};
use crate::quality::QualityReport;
use crate::upload::UploadReport;
use crate::validate::FormatReport;

/// Per-row classification table for the verbose extract output.
pub fn format_classification_table(classified: &[ClassifiedRow]) -> String {
    let mut output = vec![
        format!(
            "{:>4} | {:^7} | {:<30} | {}",
            "row", "label", "title", "reason"
        ),
        "-".repeat(70),
    ];

    for row in classified {
        match &row.kind {
            RowKind::SectionMarker => {
                let name = if row.record.section.trim().is_empty() {
                    "(section row)".to_string()
                } else {
                    preview(&row.record.section, 30)
                };
                output.push(format!(
                    "{:>4} | {:^7} | {:<30} | section header",
                    row.row_number,
                    "SECTION".cyan(),
                    name
                ));
            }
            RowKind::Case(classification) => {
                let label = match classification.label {
                    Label::Happy => "HAPPY".green().to_string(),
                    Label::Exclude => "EXCLUDE".red().to_string(),
                };
                output.push(format!(
                    "{:>4} | {:^7} | {:<30} | {}",
                    row.row_number,
                    label,
                    preview(&row.record.title, 28),
                    classification.reason
                ));
            }
        }
    }
    output.push("-".repeat(70));
    output.join("\n")
}

/// Summary block shared by the filter commands.
pub fn format_filter_summary(outcome: &FilterOutcome, output_path: &Path) -> String {
    let mut output = vec![
        format!("  {:<18} {}", "total cases:", outcome.stats.total_cases),
        format!(
            "  {:<18} {}",
            "happy (kept):",
            outcome.stats.happy.to_string().green()
        ),
        format!(
            "  {:<18} {}",
            "excluded:",
            outcome.stats.excluded.to_string().red()
        ),
    ];

    if outcome.stats.total_cases > 0 {
        let rate = outcome.stats.happy as f64 / outcome.stats.total_cases as f64 * 100.0;
        output.push(format!("  {:<18} {:.1}%", "retention:", rate));
    }

    if !outcome.excluded.is_empty() {
        output.push(String::new());
        for dropped in &outcome.excluded {
            output.push(format!(
                "  row {}: \"{}\" -> {}",
                dropped.row_number,
                dropped.title_preview,
                dropped.reason.dimmed()
            ));
        }
    }

    output.push(String::new());
    output.push(format!("wrote {}", output_path.display().to_string().bold()));
    output.join("\n")
}

/// Error/warning bullet list for `validate` and `check`.
pub fn format_issue_report(errors: &[String], warnings: &[String]) -> String {
    let mut output = Vec::new();

    if !errors.is_empty() {
        output.push(format!("{}", "errors:".red().bold()));
        for error in errors {
            output.push(format!("  {} {}", "✗".red(), error));
        }
    }
    if !warnings.is_empty() {
        if !output.is_empty() {
            output.push(String::new());
        }
        output.push(format!("{}", "warnings:".yellow().bold()));
        for warning in warnings {
            output.push(format!("  {} {}", "⚠".yellow(), warning));
        }
    }
    if output.is_empty() {
        output.push(format!("{} no issues found", "✓".green()));
    }
    output.join("\n")
}

/// Verdict footer for the format validator.
pub fn format_validate_verdict(report: &FormatReport) -> String {
    if report.clean() {
        format!("{} valid TestRail import format", "✓".green())
    } else if report.passed() {
        format!("{} warnings present, but the file is importable", "⚠".yellow())
    } else {
        format!("{} validation failed; fix the errors above", "✗".red())
    }
}

/// Verdict footer for the upload readiness check.
pub fn format_upload_verdict(report: &UploadReport) -> String {
    if report.passed() {
        format!("{} ready for TestRail import", "✓".green())
    } else {
        format!("{} not ready for import; fix the errors above", "✗".red())
    }
}

/// Stats, suggestions, and score block for the quality report.
pub fn format_quality_report(report: &QualityReport) -> String {
    let mut output = vec![
        "Quality Report".bold().to_string(),
        "==============".to_string(),
        String::new(),
        format!("  {:<22} {}", "total cases:", report.stats.total_cases),
    ];

    if report.stats.total_cases > 0 {
        let total = report.stats.total_cases as f64;
        let rate = |n: usize| n as f64 / total * 100.0;
        output.push(format!(
            "  {:<22} {:.1}%",
            "preconditions filled:",
            rate(report.stats.with_preconditions)
        ));
        output.push(format!(
            "  {:<22} {:.1}%",
            "steps filled:",
            rate(report.stats.with_steps)
        ));
        output.push(format!(
            "  {:<22} {:.1}%",
            "expected filled:",
            rate(report.stats.with_expected)
        ));
        output.push(String::new());
        output.push("  priority distribution:".to_string());
        for (name, count) in [
            ("Highest", report.stats.priority_highest),
            ("High", report.stats.priority_high),
            ("Medium", report.stats.priority_medium),
            ("Low", report.stats.priority_low),
        ] {
            output.push(format!(
                "    {:<8} {:>3} ({:.1}%)",
                name,
                count,
                rate(count)
            ));
        }
    }

    if !report.suggestions.is_empty() {
        output.push(String::new());
        output.push(format!("{}", "suggestions:".yellow().bold()));
        for suggestion in report.suggestions.iter().take(10) {
            output.push(format!("  • {suggestion}"));
        }
        if report.suggestions.len() > 10 {
            output.push(
                format!("  ... and {} more", report.suggestions.len() - 10)
                    .dimmed()
                    .to_string(),
            );
        }
    }

    output.push(String::new());
    let score_line = format!("score: {}/100", report.score);
    output.push(match report.score {
        90..=100 => score_line.green().bold().to_string(),
        70..=89 => score_line.yellow().bold().to_string(),
        _ => score_line.red().bold().to_string(),
    });
    output.join("\n")
}

fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
