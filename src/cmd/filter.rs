//! Handler for the three filtering commands (extract, filter, purify).
//!
//! The commands share one pipeline and differ only in the ruleset passed in:
//! keyword strength, field scoping, section key granularity, and whether the
//! result lands in `<stem>_happy<ext>` or overwrites the input.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use casetrim::csv_io;
use casetrim::filter::{classify_rows, filter_classified};
use casetrim::report;
use casetrim::ruleset::{OutputMode, Ruleset};

pub fn run(input: &Path, rules: Ruleset, verbose_table: bool, quiet: bool) -> Result<u8> {
    let records = csv_io::read_case_file(input)?;

    let classified = classify_rows(&records, &rules);
    let outcome = filter_classified(&classified, &rules);

    let output_path = match rules.output_mode {
        OutputMode::HappyCopy => csv_io::happy_output_path(input),
        OutputMode::InPlace => input.to_path_buf(),
    };

    if !quiet {
        println!(
            "{} {} ruleset on {}",
            "filtering with".bold(),
            rules.name,
            input.display()
        );
        if verbose_table {
            println!();
            println!("{}", report::format_classification_table(&classified));
        }
        println!();
    }

    csv_io::write_case_file(&output_path, &outcome.rows)?;

    if !quiet {
        println!("{}", report::format_filter_summary(&outcome, &output_path));
    }

    Ok(0)
}
