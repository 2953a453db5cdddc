//! Handler for `casetrim validate`.

use anyhow::Result;
use std::path::Path;

use casetrim::csv_io;
use casetrim::report;
use casetrim::validate::validate_records;

pub fn run(input: &Path, json: bool, quiet: bool) -> Result<u8> {
    let records = csv_io::read_case_file(input)?;
    let format_report = validate_records(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&format_report)?);
    } else if !quiet {
        println!("validating {}", input.display());
        println!();
        println!(
            "{}",
            report::format_issue_report(&format_report.errors, &format_report.warnings)
        );
        println!();
        println!("{}", report::format_validate_verdict(&format_report));
    }

    Ok(if format_report.passed() { 0 } else { 1 })
}
