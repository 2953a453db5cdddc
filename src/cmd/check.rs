//! Handler for `casetrim check`, the pre-upload readiness gate.

use anyhow::Result;
use std::path::Path;

use casetrim::report;
use casetrim::upload;

pub fn run(input: &Path, json: bool, quiet: bool) -> Result<u8> {
    let upload_report = upload::check_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&upload_report)?);
    } else if !quiet {
        println!("checking upload readiness of {}", input.display());
        println!();
        println!(
            "{}",
            report::format_issue_report(&upload_report.errors, &upload_report.warnings)
        );
        println!();
        println!("{}", report::format_upload_verdict(&upload_report));
    }

    Ok(if upload_report.passed() { 0 } else { 1 })
}
