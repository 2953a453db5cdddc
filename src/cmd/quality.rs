//! Handler for `casetrim quality`. The score is advisory: the command exits
//! 0 whenever the file itself could be read.

use anyhow::Result;
use std::path::Path;

use casetrim::csv_io;
use casetrim::quality;
use casetrim::report;

pub fn run(input: &Path, json: bool, quiet: bool) -> Result<u8> {
    let records = csv_io::read_case_file(input)?;
    let quality_report = quality::analyze(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&quality_report)?);
    } else if !quiet {
        println!("analyzing {}", input.display());
        println!();
        println!("{}", report::format_quality_report(&quality_report));
    }

    Ok(0)
}
