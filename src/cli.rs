//! CLI argument definitions for casetrim.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casetrim")]
#[command(version)]
#[command(about = "Post-process AI-authored TestRail test case CSVs", long_about = None)]
#[command(
    after_help = "TYPICAL FLOW:\n    casetrim filter cases.csv      Write cases_happy.csv with edge cases removed\n    casetrim validate cases_happy.csv\n    casetrim check cases_happy.csv  Final gate before TestRail import"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract happy cases into a new <stem>_happy.csv (baseline ruleset)
    ///
    /// Prints a per-row classification table showing the label and the
    /// matched keyword for every case.
    Extract {
        /// Input CSV file path
        input: PathBuf,
    },
    /// Filter out non-happy cases into a new <stem>_happy.csv (strict ruleset)
    ///
    /// The strict ruleset adds numeric boundary patterns and also scans the
    /// Section and Section Hierarchy columns for exclusion keywords.
    Filter {
        /// Input CSV file path
        input: PathBuf,
    },
    /// Remove edge cases from a CSV in place (strengthened ruleset)
    ///
    /// Overwrites the input file. Sections are keyed by (name, hierarchy)
    /// so same-named sections at different depths stay distinct.
    Purify {
        /// Input CSV file path
        input: PathBuf,
    },
    /// Validate the TestRail import format of a CSV
    Validate {
        /// Input CSV file path
        input: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the final readiness check before a TestRail upload
    Check {
        /// Input CSV file path
        input: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score test case quality (advisory, 0-100)
    Quality {
        /// Input CSV file path
        input: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version {
        /// Show build metadata
        #[arg(long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
