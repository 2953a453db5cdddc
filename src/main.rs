//! CLI entry point and dispatch for casetrim.

mod cli;
mod cmd;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

use casetrim::ruleset::Ruleset;

use crate::cli::{Cli, Commands};

/// Exit code for usage errors and failed validations.
const EXIT_FAILURE: u8 = 1;
/// Exit code for file, encoding, and schema trouble.
const EXIT_FILE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too; they are not failures.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_FAILURE,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(EXIT_FILE_ERROR)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Extract { input } => cmd::filter::run(&input, Ruleset::baseline()?, true, quiet),
        Commands::Filter { input } => cmd::filter::run(&input, Ruleset::strict()?, false, quiet),
        Commands::Purify { input } => {
            cmd::filter::run(&input, Ruleset::strengthened()?, false, quiet)
        }
        Commands::Validate { input, json } => cmd::validate::run(&input, json, quiet),
        Commands::Check { input, json } => cmd::check::run(&input, json, quiet),
        Commands::Quality { input, json } => cmd::quality::run(&input, json, quiet),
        Commands::Version { verbose } => {
            cmd::version(verbose);
            Ok(0)
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            generate(shell, &mut command, "casetrim", &mut io::stdout());
            Ok(0)
        }
    }
}
