//! Command handlers for the casetrim CLI.
//!
//! Each handler returns the process exit code it wants: `Ok(0)` for success,
//! `Ok(1)` when a validation found errors. File, encoding, and schema
//! trouble propagates as `Err` and is mapped to exit code 2 by `main`.

pub mod check;
pub mod filter;
pub mod quality;
pub mod validate;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print version information, optionally with build metadata.
pub fn version(verbose: bool) {
    println!("casetrim {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }
}
