use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rubric-guard")]
#[command(author, version, about = "Audit a source file against a grading rubric")]
#[command(long_about = "Checks a source file against a rubric of forbidden and required \
    identifiers.\n\n\
    Comments are stripped before matching, and names only match as whole words.\n\n\
    Exit codes:\n  \
    0     - No violations found\n  \
    1-101 - Number of violations (saturating at 101)\n  \
    102   - Rubric or source file could not be loaded")]
pub struct Cli {
    /// Path to the source file to check
    pub source: PathBuf,

    /// Path to the rubric file (YAML)
    pub rubric: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
