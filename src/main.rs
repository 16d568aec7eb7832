use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use clap::Parser;

use rubric_guard::checker::RubricChecker;
use rubric_guard::cli::Cli;
use rubric_guard::output::TextFormatter;
use rubric_guard::rubric::RubricLoader;
use rubric_guard::stripper::CommentStripper;
use rubric_guard::{EXIT_LOAD_ERROR, EXIT_VIOLATION_CAP, RubricGuardError};

fn main() {
    let cli = Cli::parse();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(count) => violation_exit_code(count),
        Err(e) => {
            println!("Error: {e}");
            EXIT_LOAD_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> rubric_guard::Result<usize> {
    // 1. Load the rubric
    let rubric = RubricLoader::load(&cli.rubric)?;

    // 2. Load the source file
    let source = read_source(&cli.source)?;

    // 3. Strip comments before any matching
    let stripped = CommentStripper::new().strip(&source);

    // 4. Evaluate both rule categories
    let checker = RubricChecker::new(&rubric);
    let report = checker.check(&stripped)?;

    // 5. Print diagnostics
    print!("{}", TextFormatter::new().format(&report));

    Ok(report.total())
}

fn read_source(path: &Path) -> rubric_guard::Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RubricGuardError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => RubricGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Map a violation count onto the process exit status, saturating below the
/// load-error sentinel.
fn violation_exit_code(count: usize) -> i32 {
    i32::try_from(count).map_or(EXIT_VIOLATION_CAP, |c| c.min(EXIT_VIOLATION_CAP))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
