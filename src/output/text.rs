use std::fmt::Write;

use crate::checker::{CheckReport, Violation};

/// Renders a report in the line format grading pipelines scrape.
///
/// The exact bytes are a compatibility contract, spacing included:
/// a forbidden match prints `ERRO: <text>` and an indented
/// `Especificamente:` line; a required rule prints `ERRO: <text>` once and
/// one indented line per missing name.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn format(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        for violation in report.violations() {
            match violation {
                Violation::Forbidden { message, name } => {
                    let _ = writeln!(output, "ERRO: {message}\n \t - Especificamente: {name}");
                }
                Violation::MissingRequired { message, missing } => {
                    let _ = writeln!(output, "ERRO: {message}");
                    for name in missing {
                        let _ = writeln!(output, "\t - {name}");
                    }
                }
            }
        }

        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
