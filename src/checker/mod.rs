mod matcher;
mod report;

pub use matcher::WordMatcher;
pub use report::{CheckReport, Violation};

use crate::error::Result;
use crate::rubric::{Rubric, Rule};

/// Evaluates a rubric against comment-stripped source text.
///
/// Evaluation is a pure fold: all diagnostics are collected into a
/// [`CheckReport`] and nothing is printed here. Rules run in declared order,
/// forbidden before required, so the report reads the same way the rubric
/// does.
#[derive(Debug, Clone, Copy)]
pub struct RubricChecker<'a> {
    rubric: &'a Rubric,
}

impl<'a> RubricChecker<'a> {
    #[must_use]
    pub const fn new(rubric: &'a Rubric) -> Self {
        Self { rubric }
    }

    /// Run both rule categories over `code` and collect every violation.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if a rule name cannot be compiled into a
    /// word-boundary matcher.
    pub fn check(&self, code: &str) -> Result<CheckReport> {
        let mut violations = Vec::new();

        for rule in &self.rubric.forbidden {
            Self::check_forbidden(rule, code, &mut violations)?;
        }

        for rule in &self.rubric.required {
            Self::check_required(rule, code, &mut violations)?;
        }

        Ok(CheckReport::new(violations))
    }

    /// Each matched name is its own violation.
    fn check_forbidden(rule: &Rule, code: &str, violations: &mut Vec<Violation>) -> Result<()> {
        for name in &rule.names {
            let matcher = WordMatcher::new(name)?;
            if matcher.is_match(code) {
                violations.push(Violation::Forbidden {
                    message: rule.error_text.clone(),
                    name: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// A required rule yields one violation carrying the ordered subsequence
    /// of names that never matched; all names present means no output.
    fn check_required(rule: &Rule, code: &str, violations: &mut Vec<Violation>) -> Result<()> {
        let mut missing = Vec::new();

        for name in &rule.names {
            let matcher = WordMatcher::new(name)?;
            if !matcher.is_match(code) {
                missing.push(name.clone());
            }
        }

        if !missing.is_empty() {
            violations.push(Violation::MissingRequired {
                message: rule.error_text.clone(),
                missing,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
