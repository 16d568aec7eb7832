use regex::Regex;

use crate::error::{Result, RubricGuardError};

/// Whole-word matcher for a single literal pattern.
///
/// The pattern text is matched verbatim (escaped, not a pattern language),
/// anchored at word boundaries on both ends so `goto` does not hit inside
/// `gotoken`. Matching is case-sensitive.
///
/// Patterns whose edge characters are not word characters (e.g. `->` or
/// `[]`) keep the same uniform boundary rule, so they only match when
/// flanked by word characters on both sides.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Compile a whole-word matcher for `name`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the derived expression fails to compile.
    pub fn new(name: &str) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(name));
        let regex = Regex::new(&pattern).map_err(|e| RubricGuardError::InvalidPattern {
            pattern: name.to_string(),
            source: e,
        })?;

        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
