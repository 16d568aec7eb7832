//! Comment removal for C-style sources.
//!
//! This is a deliberate line-level heuristic, not a lexer. Comment markers
//! inside string literals still count as markers, and any line that opens or
//! closes a block comment is dropped in full, including code sharing the
//! line.

const SINGLE_LINE_MARKER: &str = "//";
const MULTI_LINE_START: &str = "/*";
const MULTI_LINE_END: &str = "*/";

/// Strips `//` and `/* ... */` comments from source text, line by line, with
/// a single flag of look-behind state.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentStripper;

impl CommentStripper {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Produce the comment-free blob used for rule matching: surviving lines
    /// are trimmed, kept in order, and joined with `\n`. Blank lines survive
    /// as empty strings.
    #[must_use]
    pub fn strip(&self, source: &str) -> String {
        let mut in_multi_line_comment = false;
        let mut kept: Vec<&str> = Vec::new();

        for line in source.lines() {
            if let Some(code) = Self::process_line(line, &mut in_multi_line_comment) {
                kept.push(code);
            }
        }

        kept.join("\n")
    }

    /// Advance the block-comment state for one line and return the code to
    /// keep, if any.
    ///
    /// Branch order matters and is part of the contract:
    /// a `//` line never touches the block state, and a line containing
    /// `/*` re-enters the state even when already inside a comment.
    fn process_line<'a>(line: &'a str, in_multi_line_comment: &mut bool) -> Option<&'a str> {
        let trimmed = line.trim();

        if trimmed.starts_with(SINGLE_LINE_MARKER) {
            return None;
        }

        if trimmed.contains(MULTI_LINE_START) {
            *in_multi_line_comment = !trimmed.contains(MULTI_LINE_END);
            return None;
        }

        if *in_multi_line_comment {
            if trimmed.contains(MULTI_LINE_END) {
                *in_multi_line_comment = false;
            }
            return None;
        }

        Some(trimmed)
    }
}

#[cfg(test)]
#[path = "stripper_tests.rs"]
mod tests;
