pub mod checker;
pub mod cli;
pub mod error;
pub mod output;
pub mod rubric;
pub mod stripper;

pub use error::{Result, RubricGuardError};

pub const EXIT_SUCCESS: i32 = 0;

/// Violation counts saturate here so they never collide with the load-error
/// sentinel.
pub const EXIT_VIOLATION_CAP: i32 = 101;

/// Exit status for fatal load errors: rubric missing or unparseable, source
/// file missing or unreadable.
pub const EXIT_LOAD_ERROR: i32 = 102;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
