use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RubricGuardError {
    #[error("Rubric file not found at {path}")]
    RubricNotFound { path: PathBuf },

    #[error("Could not parse rubric file: {0}")]
    RubricParse(#[from] serde_yaml::Error),

    #[error("Source file not found at {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, RubricGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
