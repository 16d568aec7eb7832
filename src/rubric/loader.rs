use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, RubricGuardError};

use super::model::{Rubric, RubricDoc};

/// Loads and validates rubric files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RubricLoader;

impl RubricLoader {
    /// Load a rubric from `path`.
    ///
    /// # Errors
    /// Returns `RubricNotFound` when the file does not exist, `FileRead` when
    /// it exists but cannot be read, and `RubricParse` when the document does
    /// not deserialize into the rubric shape.
    pub fn load(path: &Path) -> Result<Rubric> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RubricGuardError::RubricNotFound {
                path: path.to_path_buf(),
            },
            _ => RubricGuardError::FileRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let doc: RubricDoc = serde_yaml::from_str(&content)?;
        Ok(doc.into_rubric())
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
