use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::error::RubricGuardError;

fn write_rubric(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rubric.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_valid_rubric() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(
        &dir,
        "forbidden:\n  - names: [goto]\n    error_text: no goto\n",
    );

    let rubric = RubricLoader::load(&path).unwrap();
    assert_eq!(rubric.forbidden.len(), 1);
    assert!(rubric.required.is_empty());
}

#[test]
fn missing_file_is_rubric_not_found() {
    let dir = TempDir::new().unwrap();
    let err = RubricLoader::load(&dir.path().join("nope.yml")).unwrap_err();

    assert!(matches!(err, RubricGuardError::RubricNotFound { .. }));
}

#[test]
fn malformed_yaml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(&dir, "forbidden: [unclosed\n");

    let err = RubricLoader::load(&path).unwrap_err();
    assert!(matches!(err, RubricGuardError::RubricParse(_)));
}

#[test]
fn wrong_shape_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(&dir, "forbidden: 3\n");

    let err = RubricLoader::load(&path).unwrap_err();
    assert!(matches!(err, RubricGuardError::RubricParse(_)));
}

#[test]
fn empty_document_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(&dir, "");

    let err = RubricLoader::load(&path).unwrap_err();
    assert!(matches!(err, RubricGuardError::RubricParse(_)));
}

#[test]
fn incomplete_entries_are_filtered_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(
        &dir,
        "forbidden:\n  - names: [system]\n  - names: [goto]\n    error_text: no goto\n",
    );

    let rubric = RubricLoader::load(&path).unwrap();
    assert_eq!(rubric.forbidden.len(), 1);
    assert_eq!(rubric.forbidden[0].names, vec!["goto"]);
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(
        &dir,
        "title: homework 1\nforbidden:\n  - names: [goto]\n    error_text: no goto\n",
    );

    let rubric = RubricLoader::load(&path).unwrap();
    assert_eq!(rubric.forbidden.len(), 1);
}

#[test]
fn rubric_with_only_shall_have_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_rubric(
        &dir,
        "shall_have:\n  - names: [main, printf]\n    error_text: missing required calls\n",
    );

    let rubric = RubricLoader::load(&path).unwrap();
    assert!(rubric.forbidden.is_empty());
    assert_eq!(rubric.required[0].names, vec!["main", "printf"]);
}
