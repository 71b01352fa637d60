use std::fs;

use clienti_tools::services::json_file::{count_records, write_records};
use clienti_tools::AppError;
use serde_json::json;

#[test]
fn test_count_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clienti.json");
    fs::write(&path, r#"[{"id": "a"}, {"id": "b"}, {"id": "c"}]"#).unwrap();

    assert_eq!(count_records(&path).unwrap(), 3);
}

#[test]
fn test_count_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clienti.json");
    fs::write(&path, "[]").unwrap();

    assert_eq!(count_records(&path).unwrap(), 0);
}

#[test]
fn test_count_rejects_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clienti.json");
    fs::write(&path, r#"{"clienti": []}"#).unwrap();

    let err = count_records(&path).unwrap_err();
    assert!(matches!(err, AppError::NotAnArray { .. }));
    assert!(err.to_string().contains("does not contain a JSON array"));
}

#[test]
fn test_count_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clienti.json");
    fs::write(&path, "[{").unwrap();

    assert!(matches!(count_records(&path), Err(AppError::Json { .. })));
}

#[test]
fn test_count_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = count_records(&path).unwrap_err();
    assert!(matches!(err, AppError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_write_is_pretty_and_keeps_unicode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clienti.json");
    let records = vec![json!({ "id": "1", "descrizione": "Caffè e brioche" })];

    write_records(&path, &records).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": \"1\""));
    assert!(raw.contains("Caffè e brioche"));
    assert_eq!(count_records(&path).unwrap(), 1);
}
