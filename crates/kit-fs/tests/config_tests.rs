use kit_fs::{ConfigStore, Error, NormalizedPath};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    name: String,
    #[serde(default)]
    available: bool,
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kit.toml");
    fs::write(&path, "name = \"Coder\"\navailable = true\n").unwrap();

    let sample: Sample = ConfigStore::new().load(&NormalizedPath::new(&path)).unwrap();
    assert_eq!(
        sample,
        Sample {
            name: "Coder".into(),
            available: true
        }
    );
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kit.json");
    fs::write(&path, r#"{"name": "Writer"}"#).unwrap();

    let sample: Sample = ConfigStore::new().load(&NormalizedPath::new(&path)).unwrap();
    assert_eq!(sample.name, "Writer");
    assert!(!sample.available);
}

#[test]
fn test_load_invalid_toml_reports_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "name = ").unwrap();

    let err = ConfigStore::new()
        .load::<Sample>(&NormalizedPath::new(&path))
        .unwrap_err();
    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kit.ini");
    fs::write(&path, "name=x").unwrap();

    let err = ConfigStore::new()
        .load::<Sample>(&NormalizedPath::new(&path))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_load_optional_missing() {
    let temp = TempDir::new().unwrap();
    let loaded: Option<Sample> = ConfigStore::new()
        .load_optional(&NormalizedPath::new(temp.path().join("kits.toml")))
        .unwrap();
    assert!(loaded.is_none());
}
