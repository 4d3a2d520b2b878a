use std::fs;
use std::path::Path;

use certsmith::config;
use certsmith::error::CertSmithError;
use certsmith::{example, inspect, pipeline};
use serde_json::json;

#[test]
fn generate_from_json_file_produces_inspectable_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dev.json");
    let doc = json!({"commonName": "file.test", "private_key_bits": 1024});
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let artifacts = pipeline::generate_from_json_file(&path).unwrap();
    let report = inspect::inspect_pem(artifacts.certificate_pem.as_bytes()).unwrap();
    assert_eq!(report.subject.get("commonName"), Some("file.test"));
}

#[test]
fn validate_config_file_accepts_valid_and_rejects_invalid() {
    let dir = tempfile::tempdir().unwrap();

    let good = dir.path().join("good.json");
    fs::write(&good, r#"{"commonName": "ok.test"}"#).unwrap();
    config::validate_config_file(&good).unwrap();

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"organizationName": "No CN"}"#).unwrap();
    assert!(matches!(
        config::validate_config_file(&bad),
        Err(CertSmithError::Config(_))
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        config::validate_config_file(&broken),
        Err(CertSmithError::Config(_))
    ));
}

#[test]
fn missing_config_file_is_a_config_error_naming_the_path() {
    let err = config::load_json_config(Path::new("/nonexistent/nope.json")).unwrap_err();
    match err {
        CertSmithError::Config(msg) => assert!(msg.contains("nope.json")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn example_config_written_to_file_feeds_the_resolver() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.json");
    example::generate_example_config(Some(&path)).unwrap();

    let value = config::load_json_config(&path).unwrap();
    let request = config::resolve_from_json_value(&value, None).unwrap();
    assert_eq!(request.dn.common_name, "example.certsmith.test");
    assert_eq!(request.subject_alt_names.len(), 2);
}
