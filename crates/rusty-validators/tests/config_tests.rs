//! Loading option presets from validators.toml and validating through them

use pretty_assertions::assert_eq;
use rusty_validators::{DateFormat, ErrorKind, ValidationConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` to validators.toml in a fresh temp dir.
/// The dir is removed when the returned guard drops.
fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("validators.toml");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

const CONFIG: &str = r##"
dateFormat = "MM/DD/YYYY"

[email]
allowSpecialCharacters = false
disallowedDomains = ["spam.com"]

[password]
minLength = 8
requireUppercase = 1
requireSpecialChars = 1
specialChars = "#!"

[number]
min = 1
max = 5
decimalPlaces = 4

[url]
protocols = ["http", "mailto"]
format = "(?i)moemen"
"##;

#[test]
fn test_presets_from_file() {
    let (_temp_dir, path) = write_config(CONFIG);
    let config = ValidationConfig::load(&path).unwrap();

    assert_eq!(config.date_format, DateFormat::MonthDayYear);

    assert_eq!(config.validate_email("Jane.Doe@Example.com").unwrap(), "jane.doe@example.com");
    assert_eq!(
        config.validate_email("jane_doe@example.com").unwrap_err().kind(),
        ErrorKind::Policy
    );
    assert_eq!(config.validate_email("jane@spam.com").unwrap_err().kind(), ErrorKind::Policy);

    assert!(config.validate_password("Correct#horse").is_ok());
    assert_eq!(config.validate_password("Correct$horse").unwrap_err().kind(), ErrorKind::Count);

    assert!(config.validate_date("01/12/2024").is_ok());
    assert!(config.validate_date("13/01/2024").is_err());

    assert_eq!(config.validate_number(3.2449).unwrap(), 3.2449);
    assert_eq!(config.validate_number("4.00001").unwrap_err().kind(), ErrorKind::Range);

    assert!(config.validate_url("http://moemen.com").is_ok());
    assert!(config.validate_url("https://moemen.com").is_err());
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_temp_dir, path) = write_config("\n");
    let config = ValidationConfig::load(&path).unwrap();
    assert_eq!(config.date_format, DateFormat::YearMonthDay);
    assert!(config.validate_email("user@example.com").is_ok());
}

#[test]
fn test_malformed_file_reports_path() {
    let (_temp_dir, path) = write_config("[email\nmaxLength = ");
    let err = ValidationConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_temp_config_is_removed_after_use() {
    let (temp_dir, path) = write_config(CONFIG);
    let dir = temp_dir.path().to_path_buf();
    assert!(ValidationConfig::load(&path).is_ok());

    drop(temp_dir);
    assert!(!dir.exists());
    assert_eq!(
        ValidationConfig::load(&path).unwrap().date_format,
        DateFormat::YearMonthDay
    );
}
