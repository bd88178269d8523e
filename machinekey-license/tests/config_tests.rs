use std::io::Write;

use machinekey_license::{LicenseConfig, LicenseError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_license_key() {
    let file = write_config("license_key = \"1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij\"\n");
    let config = LicenseConfig::load_from(file.path()).unwrap();
    assert_eq!(config.license_key, "1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let file = write_config("license_key = \"  1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij\\n\"\n");
    let config = LicenseConfig::load_from(file.path()).unwrap();
    assert_eq!(config.license_key, "1E8T9fYBBUemhnStWepZrYJF8sNz6zsuij");
}

#[test]
fn explicit_path_is_used() {
    let file = write_config("license_key = \"1ABC\"\n");
    let config = LicenseConfig::load(Some(file.path()));
    // The environment override is not set in the test environment.
    if std::env::var(machinekey_license::LICENSE_KEY_ENV).is_err() {
        assert_eq!(config.unwrap().license_key, "1ABC");
    }
}

#[test]
fn empty_key_is_rejected() {
    let file = write_config("license_key = \"\"\n");
    assert!(matches!(
        LicenseConfig::load_from(file.path()),
        Err(LicenseError::Config(_))
    ));
}

#[test]
fn missing_key_is_rejected() {
    let file = write_config("# nothing here\n");
    assert!(matches!(
        LicenseConfig::load_from(file.path()),
        Err(LicenseError::Config(_))
    ));
}

#[test]
fn invalid_toml_is_rejected() {
    let file = write_config("license_key = ");
    assert!(matches!(
        LicenseConfig::load_from(file.path()),
        Err(LicenseError::TomlDeserialize(_))
    ));
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        LicenseConfig::load_from(&dir.path().join("config.toml")),
        Err(LicenseError::Config(_))
    ));
}
