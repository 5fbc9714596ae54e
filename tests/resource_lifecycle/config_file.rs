//! Configuration file loading drives executor behavior.

use randint::{Command, Executor, RandintConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_default_file_is_lenient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    RandintConfig::write_default_if_missing(&path).unwrap();

    let config = RandintConfig::from_file(&path).unwrap();
    let executor = Executor::with_config(&config);
    assert!(!executor.controller().strict_import());
    assert!(executor
        .execute(Command::Import {
            id: "99,1,10".to_string()
        })
        .is_ok());
}

#[test]
fn test_strict_file_rejects_out_of_range_import() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "strict_import = true\nlog = \"debug\"\n").unwrap();

    let config = RandintConfig::from_file(&path).unwrap();
    assert_eq!(config.log, "debug");

    let executor = Executor::with_config(&config);
    assert!(executor
        .execute(Command::Import {
            id: "99,1,10".to_string()
        })
        .is_err());
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "strict_import = \"yes\"\n").unwrap();

    let err = RandintConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
