//! Tests for configuration loading and validation.

use std::io::Write;

use serial_test::serial;
use tempfile::TempDir;

use crate::config::{GraphConfig, DEFAULT_CAPACITY};
use crate::error::Error;

#[test]
#[serial]
fn test_defaults() {
    std::env::remove_var("MATGRAPH_CAPACITY");
    let config = GraphConfig::load(None).unwrap();
    assert_eq!(config.capacity, DEFAULT_CAPACITY);
}

#[test]
#[serial]
fn test_toml_file_overrides_defaults() {
    std::env::remove_var("MATGRAPH_CAPACITY");
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("matgraph.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "capacity = 64").unwrap();

    let config = GraphConfig::load(Some(&path)).unwrap();
    assert_eq!(config.capacity, 64);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("matgraph.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "capacity = 64").unwrap();

    std::env::set_var("MATGRAPH_CAPACITY", "128");
    let config = GraphConfig::load(Some(&path));
    std::env::remove_var("MATGRAPH_CAPACITY");

    assert_eq!(config.unwrap().capacity, 128);
}

#[test]
#[serial]
fn test_zero_capacity_rejected() {
    std::env::remove_var("MATGRAPH_CAPACITY");
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("matgraph.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "capacity = 0").unwrap();

    let result = GraphConfig::load(Some(&path));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_validate_directly() {
    assert!(GraphConfig { capacity: 1 }.validate().is_ok());
    assert!(matches!(
        GraphConfig { capacity: 0 }.validate(),
        Err(Error::Config(_))
    ));
}
