//! Configuration Loading Tests
//!
//! These tests read and modify process environment variables, so they run
//! serially.

use anyhow::Result;
use image_helpers::config::AppConfig;
use image_helpers::validation::paths::PathRules;
use image_helpers::EncodingPolicy;
use serial_test::serial;
use std::env;

use crate::common::{clear_config_env, parse_cli, write_config_file};

#[test]
#[serial]
fn test_load_without_file_uses_defaults() -> Result<()> {
    clear_config_env();
    let config = AppConfig::load()?;
    assert_eq!(config.fingerprint.encoding, EncodingPolicy::Legacy);
    assert_eq!(config.paths.rules, PathRules::Host);
    assert_eq!(config.logging.filter, "error");
    Ok(())
}

#[test]
#[serial]
fn test_load_from_file() -> Result<()> {
    clear_config_env();
    let (_dir, path) = write_config_file(
        r##"
[fingerprint]
encoding = "utf8"

[paths]
rules = "windows"
extra_illegal_chars = "#%"
"##,
    )?;

    let config = AppConfig::load_from(&path)?;
    assert_eq!(config.fingerprint.encoding, EncodingPolicy::Utf8);
    assert_eq!(config.paths.rules, PathRules::Windows);
    assert_eq!(config.paths.extra_illegal_chars, "#%");
    // Section left out of the file keeps its default
    assert_eq!(config.logging.filter, "error");

    let validator = config.path_validator();
    assert!(!validator.is_valid_path_name("100%"));
    assert!(!validator.is_valid_path_name("a:b"));
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_file() -> Result<()> {
    clear_config_env();
    let (_dir, path) = write_config_file("[fingerprint]\nencoding = \"legacy\"\n")?;

    env::set_var("IMAGE_HELPERS__FINGERPRINT__ENCODING", "utf8");
    env::set_var("IMAGE_HELPERS__PATHS__RULES", "unix");
    let result = AppConfig::load_from(&path);
    clear_config_env();

    let config = result?;
    assert_eq!(config.fingerprint.encoding, EncodingPolicy::Utf8);
    assert_eq!(config.paths.rules, PathRules::Unix);
    Ok(())
}

#[test]
#[serial]
fn test_invalid_rules_value_is_an_error() -> Result<()> {
    clear_config_env();
    let (_dir, path) = write_config_file("[paths]\nrules = \"dos\"\n")?;
    assert!(AppConfig::load_from(&path).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_config_env();
    let missing = env::temp_dir().join("image-helpers-does-not-exist.toml");
    assert!(AppConfig::load_from(&missing).is_err());
}

#[test]
#[serial]
fn test_cli_config_flag_loads_file() -> Result<()> {
    clear_config_env();
    let (_dir, path) = write_config_file("[paths]\nrules = \"unix\"\n")?;
    let path_arg = path.to_string_lossy().to_string();

    let cli = parse_cli(&["validate-path", "--config", &path_arg, "foo:bar"])?;
    let config = cli.load_config()?;
    assert_eq!(cli.render(&config)?, "valid\n");
    Ok(())
}

#[test]
#[serial]
fn test_file_accepts_hyphenated_utf8_encoding() -> Result<()> {
    clear_config_env();
    let (_dir, path) = write_config_file("[fingerprint]\nencoding = \"utf-8\"\n")?;
    let config = AppConfig::load_from(&path)?;
    assert_eq!(config.fingerprint.encoding, EncodingPolicy::Utf8);
    Ok(())
}

#[test]
#[serial]
fn test_environment_accepts_hyphenated_utf8_encoding() -> Result<()> {
    clear_config_env();
    env::set_var("IMAGE_HELPERS__FINGERPRINT__ENCODING", "utf-8");
    let result = AppConfig::load();
    clear_config_env();

    assert_eq!(result?.fingerprint.encoding, EncodingPolicy::Utf8);
    Ok(())
}
