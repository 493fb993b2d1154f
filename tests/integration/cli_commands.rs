//! CLI Command Tests
//!
//! Parses real argument vectors and renders command output without touching
//! stdout.

use anyhow::Result;
use image_helpers::config::AppConfig;
use image_helpers::types::{FingerprintReport, IntegerExtraction, PathCheck, PathKind};
use image_helpers::validation::paths::PathRules;
use image_helpers::{AppError, EncodingPolicy, HashAlgorithm, HelperError, TextEncoding};

use crate::common::vectors::*;
use crate::common::{parse_cli, render_cli};

fn unix_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.paths.rules = PathRules::Unix;
    config
}

#[test]
fn test_fingerprint_defaults_to_sha256() -> Result<()> {
    let output = render_cli(&["fingerprint", ""], &AppConfig::default())?;
    assert_eq!(output, format!("{}\n", EMPTY_SHA256));
    Ok(())
}

#[test]
fn test_fingerprint_all_lists_every_algorithm() -> Result<()> {
    let output = render_cli(&["fingerprint", "--all", ""], &AppConfig::default())?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("md5") && lines[0].ends_with(EMPTY_MD5));
    assert!(lines[1].starts_with("sha1") && lines[1].ends_with(EMPTY_SHA1));
    assert!(lines[3].starts_with("sha512") && lines[3].ends_with(EMPTY_SHA512));
    Ok(())
}

#[test]
fn test_fingerprint_json_reports_encoding() -> Result<()> {
    let output = render_cli(
        &["fingerprint", "-a", "md5", "--format", "json", ""],
        &AppConfig::default(),
    )?;
    let reports: Vec<FingerprintReport> = serde_json::from_str(&output)?;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].algorithm, HashAlgorithm::Md5);
    assert_eq!(reports[0].bits, 128);
    assert_eq!(reports[0].encoding, TextEncoding::Utf16Le);
    assert_eq!(reports[0].digest, EMPTY_MD5);
    Ok(())
}

#[test]
fn test_fingerprint_encoding_flag_overrides_config() -> Result<()> {
    let mut config = AppConfig::default();
    config.fingerprint.encoding = EncodingPolicy::Utf8;

    let from_config = render_cli(&["fingerprint", "-a", "md5", "abc"], &config)?;
    assert_eq!(from_config, "900150983cd24fb0d6963f7d28e17f72\n");

    let overridden = render_cli(
        &["fingerprint", "-a", "md5", "--encoding", "legacy", "abc"],
        &config,
    )?;
    assert_ne!(overridden, from_config);
    Ok(())
}

#[test]
fn test_unknown_algorithm_is_rejected_by_parser() {
    assert!(parse_cli(&["fingerprint", "--algorithm", "crc32", "x"]).is_err());
}

#[test]
fn test_missing_text_is_invalid_argument() -> Result<()> {
    let cli = parse_cli(&["fingerprint"])?;
    let err = cli.render(&AppConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Helper(HelperError::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_extract_integers_text_and_json() -> Result<()> {
    let config = AppConfig::default();
    assert_eq!(
        render_cli(&["extract-integers", "abc 12 def 345"], &config)?,
        "12 345\n"
    );

    let output = render_cli(
        &["extract-integers", "--format", "json", "640x480"],
        &config,
    )?;
    let extraction: IntegerExtraction = serde_json::from_str(&output)?;
    assert_eq!(extraction.values, vec![640, 480]);
    assert_eq!(extraction.input, "640x480");
    Ok(())
}

#[test]
fn test_extract_integers_propagates_errors() -> Result<()> {
    let cli = parse_cli(&["extract-integers", "   "])?;
    assert!(matches!(
        cli.render(&AppConfig::default()),
        Err(AppError::Helper(HelperError::PreconditionViolation(_)))
    ));

    let cli = parse_cli(&["extract-integers", "99999999999"])?;
    assert!(matches!(
        cli.render(&AppConfig::default()),
        Err(AppError::Helper(HelperError::Overflow { .. }))
    ));
    Ok(())
}

#[test]
fn test_validate_path_uses_configured_rules() -> Result<()> {
    let config = unix_config();
    assert_eq!(render_cli(&["validate-path", "foo:bar"], &config)?, "valid\n");
    assert_eq!(
        render_cli(&["validate-path", "--rules", "windows", "foo:bar"], &config)?,
        "invalid\n"
    );
    Ok(())
}

#[test]
fn test_validate_virtual_path_json() -> Result<()> {
    let output = render_cli(
        &["validate-path", "--virtual", "--format", "json", "~/foo.png"],
        &unix_config(),
    )?;
    let check: PathCheck = serde_json::from_str(&output)?;
    assert_eq!(check.kind, PathKind::Virtual);
    assert!(check.valid);

    let output = render_cli(&["validate-path", "--virtual", "foo.png"], &unix_config())?;
    assert_eq!(output, "invalid\n");
    Ok(())
}

#[test]
fn test_validate_path_extra_illegal_chars() -> Result<()> {
    let mut config = unix_config();
    config.paths.extra_illegal_chars = "#".to_string();
    assert_eq!(render_cli(&["validate-path", "a#b"], &config)?, "invalid\n");
    Ok(())
}

#[test]
fn test_config_command_prints_toml() -> Result<()> {
    let output = render_cli(&["config"], &unix_config())?;
    assert!(output.contains("rules = \"unix\""));
    assert!(output.contains("[logging]"));
    Ok(())
}

#[test]
fn test_unknown_output_format_is_rejected_by_parser() {
    assert!(parse_cli(&["fingerprint", "--format", "yaml", "x"]).is_err());
    assert!(parse_cli(&["extract-integers", "--format", "csv", "1 2"]).is_err());
    assert!(parse_cli(&["validate-path", "--format", "xml", "a"]).is_err());
}

#[test]
fn test_output_format_is_case_insensitive() -> Result<()> {
    let output = render_cli(
        &["extract-integers", "--format", "JSON", "12"],
        &AppConfig::default(),
    )?;
    let extraction: IntegerExtraction = serde_json::from_str(&output)?;
    assert_eq!(extraction.values, vec![12]);
    Ok(())
}

#[test]
fn test_encoding_flag_accepts_hyphenated_utf8() -> Result<()> {
    let output = render_cli(
        &["fingerprint", "-a", "md5", "--encoding", "utf-8", "abc"],
        &AppConfig::default(),
    )?;
    assert_eq!(output, "900150983cd24fb0d6963f7d28e17f72\n");
    Ok(())
}
