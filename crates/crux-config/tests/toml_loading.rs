//! Explicit config files passed with `--config`.

use std::io::Write;

use crux_config::{ConfigError, CruxConfig};
use pretty_assertions::assert_eq;

#[test]
fn explicit_file_is_layered_over_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[parser]\nmax_depth = 2\n\n[output]\npretty = false").expect("write");

    let config = CruxConfig::load_from(file.path()).expect("config loads");
    assert_eq!(config.parser.max_depth, Some(2));
    assert!(!config.output.pretty);
    assert!(config.parser.include_private_items);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = CruxConfig::load_from(&dir.path().join("absent.toml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn malformed_file_is_a_figment_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[parser\nmax_depth = ").expect("write");

    let err = CruxConfig::load_from(file.path()).expect_err("malformed toml");
    assert!(matches!(err, ConfigError::Figment(_)));
}
