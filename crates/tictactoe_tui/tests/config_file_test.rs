//! Tests for loading the TOML config from disk.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_loads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "glyph_x = \"x\"").unwrap();
    writeln!(file, "glyph_o = \"o\"").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let config = TuiConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.glyph(tictactoe_core::Player::X), "x");
    assert_eq!(config.glyph(tictactoe_core::Player::O), "o");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "glyph_x = ").unwrap();

    let err = TuiConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_log_file_override() {
    let config = TuiConfig::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}
