//! Tests for argument parsing and usage exit codes.

use super::parse;
use crate::cli::{parse_error_exit_code, report_parse_error, Cli};
use clap::Parser;
use std::fs;
use std::path::Path;

#[test]
fn cli_parse_image() {
    let cli = parse(&["pngcrc", "dashboard.png"]);
    assert_eq!(cli.image, Path::new("dashboard.png"));
    assert!(!cli.yes);
}

#[test]
fn cli_parse_yes() {
    let cli = parse(&["pngcrc", "--yes", "photo.jpg"]);
    assert_eq!(cli.image, Path::new("photo.jpg"));
    assert!(cli.yes);

    let cli = parse(&["pngcrc", "photo.jpg", "-y"]);
    assert!(cli.yes);
}

#[test]
fn cli_parse_no_args_exits_1() {
    let err = Cli::try_parse_from(["pngcrc"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn cli_parse_two_args_exits_1() {
    let err = Cli::try_parse_from(["pngcrc", "a.png", "b.png"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn cli_parse_unknown_flag_exits_1() {
    let err = Cli::try_parse_from(["pngcrc", "--sha256", "a.png"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 1);
}

#[test]
fn cli_help_and_version_exit_0() {
    let err = Cli::try_parse_from(["pngcrc", "--help"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 0);
    let err = Cli::try_parse_from(["pngcrc", "--version"]).unwrap_err();
    assert_eq!(parse_error_exit_code(&err), 0);
}

fn report(args: &[&str]) -> (u8, String) {
    let err = Cli::try_parse_from(args).unwrap_err();
    let mut out = Vec::new();
    let code = report_parse_error(&err, &mut out);
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn report_no_args_prints_usage() {
    let (code, printed) = report(&["pngcrc"]);
    assert_eq!(code, 1);
    assert!(printed.contains("Usage:"), "{}", printed);
    assert!(printed.contains("pngcrc"));
    assert!(printed.contains("Generates a .crc32 checksum file"));
}

#[test]
fn report_two_args_prints_usage_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");
    fs::write(&a, b"123456789").unwrap();
    fs::write(&b, b"123456789").unwrap();

    let (code, printed) = report(&["pngcrc", a.to_str().unwrap(), b.to_str().unwrap()]);

    assert_eq!(code, 1);
    assert!(printed.contains("Usage:"), "{}", printed);
    assert!(!dir.path().join("a.png.crc32").exists());
    assert!(!dir.path().join("b.png.crc32").exists());
}

#[test]
fn report_help_has_no_tagline() {
    let (code, printed) = report(&["pngcrc", "--help"]);
    assert_eq!(code, 0);
    assert!(printed.contains("Usage:"));
    assert!(!printed.contains("Generates a .crc32 checksum file for image"));
}
