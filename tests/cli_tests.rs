//! End-to-end tests for the command-line front end

use clap::Parser;
use fontblaster::cli::{self, Args};
use fontblaster::CliError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_font_free_tree_reports_nothing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
    fs::create_dir(dir.path().join("Empty.bundle")).unwrap();

    let args = Args::parse_from(["fontblaster", dir.path().to_str().unwrap()]);
    let report = cli::run(&args).unwrap();

    assert!(report.names.is_empty());
    assert!(report.outcomes.is_empty());
    assert!(report.scan_failures.is_empty());
    assert_eq!(cli::render(&report, false), "0 font(s): 0 registered, 0 already loaded");
}

#[test]
fn test_corrupt_fonts_listed_as_failures() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("Assets.bundle")).unwrap();
    fs::write(dir.path().join("Assets.bundle").join("Bad.ttf"), b"garbage").unwrap();

    let args = Args::parse_from(["fontblaster", dir.path().to_str().unwrap()]);
    let report = cli::run(&args).unwrap();

    assert!(report.names.is_empty());
    let rendered = cli::render(&report, false);
    assert!(rendered.contains("failed: "));
    assert!(rendered.contains("Bad.ttf"));
}

#[test]
fn test_require_fonts() {
    let dir = tempdir().unwrap();
    let args = Args::parse_from(["fontblaster", "--require-fonts", dir.path().to_str().unwrap()]);
    assert!(matches!(cli::run(&args), Err(CliError::NothingRegistered)));
}

#[test]
fn test_root_must_be_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Font.ttf");
    fs::write(&file, b"x").unwrap();

    let args = Args::parse_from(["fontblaster", file.to_str().unwrap()]);
    match cli::run(&args) {
        Err(CliError::NotADirectory(path)) => assert_eq!(path, file),
        other => panic!("expected NotADirectory, got {other:?}"),
    }
}
