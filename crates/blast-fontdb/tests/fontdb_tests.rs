//! Tests against real font files
//!
//! These borrow a font from the system font directories and are skipped
//! when none is installed.

use blast_fontdb::{system_blaster, FontDbHost, FontBlaster, FontHost, StdFileSystem};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const SYSTEM_FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

fn find_font(dir: &Path, depth: usize) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("ttf") {
            return Some(path);
        }
    }
    if depth == 0 {
        return None;
    }
    subdirs.into_iter().find_map(|sub| find_font(&sub, depth - 1))
}

fn system_font() -> Option<Vec<u8>> {
    let path = SYSTEM_FONT_DIRS
        .iter()
        .find_map(|dir| find_font(Path::new(dir), 4))?;
    fs::read(path).ok()
}

#[test]
fn test_registers_real_font() {
    let Some(data) = system_font() else {
        eprintln!("No system .ttf available - skipping");
        return;
    };

    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("Fonts.bundle")).unwrap();
    fs::write(dir.path().join("Fonts.bundle").join("Borrowed.ttf"), &data).unwrap();

    let mut blaster = system_blaster();
    let names = blaster.blast(dir.path());

    assert_eq!(names.len(), 1);
    assert!(blaster.host().contains(&names[0]));
    assert_eq!(blaster.host().face_count(), 1);
}

#[test]
fn test_same_face_under_two_filenames_is_rejected_once() {
    let Some(data) = system_font() else {
        eprintln!("No system .ttf available - skipping");
        return;
    };

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("First.ttf"), &data).unwrap();
    fs::write(dir.path().join("Second.ttf"), &data).unwrap();

    let mut blaster = FontBlaster::new(StdFileSystem, FontDbHost::new());
    let report = blaster.blast_report(dir.path());

    assert_eq!(report.names.len(), 1);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].error().unwrap().is_rejection());
}

#[test]
fn test_parsed_font_metadata() {
    let Some(data) = system_font() else {
        eprintln!("No system .ttf available - skipping");
        return;
    };

    let mut host = FontDbHost::new();
    let parsed = host.construct_font(data.clone()).expect("system font parses");
    assert_eq!(parsed.len(), data.len());
    assert!(parsed.glyph_count() > 0);
    assert!(parsed.units_per_em() > 0.0);

    let name = host.register_font(parsed).unwrap();
    assert!(!name.is_empty());
    assert!(!host.family_names().is_empty());
}

#[test]
fn test_malformed_file_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Corrupt.otf"), b"OTTO but not really").unwrap();

    let mut blaster = system_blaster();
    let report = blaster.blast_report(dir.path());

    assert!(report.names.is_empty());
    let failure = report.failures().next().expect("one failure");
    assert!(failure.error().unwrap().is_malformed());
}
