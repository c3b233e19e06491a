use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use dailyword_core::WordRecord;
use dailyword_publish::{Markers, PublishError, patch_file, render, write_full};

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("dailyword_publish_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

fn hello() -> WordRecord {
    WordRecord::new("Hello", "US", "haro-", "greeting").expect("valid record")
}

#[test]
fn patches_region_and_preserves_surroundings() {
    let dir = temp_dir("patch");
    let path = dir.join("README.md");
    let markers = Markers::default();
    let original = format!(
        "# My profile\n\nintro\n\n{}\nstale block\n{}\n\nfooter\n",
        markers.start, markers.end
    );
    fs::write(&path, &original).expect("write document");

    let block = render(Some(&hello()), today());
    patch_file(&path, &markers, &block).expect("patch document");

    let patched = fs::read_to_string(&path).expect("read document");
    let expected = format!(
        "# My profile\n\nintro\n\n{}\n{block}\n{}\n\nfooter\n",
        markers.start, markers.end
    );
    assert_eq!(patched, expected);

    patch_file(&path, &markers, &block).expect("patch document again");
    assert_eq!(fs::read_to_string(&path).expect("read document"), expected);
}

#[test]
fn missing_markers_leave_document_untouched() {
    let dir = temp_dir("no_markers");
    let path = dir.join("README.md");
    let original = "# Untouched\n\nno region here\n";
    fs::write(&path, original).expect("write document");

    let err = patch_file(&path, &Markers::default(), "new").unwrap_err();
    assert!(matches!(err, PublishError::MarkerNotFound { .. }));
    assert_eq!(fs::read_to_string(&path).expect("read document"), original);
}

#[test]
fn missing_document_is_reported() {
    let dir = temp_dir("missing_doc");
    let path = dir.join("README.md");

    let err = patch_file(&path, &Markers::default(), "new").unwrap_err();
    assert!(matches!(err, PublishError::SourceNotFound(_)));
    assert!(!path.exists());
}

#[test]
fn write_full_overwrites_document() {
    let dir = temp_dir("full");
    let path = dir.join("README.md");
    fs::write(&path, "hand edits that will be lost").expect("write document");

    let now = today().and_hms_opt(0, 0, 0).expect("valid time");
    write_full(&path, Some(&hello()), now).expect("write full document");

    let document = fs::read_to_string(&path).expect("read document");
    assert!(!document.contains("hand edits"));
    assert!(document.contains("### Hello"));
    assert!(document.contains("**2024年03月15日 (金曜日)**"));
}

#[test]
fn write_full_reports_write_failure() {
    let dir = temp_dir("full_write_error");
    let path = dir.join("README.md");
    fs::create_dir_all(&path).expect("create directory at document path");

    let now = today().and_hms_opt(0, 0, 0).expect("valid time");
    let err = write_full(&path, Some(&hello()), now).unwrap_err();

    assert!(matches!(err, PublishError::Write { .. }));
    assert!(path.is_dir());
    assert!(!dir.join(".README.md.tmp").exists());
}

#[test]
fn patch_file_on_directory_writes_nothing() {
    let dir = temp_dir("patch_directory");
    let path = dir.join("README.md");
    fs::create_dir_all(&path).expect("create directory at document path");

    let err = patch_file(&path, &Markers::default(), "new").unwrap_err();

    assert!(matches!(err, PublishError::Io(_)));
    assert!(path.is_dir());
    assert!(!dir.join(".README.md.tmp").exists());
}

#[test]
fn patch_file_reports_write_failure() {
    let dir = temp_dir("patch_write_error");
    let path = dir.join("README.md");
    let markers = Markers::default();
    let original = format!("{}\nold\n{}\n", markers.start, markers.end);
    fs::write(&path, &original).expect("write document");
    // Occupy the temp sibling so the write cannot start.
    fs::create_dir_all(dir.join(".README.md.tmp")).expect("create blocking directory");

    let err = patch_file(&path, &markers, "new").unwrap_err();

    assert!(matches!(err, PublishError::Write { .. }));
    assert_eq!(fs::read_to_string(&path).expect("read document"), original);
}
