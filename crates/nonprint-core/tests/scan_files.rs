//! 基于真实文件的扫描测试

use std::fs;
use std::path::Path;

use nonprint_core::{scan_and_write, ScanError, ScanStats};
use tempfile::tempdir;

fn scan(path: &Path) -> (Result<ScanStats, ScanError>, String) {
    let mut out = Vec::new();
    let res = scan_and_write(path, &mut out);
    (res, String::from_utf8(out).expect("utf-8 output"))
}

fn scan_bytes(content: &[u8]) -> (Result<ScanStats, ScanError>, String) {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("input.tsv");
    fs::write(&path, content).expect("write input");
    scan(&path)
}

#[test]
fn nul_on_second_line() {
    let (res, out) = scan_bytes(b"hello\nwo\x00rld\n");
    assert!(res.is_ok());
    assert_eq!(out, "Line 2: '\\x00'\n");
}

#[test]
fn leading_controls() {
    let (_, out) = scan_bytes(b"\x01\x02abc\n");
    assert_eq!(out, "Line 1: '\\x01\\x02'\n");
}

#[test]
fn plain_text_produces_nothing() {
    let (res, out) = scan_bytes(b"plain text\n");
    assert_eq!(out, "");
    assert_eq!(res.unwrap().lines_scanned, 1);
}

#[test]
fn del_alone() {
    let (_, out) = scan_bytes(b"ok\nok\n\x7f\n");
    assert_eq!(out, "Line 3: '\\x7f'\n");
}

#[test]
fn duplicates_and_multibyte_text() {
    let (res, out) = scan_bytes("名前\t値\0\0\n\u{feff}ok\x1f\n".as_bytes());
    assert_eq!(out, "Line 1: '\\x00\\x00'\nLine 2: '\\x1f'\n");
    let stats = res.unwrap();
    assert_eq!(stats.lines_flagged, 2);
    assert_eq!(stats.chars_flagged, 3);
}

#[test]
fn empty_file() {
    let (res, out) = scan_bytes(b"");
    assert_eq!(out, "");
    assert_eq!(res.unwrap(), ScanStats::default());
}

#[test]
fn missing_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.txt");
    let (res, out) = scan(&path);
    assert_eq!(out, "");
    let err = res.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), format!("Error: The file '{}' does not exist.", path.display()));
}

#[test]
fn directory_is_a_generic_failure() {
    let dir = tempdir().expect("temp dir");
    let (res, _) = scan(dir.path());
    let err = res.unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().starts_with("An error occurred: "));
}

#[test]
fn invalid_utf8_stops_the_scan() {
    let (res, out) = scan_bytes(b"a\x02\n\xc3\x28\n\x03\n");
    assert_eq!(out, "Line 1: '\\x02'\n");
    assert!(matches!(res, Err(ScanError::GenericFailure { .. })));
}
