#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A stand-in engine that reports every word it is fed as unknown,
/// one per line, the way `aspell list` would.
fn write_fake_engine(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("fake-spell");
    fs::write(&path, "#!/bin/sh\ntr -s ' \\t' '\\n'\n").unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("sample.rs");
    fs::write(&path, "// teh quick\nlet x = 1; // teh\n").unwrap();
    path
}

#[test]
fn test_text_report_with_per_line_detail_and_summary() {
    let dir = TempDir::new().unwrap();
    let engine = write_fake_engine(&dir);
    let sample = write_sample(&dir);

    Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("--no-color")
        .arg("--engine")
        .arg(&engine)
        .arg(&sample)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("line    1: quick teh"))
        .stdout(predicate::str::contains("line    2: teh"))
        .stdout(predicate::str::contains("        1: quick"))
        .stdout(predicate::str::contains("        2: teh"))
        .stdout(predicate::str::contains("✗ 3 unknown words found in 1 file"));
}

#[test]
fn test_no_fail_keeps_exit_code_zero() {
    let dir = TempDir::new().unwrap();
    let engine = write_fake_engine(&dir);
    let sample = write_sample(&dir);

    Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("--no-color")
        .arg("--no-fail")
        .arg("--engine")
        .arg(&engine)
        .arg(&sample)
        .assert()
        .success();
}

#[test]
fn test_json_output_matches_text_counts() {
    let dir = TempDir::new().unwrap();
    let engine = write_fake_engine(&dir);
    let sample = write_sample(&dir);

    let output = Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("-o")
        .arg("json")
        .arg("--no-fail")
        .arg("--engine")
        .arg(&engine)
        .arg(&sample)
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["unknown_words"], 3);
    assert_eq!(json["files"][0]["counts"]["teh"], 2);
    assert_eq!(json["files"][0]["counts"]["quick"], 1);
    assert_eq!(json["files"][0]["fails"][0]["line"], 1);
    assert_eq!(json["files"][0]["fails"][1]["line"], 2);
}

#[test]
fn test_directory_argument_scans_source_files_beneath_it() {
    let dir = TempDir::new().unwrap();
    let engine = write_fake_engine(&dir);
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("lib.rs"), "// teh\n").unwrap();
    // not a recognized source file, so the walk skips it
    fs::write(src.join("notes.txt"), "// wrod\n").unwrap();

    Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("--no-color")
        .arg("--engine")
        .arg(&engine)
        .arg(&src)
        .assert()
        .failure()
        .stdout(predicate::str::contains("line    1: teh"))
        .stdout(predicate::str::contains("wrod").not())
        .stdout(predicate::str::contains("✗ 1 unknown word found in 1 file"));
}

#[test]
fn test_missing_engine_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let sample = write_sample(&dir);

    Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("--engine")
        .arg("no-such-engine-on-this-host")
        .arg(&sample)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no spell engine found"));
}

#[test]
fn test_clean_file_reports_nothing() {
    let dir = TempDir::new().unwrap();
    let sample = dir.path().join("clean.rs");
    fs::write(&sample, "fn main() {}\n").unwrap();

    // a file with no comments never needs the engine, so even a broken
    // override scans cleanly
    let silent = dir.path().join("silent-spell");
    fs::write(&silent, "#!/bin/sh\nexit 0\n").unwrap();
    let mut perms = fs::metadata(&silent).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&silent, perms).unwrap();

    Command::cargo_bin("cmtspell")
        .unwrap()
        .current_dir(dir.path())
        .arg("--no-color")
        .arg("--engine")
        .arg(&silent)
        .arg(&sample)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ No unknown words found!"));
}
