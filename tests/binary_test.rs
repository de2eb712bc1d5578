//! End-to-end runs of the go-include binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn go_include() -> Command {
    let mut cmd = Command::cargo_bin("go-include").unwrap();
    cmd.env_remove("GOPACKAGE");
    cmd
}

#[test]
fn test_stdin_to_stdout() {
    go_include()
        .write_stdin("hello`world")
        .assert()
        .success()
        .stdout(predicate::str::contains("package main\n"))
        .stdout(predicate::str::contains(
            "const Stdin = `hello` + \"`\" + `world`\n",
        ));
}

#[test]
fn test_files_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("res")).unwrap();
    fs::write(temp_dir.path().join("res/gopher.png"), [0u8, 1, 2]).unwrap();

    go_include()
        .current_dir(temp_dir.path())
        .env("GOPACKAGE", "assets")
        .args(["-o", "res", "-t", "bin", "--with-dir", "res/*.png"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let generated = fs::read_to_string(temp_dir.path().join("res.go")).unwrap();
    assert!(generated.contains("package assets\n"));
    assert!(generated.contains("// Res_gopher was sourced from bin file res/gopher.png\n"));
    assert!(generated.contains("const Res_gopher = `AAEC`\n"));
}

#[test]
fn test_unmatched_pattern_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

    go_include()
        .current_dir(temp_dir.path())
        .args(["*.png", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("const A = `a`"))
        .stderr(predicate::str::contains("Found no files matching '*.png'."));
}

#[test]
fn test_no_files_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    go_include()
        .current_dir(temp_dir.path())
        .args(["-o", "res", "*.png", "*.jpg"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "include: error: Found no files matching glob(s) *.png *.jpg.",
        ));

    assert!(!temp_dir.path().join("res.go").exists());
}

#[test]
fn test_invalid_type_is_usage_error() {
    go_include()
        .args(["-t", "yaml", "a.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'yaml'"));
}
