//! Exit status and stderr of the `spmx` binary
#![cfg(feature = "cli")]

use std::process::Command;

use tempfile::tempdir;

#[test]
fn unknown_operation_fails_once_without_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out").join("result.txt");

    let run = Command::new(env!("CARGO_BIN_EXE_spmx"))
        .args(["compute", "/nonexistent/a.txt", "/nonexistent/b.txt", "--op", "9"])
        .arg("--output")
        .arg(&out)
        .env_remove("RUST_LOG")
        .env_remove("SPMX_LOG")
        .output()
        .unwrap();

    assert!(!run.status.success());
    let stderr = String::from_utf8(run.stderr).unwrap();
    assert_eq!(stderr.matches("unknown operation selector").count(), 1);
    assert!(!out.parent().unwrap().exists());
}

#[test]
fn check_reports_format_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "rows=2\ncols=2\n(5, 0, 1)\n").unwrap();

    let run = Command::new(env!("CARGO_BIN_EXE_spmx"))
        .arg("check")
        .arg(&path)
        .env_remove("RUST_LOG")
        .env_remove("SPMX_LOG")
        .output()
        .unwrap();

    assert!(!run.status.success());
    let stderr = String::from_utf8(run.stderr).unwrap();
    assert!(stderr.starts_with("Error: invalid matrix file"));
    assert_eq!(stderr.lines().count(), 1);
}
