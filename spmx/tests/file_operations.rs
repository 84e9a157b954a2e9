//! End-to-end tests over real files

use std::fs;
use std::path::Path;

use spmx::{compute_files, Error, FormatError, Matrix, MatrixFile, Operation, SpmxError};
use tempfile::{tempdir, TempDir};

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn read_text(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn multiply_example_files() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n");
    let b = write(&dir, "b.txt", "rows=2\ncols=2\n(0, 0, 3)\n(1, 0, 4)\n");
    let out = dir.path().join("output").join("output.txt");

    let result: Matrix = compute_files(Operation::Multiplication, &a, &b, &out).unwrap();
    assert_eq!(result.get(0, 0), 11);
    assert_eq!(read_text(&out), "rows=2\ncols=2\n(0, 0, 11)\n");
}

#[test]
fn addition_output_follows_insertion_order() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "rows=3\ncols=3\n(2, 2, 1)\n\n(0, 0, 5)\n");
    let b = write(&dir, "b.txt", "rows=3\ncols=3\n(0, 0, -5)\n(1, 2, 7)\n(2, 2, 1)\n");
    let out = dir.path().join("sum.txt");

    compute_files::<i64>(Operation::Addition, &a, &b, &out).unwrap();
    // (0, 0) cancels out and disappears; (1, 2) is appended
    assert_eq!(read_text(&out), "rows=3\ncols=3\n(2, 2, 2)\n(1, 2, 7)\n");
}

#[test]
fn subtraction_of_identical_files_is_empty() {
    let dir = tempdir().unwrap();
    let text = "rows=4\ncols=5\n(3, 4, 9)\n(0, 1, -2)\n";
    let a = write(&dir, "a.txt", text);
    let b = write(&dir, "b.txt", text);
    let out = dir.path().join("diff.txt");

    compute_files::<i64>(Operation::Subtraction, &a, &b, &out).unwrap();
    assert_eq!(read_text(&out), "rows=4\ncols=5\n");
}

#[test]
fn out_of_bounds_element_names_file_and_coordinate() {
    let dir = tempdir().unwrap();
    let bad = write(&dir, "bad.txt", "rows=2\ncols=2\n(2, 0, 5)\n");

    let err = MatrixFile::read::<i64, _>(&bad).unwrap_err();
    match &err {
        Error::Format { path, source } => {
            assert_eq!(path, &bad);
            assert_eq!(source.coordinate(), Some((2, 0)));
        }
        other => panic!("expected format error, got {other:?}"),
    }
    assert!(err.to_string().contains("(2, 0)"));
}

#[test]
fn second_operand_errors_surface_unchanged() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "rows=1\ncols=1\n");
    let b = write(&dir, "b.txt", "rows=1\ncols=1\n(0 0 1)\n");
    let out = dir.path().join("out.txt");

    let err = compute_files::<i64>(Operation::Addition, &a, &b, &out).unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            source: FormatError::WrongFieldCount { line: 3, found: 1 },
            ..
        }
    ));
    assert!(!out.exists());
}

#[test]
fn missing_input_is_io_not_format() {
    let dir = tempdir().unwrap();
    let a = write(&dir, "a.txt", "rows=1\ncols=1\n");
    let missing = dir.path().join("nope.txt");
    let out = dir.path().join("out.txt");

    let err = compute_files::<i64>(Operation::Addition, &a, &missing, &out).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if path == &missing));
}

#[test]
fn unknown_selector_rejected() {
    assert_eq!(
        "5".parse::<Operation>(),
        Err(SpmxError::UnknownOperation)
    );
}

#[test]
fn round_trip_through_disk_is_byte_identical() {
    let dir = tempdir().unwrap();
    let text = "rows=6\ncols=6\n(5, 5, 1)\n(0, 3, -12)\n(2, 1, 400)\n";
    let src = write(&dir, "src.txt", text);
    let dst = dir.path().join("dst.txt");

    let m: Matrix = MatrixFile::read(&src).unwrap();
    MatrixFile::write(&dst, &m).unwrap();
    assert_eq!(read_text(&dst), text);
}
