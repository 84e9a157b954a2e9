//! Load two matrices, combine them, write the result

use std::io::{BufRead, Write};
use std::path::Path;

use spmx_core::{Matrix, MatrixElement, Operation, SpmxError};
use tracing::info;

use crate::error::{Error, Result};
use crate::file_io::MatrixFile;

/// Apply `op` to the matrices stored at `left` and `right`
///
/// The result is written to `output`, creating its parent directory when
/// missing. Inputs are loaded in order and nothing is written unless both
/// inputs decode and the operation succeeds.
pub fn compute_files<T: MatrixElement>(
    op: Operation,
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<Matrix<T>> {
    let a = MatrixFile::read::<T, _>(left.as_ref())?;
    let b = MatrixFile::read::<T, _>(right.as_ref())?;

    let result = op.apply(&a, &b)?;
    info!(
        operation = %op,
        rows = result.rows(),
        cols = result.cols(),
        nnz = result.nnz(),
        "{op} done"
    );

    MatrixFile::write_creating_dirs(output.as_ref(), &result)?;
    info!(path = %output.as_ref().display(), "result written");
    Ok(result)
}

/// Resolve `selector`, then compute as [`compute_files`] does
///
/// An unknown selector fails before either input is opened.
pub fn run<T: MatrixElement>(
    selector: &str,
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<Matrix<T>> {
    let op: Operation = selector.parse()?;
    compute_files(op, left, right, output)
}

/// Print the operation menu to `output` and read one choice from `input`
///
/// Only the numeric selectors shown in the menu are accepted.
pub fn prompt_operation<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Operation> {
    let out_err = |e| Error::io("<stdout>", e);

    writeln!(output, "\nChoose an operation:").map_err(out_err)?;
    for op in Operation::ALL {
        writeln!(output, "{}. {} ({})", op.selector(), capitalize(op.name()), op.symbol())
            .map_err(out_err)?;
    }
    write!(output, "Enter your choice (1/2/3): ").map_err(out_err)?;
    output.flush().map_err(out_err)?;

    let mut choice = String::new();
    input
        .read_line(&mut choice)
        .map_err(|e| Error::io("<stdin>", e))?;
    choice
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| Operation::ALL.into_iter().find(|op| op.selector() == n))
        .ok_or(Error::Matrix(SpmxError::UnknownOperation))
}

/// `"addition"` -> `"Addition"`
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
