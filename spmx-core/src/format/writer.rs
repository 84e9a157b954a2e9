//! Serializer for the text encoding

use alloc::string::String;
use core::fmt::Write;

use super::constants::{COLS_PREFIX, ROWS_PREFIX};
use crate::store::Matrix;
use crate::traits::MatrixElement;

/// Write the text encoding of `matrix` into `out`
///
/// Emits the two declarations followed by one `(row, col, value)` line per
/// stored element in insertion order. No blank lines are written.
pub fn encode_to<T: MatrixElement, W: Write>(matrix: &Matrix<T>, out: &mut W) -> core::fmt::Result {
    writeln!(out, "{ROWS_PREFIX}{}", matrix.rows())?;
    writeln!(out, "{COLS_PREFIX}{}", matrix.cols())?;
    for (coord, value) in matrix.iter() {
        writeln!(out, "({}, {}, {value})", coord.row, coord.col)?;
    }
    Ok(())
}

/// Encode `matrix` into a new string
pub fn encode<T: MatrixElement>(matrix: &Matrix<T>) -> String {
    let mut out = String::with_capacity(16 + matrix.nnz() * 16);
    // Writing into a String cannot fail
    let _ = encode_to(matrix, &mut out);
    out
}
