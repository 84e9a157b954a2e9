//! Parser for the text encoding
//!
//! Pure string-to-matrix decoding with no I/O dependencies. Every rule
//! violation maps to exactly one [`FormatError`] variant; nothing is
//! silently repaired.

use super::constants::{
    COLS_PREFIX, ELEMENT_CLOSE, ELEMENT_OPEN, FIELD_COUNT, FIELD_SEPARATOR, ROWS_PREFIX,
};
use crate::error::FormatError;
use crate::store::Matrix;
use crate::traits::MatrixElement;

/// Decode a matrix from its text encoding
///
/// Line 1 must declare `rows=`, line 2 `cols=`; each following non-blank
/// line is one `(row, col, value)` element. Later elements overwrite
/// earlier ones at the same coordinate.
pub fn decode<T: MatrixElement>(text: &str) -> Result<Matrix<T>, FormatError> {
    let mut lines = text.lines().map(str::trim);

    let rows = parse_declaration(lines.next(), ROWS_PREFIX, 1)
        .ok_or(FormatError::MissingRows)??;
    let cols = parse_declaration(lines.next(), COLS_PREFIX, 2)
        .ok_or(FormatError::MissingCols)??;

    let mut matrix = Matrix::new(rows, cols);
    for (offset, line) in lines.enumerate() {
        if line.is_empty() {
            continue;
        }
        let (row, col, value) = parse_element::<T>(line, offset + 3, rows, cols)?;
        matrix.set(row, col, value);
    }

    Ok(matrix)
}

/// Parse `<prefix><non-negative integer>`
///
/// Returns `None` when the line is absent or lacks the prefix so the
/// caller can pick the matching missing-declaration error.
fn parse_declaration(
    line: Option<&str>,
    prefix: &str,
    line_no: usize,
) -> Option<Result<usize, FormatError>> {
    let value = line?.strip_prefix(prefix)?;
    Some(
        value
            .trim()
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidDimension { line: line_no }),
    )
}

/// Parse one trimmed, non-blank element line into an in-bounds triplet
fn parse_element<T: MatrixElement>(
    line: &str,
    line_no: usize,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize, T), FormatError> {
    let inner = line
        .strip_prefix(ELEMENT_OPEN)
        .and_then(|rest| rest.strip_suffix(ELEMENT_CLOSE))
        .ok_or(FormatError::NotEnclosed { line: line_no })?;

    let found = inner.split(FIELD_SEPARATOR).count();
    if found != FIELD_COUNT {
        return Err(FormatError::WrongFieldCount { line: line_no, found });
    }

    let mut fields = inner.split(FIELD_SEPARATOR).map(str::trim);
    let non_integer = FormatError::NonInteger { line: line_no };
    let (Some(row), Some(col), Some(value)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(FormatError::WrongFieldCount { line: line_no, found });
    };
    let row = parse_index(row).ok_or(non_integer)?;
    let col = parse_index(col).ok_or(non_integer)?;
    let value = value.parse::<T>().map_err(|_| non_integer)?;

    let in_bounds = |index: i128, limit: usize| usize::try_from(index).ok().filter(|&i| i < limit);
    match (in_bounds(row, rows), in_bounds(col, cols)) {
        (Some(row), Some(col)) => Ok((row, col, value)),
        _ => Err(FormatError::OutOfBounds { line: line_no, row, col }),
    }
}

/// Parse a row or column index
///
/// Integers beyond the `i128` range are still integers and can never be in
/// bounds, so they saturate instead of failing.
fn parse_index(field: &str) -> Option<i128> {
    if let Ok(index) = field.parse::<i128>() {
        return Some(index);
    }
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i128::MIN } else { i128::MAX })
}
