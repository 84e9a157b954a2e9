//! Matrix arithmetic
//!
//! Addition, subtraction and multiplication are pure: operands are only
//! read and every call builds a fresh result. Shapes are checked before any
//! work starts, so a failed call never yields a partial result.

use alloc::vec::Vec;
use core::str::FromStr;
use hashbrown::HashMap;

use crate::error::{DimensionMismatch, Result, SpmxError};
use crate::store::{Coord, Matrix};
use crate::traits::MatrixElement;

/// Element-wise sum of two equally shaped matrices
pub fn add<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    combine(a, b, Operation::Addition, T::checked_add)
}

/// Element-wise difference `a - b` of two equally shaped matrices
pub fn subtract<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    combine(a, b, Operation::Subtraction, T::checked_sub)
}

/// Matrix product `a * b`, shaped `a.rows() x b.cols()`
///
/// Only non-zero elements of `a` are visited. `b` is indexed by row with
/// columns ascending, so for each element `(r, k)` of `a` the result
/// coordinates `(r, j)` are updated in the same order as a scan over every
/// column of `b` would, while skipping the zero columns.
///
/// Sums of products accumulate in `T::Wide` and are narrowed once at the
/// end, so only a final value outside `T` is an overflow.
pub fn multiply<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(mismatch(Operation::Multiplication, a, b));
    }

    let b_rows = row_index(b);
    let mut sums: Matrix<T::Wide> = Matrix::new(a.rows(), b.cols());

    for (Coord { row, col: k }, a_value) in a.iter() {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };
        for &(j, b_value) in b_row {
            let overflow = SpmxError::ArithmeticOverflow(Coord::new(row, j));
            let sum = a_value
                .widen()
                .checked_mul(b_value.widen())
                .and_then(|product| sums.get(row, j).checked_add(product))
                .ok_or(overflow)?;
            sums.set(row, j, sum);
        }
    }

    let mut result: Matrix<T> = Matrix::new(a.rows(), b.cols());
    for (coord, sum) in sums.iter() {
        let value = T::narrow(sum).ok_or(SpmxError::ArithmeticOverflow(coord))?;
        result.set(coord.row, coord.col, value);
    }
    Ok(result)
}

/// Seed the result with a copy of `a`, then fold every element of `b` in
fn combine<T, F>(a: &Matrix<T>, b: &Matrix<T>, op: Operation, f: F) -> Result<Matrix<T>>
where
    T: MatrixElement,
    F: Fn(T, T) -> Option<T>,
{
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(mismatch(op, a, b));
    }

    let mut result = a.clone();
    for (coord, value) in b.iter() {
        let combined = f(result.get(coord.row, coord.col), value)
            .ok_or(SpmxError::ArithmeticOverflow(coord))?;
        result.set(coord.row, coord.col, combined);
    }
    Ok(result)
}

/// Group the elements of `m` by row, each row sorted by column
fn row_index<T: MatrixElement>(m: &Matrix<T>) -> HashMap<usize, Vec<(usize, T)>> {
    let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (coord, value) in m.iter() {
        rows.entry(coord.row).or_default().push((coord.col, value));
    }
    for row in rows.values_mut() {
        row.sort_unstable_by_key(|&(col, _)| col);
    }
    rows
}

fn mismatch<T: MatrixElement>(op: Operation, a: &Matrix<T>, b: &Matrix<T>) -> SpmxError {
    SpmxError::DimensionMismatch(DimensionMismatch {
        operation: op.name(),
        left: (a.rows(), a.cols()),
        right: (b.rows(), b.cols()),
    })
}

/// The three supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Apply the operation to `a` and `b`
    pub fn apply<T: MatrixElement>(self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        match self {
            Operation::Addition => add(a, b),
            Operation::Subtraction => subtract(a, b),
            Operation::Multiplication => multiply(a, b),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '*',
        }
    }

    /// Menu number, starting at 1
    pub const fn selector(self) -> u8 {
        match self {
            Operation::Addition => 1,
            Operation::Subtraction => 2,
            Operation::Multiplication => 3,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the menu number, the symbol or the (short) name, ignoring case
impl FromStr for Operation {
    type Err = SpmxError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                let short = &op.name()[..3];
                s.eq_ignore_ascii_case(op.name())
                    || s.eq_ignore_ascii_case(short)
                    || s.parse::<u8>() == Ok(op.selector())
                    || s.chars().eq([op.symbol()])
            })
            .ok_or(SpmxError::UnknownOperation)
    }
}
