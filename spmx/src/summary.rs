//! Human and machine readable matrix overview

use std::fmt;

use spmx_core::{DataType, Matrix, MatrixElement};

/// Shape and fill statistics of a matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    /// `nnz / (rows * cols)`, zero for empty shapes
    pub density: f64,
    pub data_type: DataType,
}

impl MatrixSummary {
    pub fn of<T: MatrixElement>(matrix: &Matrix<T>) -> Self {
        let cells = (matrix.rows() as f64) * (matrix.cols() as f64);
        let density = if cells > 0.0 {
            matrix.nnz() as f64 / cells
        } else {
            0.0
        };
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            nnz: matrix.nnz(),
            density,
            data_type: T::data_type(),
        }
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for MatrixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimensions: {} x {}", self.rows, self.cols)?;
        writeln!(f, "Non-zero elements: {}", self.nnz)?;
        writeln!(f, "Density: {:.6}", self.density)?;
        write!(f, "Element type: {}", self.data_type)
    }
}
