//! Abstract interfaces over sparse matrices and their elements

pub mod element;
pub mod matrix;

pub use element::{DataType, MatrixElement};
pub use matrix::{MatrixOperations, SparseMatrix};
