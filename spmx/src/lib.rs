//! SPMX - Sparse integer matrix files
//!
//! This library loads and saves dictionary-of-keys sparse matrices in their
//! line-oriented text encoding and combines them with the arithmetic from
//! `spmx-core`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmx::{compute_files, MatrixFile, Operation};
//!
//! fn example() -> spmx::Result<()> {
//!     let a: spmx::Matrix = MatrixFile::read("a.txt")?;
//!     let b: spmx::Matrix = MatrixFile::read("b.txt")?;
//!     let sum = spmx::add(&a, &b)?;
//!     MatrixFile::write("sum.txt", &sum)?;
//!
//!     // Or in one step, creating the output directory
//!     compute_files::<i64>(Operation::Multiplication, "a.txt", "b.txt", "output/output.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmx_core::{
    // Store and traits
    Coord, DataType, Matrix, MatrixElement, MatrixOperations, SparseMatrix,
    // Codec and arithmetic
    add, decode, encode, encode_to, multiply, subtract, Operation,
    // Core errors
    DimensionMismatch, FormatError, SpmxError,
};

pub mod compute;
pub mod config;
pub mod error;
pub mod file_io;
pub mod summary;

pub use compute::{compute_files, prompt_operation, run};
pub use config::Config;
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use summary::MatrixSummary;
