#![no_std]

//! SPMX Core - Dictionary-of-keys sparse integer matrices
//!
//! This crate provides the sparse store, the line-oriented text encoding and
//! element-wise/matrix arithmetic. It performs no I/O; see the `spmx` crate
//! for file access and the command line surface.

extern crate alloc;

pub mod error;
pub mod format;
pub mod ops;
pub mod store;
pub mod traits;

pub use error::*;
pub use format::{decode, encode, encode_to};
pub use ops::{add, multiply, subtract, Operation};
pub use store::{Coord, Matrix};
pub use traits::*;
