//! Text encoding for sparse matrices
//!
//! The encoding is line oriented:
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are skipped among element lines, surrounding whitespace is
//! tolerated on read, and duplicate coordinates resolve last-write-wins.
//! Elements are written in the store's insertion order.

pub mod constants;
pub mod grammar;
pub mod writer;

pub use grammar::decode;
pub use writer::{encode, encode_to};
