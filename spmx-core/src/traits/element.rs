//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Element types a sparse matrix can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DataType {
    I32 = 0,
    I64 = 1,
    I128 = 2,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::I128 => write!(f, "i128"),
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Zero suppression compares against [`MatrixElement::ZERO`], and all
/// arithmetic is checked so overflow surfaces as an error instead of
/// wrapping. Values must round-trip through `Display`/`FromStr` for the
/// text encoding.
pub trait MatrixElement: Copy + PartialEq + Debug + Display + FromStr {
    /// The additive identity; never stored
    const ZERO: Self;

    /// Accumulator for sums of products; `i128` accumulates in itself
    type Wide: MatrixElement;

    /// Get the DataType representation for this element type
    fn data_type() -> DataType;

    fn widen(self) -> Self::Wide;

    /// `None` when `wide` does not fit in `Self`
    fn narrow(wide: Self::Wide) -> Option<Self>;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $dt:ident => $wide:ty),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                type Wide = $wide;

                fn data_type() -> DataType {
                    DataType::$dt
                }

                fn widen(self) -> $wide {
                    <$wide>::from(self)
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element!(i32 => I32 => i64, i64 => I64 => i128, i128 => I128 => i128);
