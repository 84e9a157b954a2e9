//! Error types for sparse matrix decoding and arithmetic

use crate::Coord;

/// Structural violations of the text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// First line does not start with `rows=`
    MissingRows,
    /// Second line does not start with `cols=`
    MissingCols,
    /// A declaration value is not a non-negative integer
    InvalidDimension { line: usize },
    /// Element line is not wrapped in `(` and `)`
    NotEnclosed { line: usize },
    /// Element line does not hold exactly three comma-separated fields
    WrongFieldCount { line: usize, found: usize },
    /// An element field is not an integer
    NonInteger { line: usize },
    /// Element coordinate falls outside the declared dimensions; indices
    /// beyond the `i128` range are reported as `i128::MIN`/`i128::MAX`
    OutOfBounds { line: usize, row: i128, col: i128 },
}

impl FormatError {
    /// Short, stable description of the violated rule
    pub const fn cause(&self) -> &'static str {
        match self {
            FormatError::MissingRows => "missing rows declaration",
            FormatError::MissingCols => "missing cols declaration",
            FormatError::InvalidDimension { .. } => "invalid dimension",
            FormatError::NotEnclosed { .. } => "element not enclosed",
            FormatError::WrongFieldCount { .. } => "wrong field count",
            FormatError::NonInteger { .. } => "non-integer field",
            FormatError::OutOfBounds { .. } => "coordinate out of bounds",
        }
    }

    /// 1-based line number the error was detected on
    pub const fn line(&self) -> usize {
        match self {
            FormatError::MissingRows => 1,
            FormatError::MissingCols => 2,
            FormatError::InvalidDimension { line }
            | FormatError::NotEnclosed { line }
            | FormatError::WrongFieldCount { line, .. }
            | FormatError::NonInteger { line }
            | FormatError::OutOfBounds { line, .. } => *line,
        }
    }

    /// Offending coordinate, for bounds violations
    pub const fn coordinate(&self) -> Option<(i128, i128)> {
        match self {
            FormatError::OutOfBounds { row, col, .. } => Some((*row, *col)),
            _ => None,
        }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::MissingRows | FormatError::MissingCols => {
                write!(f, "{} (line {})", self.cause(), self.line())
            }
            FormatError::WrongFieldCount { line, found } => {
                write!(f, "{} on line {line}: expected 3, found {found}", self.cause())
            }
            FormatError::OutOfBounds { line, row, col } => {
                write!(f, "{} on line {line}: element ({row}, {col})", self.cause())
            }
            _ => write!(f, "{} on line {}", self.cause(), self.line()),
        }
    }
}

impl core::error::Error for FormatError {}

/// Operand shapes that cannot be combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub operation: &'static str,
    pub left: (usize, usize),
    pub right: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "matrix dimensions do not match for {}: {}x{} and {}x{}",
            self.operation, self.left.0, self.left.1, self.right.0, self.right.1
        )
    }
}

/// Errors raised by the sparse matrix core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmxError {
    /// Malformed encoded matrix
    Format(FormatError),
    /// Incompatible operand shapes
    DimensionMismatch(DimensionMismatch),
    /// Element arithmetic left the range of the element type
    ArithmeticOverflow(Coord),
    /// Operation selector is not one of the recognised options
    UnknownOperation,
}

impl core::fmt::Display for SpmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmxError::Format(e) => write!(f, "format error: {e}"),
            SpmxError::DimensionMismatch(e) => write!(f, "{e}"),
            SpmxError::ArithmeticOverflow(at) => {
                write!(f, "arithmetic overflow at ({}, {})", at.row, at.col)
            }
            SpmxError::UnknownOperation => write!(f, "unknown operation selector"),
        }
    }
}

impl core::error::Error for SpmxError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SpmxError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormatError> for SpmxError {
    fn from(e: FormatError) -> Self {
        SpmxError::Format(e)
    }
}

impl From<DimensionMismatch> for SpmxError {
    fn from(e: DimensionMismatch) -> Self {
        SpmxError::DimensionMismatch(e)
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, SpmxError>;
