//! Literal tokens of the text encoding

/// Prefix of the first line, followed by the row count
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of the second line, followed by the column count
pub const COLS_PREFIX: &str = "cols=";

/// Opens an element line
pub const ELEMENT_OPEN: char = '(';

/// Closes an element line
pub const ELEMENT_CLOSE: char = ')';

/// Separates the row, column and value fields
pub const FIELD_SEPARATOR: char = ',';

/// Fields per element line: row, column, value
pub const FIELD_COUNT: usize = 3;
