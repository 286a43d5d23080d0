//! Format constants for the text matrix representation

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separates a header key from its value
pub const HEADER_SEPARATOR: char = '=';

/// Entry lines are wrapped in parentheses
pub const ENTRY_OPEN: char = '(';
pub const ENTRY_CLOSE: char = ')';

/// Separates the row, column and value tokens of an entry line
pub const ENTRY_SEPARATOR: char = ',';

/// Number of header lines before the first entry
pub const HEADER_LINES: usize = 2;

/// File extension used for text matrices
pub const TEXT_EXTENSION: &str = "txt";

/// File extension used for JSON matrices
pub const JSON_EXTENSION: &str = "json";
