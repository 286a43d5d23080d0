//! Line parsers for the text matrix format
//!
//! Pure functions over single lines with no I/O. Line numbers are 1-based
//! and only used to label errors.

use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, HEADER_SEPARATOR};
use crate::traits::MatrixElement;
use crate::MatrixError;

/// Parse a header line of the form `<key>=<integer>`
///
/// The key must match exactly; anything else is a format error. The value
/// must be a non-negative base-10 integer; see [`parse_index`] for how a
/// bad value is classified.
pub fn parse_header_line(line: &str, key: &str, line_no: usize) -> Result<usize, MatrixError> {
    let (found_key, value) = line
        .trim()
        .split_once(HEADER_SEPARATOR)
        .ok_or(MatrixError::Format { line: line_no })?;

    if found_key != key {
        return Err(MatrixError::Format { line: line_no });
    }

    parse_index(value.trim(), line_no)
}

/// Parse a dimension or coordinate token
///
/// A negative integer is well-formed but is not an index, so it is a format
/// error. A token that is not an integer at all is a parse error.
pub fn parse_index(token: &str, line_no: usize) -> Result<usize, MatrixError> {
    match token.parse::<usize>() {
        Ok(index) => Ok(index),
        Err(_) => match token.parse::<i64>() {
            Ok(0) => Ok(0),
            Ok(_) => Err(MatrixError::Format { line: line_no }),
            Err(_) => Err(MatrixError::Parse { line: line_no }),
        },
    }
}

/// Parse an entry line of the form `(<row>, <col>, <value>)`
///
/// Surrounding whitespace on the line and on each token is ignored. Empty
/// trailing tokens are dropped before counting, so `(1,1,)` has two tokens
/// and is a format error while `(1, 1, )` has a blank third token and is a
/// parse error. The caller skips blank lines before calling this.
pub fn parse_entry_line<T: MatrixElement>(
    line: &str,
    line_no: usize,
) -> Result<(usize, usize, T), MatrixError> {
    let format_err = MatrixError::Format { line: line_no };
    let parse_err = MatrixError::Parse { line: line_no };

    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(format_err)?;

    let mut tokens = inner
        .trim_end_matches(ENTRY_SEPARATOR)
        .split(ENTRY_SEPARATOR)
        .map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(format_err);
    };

    let row = parse_index(row, line_no)?;
    let col = parse_index(col, line_no)?;
    let value = value.parse::<T>().map_err(|_| parse_err)?;

    Ok((row, col, value))
}
