//! Text encoding and decoding of sparse matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Decoding is line-at-a-time so the I/O layer can stream a file through
//! [`MatrixDecoder`] without buffering it whole.

use core::fmt;

use super::constants::{COLS_KEY, HEADER_LINES, ROWS_KEY};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{parse_entry_line, parse_header_line};
use crate::{MatrixError, Result};

/// Order in which entry lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryOrder {
    /// Sorted by row, then column
    #[default]
    RowMajor,
    /// Whatever order the backing map iterates in
    Storage,
}

/// Writes a matrix in text form through `Display`
pub struct TextEncoder<'a, T: MatrixElement> {
    matrix: &'a SparseMatrix<T>,
    order: EntryOrder,
}

impl<'a, T: MatrixElement> TextEncoder<'a, T> {
    pub fn new(matrix: &'a SparseMatrix<T>, order: EntryOrder) -> Self {
        Self { matrix, order }
    }
}

fn write_entry<T: MatrixElement>(
    f: &mut fmt::Formatter<'_>,
    row: usize,
    col: usize,
    value: T,
) -> fmt::Result {
    writeln!(f, "({row}, {col}, {value})")
}

impl<T: MatrixElement> fmt::Display for TextEncoder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ROWS_KEY}={}", self.matrix.rows())?;
        writeln!(f, "{COLS_KEY}={}", self.matrix.cols())?;
        match self.order {
            EntryOrder::RowMajor => {
                for (coord, value) in self.matrix.sorted_entries() {
                    write_entry(f, coord.row, coord.col, value)?;
                }
            }
            EntryOrder::Storage => {
                for (coord, value) in self.matrix.iter() {
                    write_entry(f, coord.row, coord.col, value)?;
                }
            }
        }
        Ok(())
    }
}

/// Incremental decoder fed one line at a time
///
/// The first two lines must be the `rows=` and `cols=` header; every later
/// non-blank line is an entry. Zero values are dropped on insert.
#[derive(Debug)]
pub struct MatrixDecoder<T: MatrixElement> {
    line_no: usize,
    rows: Option<usize>,
    matrix: Option<SparseMatrix<T>>,
}

impl<T: MatrixElement> Default for MatrixDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement> MatrixDecoder<T> {
    pub fn new() -> Self {
        Self {
            line_no: 0,
            rows: None,
            matrix: None,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Consume the next line of input (without its line terminator)
    pub fn process_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;
        let line_no = self.line_no;

        if let Some(matrix) = self.matrix.as_mut() {
            if line.trim().is_empty() {
                return Ok(());
            }
            let (row, col, value) = parse_entry_line::<T>(line, line_no)?;
            matrix.set(row, col, value);
            return Ok(());
        }

        match self.rows {
            None => self.rows = Some(parse_header_line(line, ROWS_KEY, line_no)?),
            Some(rows) => {
                let cols = parse_header_line(line, COLS_KEY, line_no)?;
                self.matrix = Some(SparseMatrix::with_dimensions(rows, cols));
            }
        }
        Ok(())
    }

    /// Finish decoding; fails if the header was never completed
    pub fn finalize(self) -> Result<SparseMatrix<T>> {
        let missing_line = self.line_no.min(HEADER_LINES) + 1;
        self.matrix.ok_or(MatrixError::Format { line: missing_line })
    }
}

/// Decode a whole text matrix held in memory
pub fn parse_matrix<T: MatrixElement>(input: &str) -> Result<SparseMatrix<T>> {
    let mut decoder = MatrixDecoder::new();
    for line in input.lines() {
        decoder.process_line(line)?;
    }
    decoder.finalize()
}
