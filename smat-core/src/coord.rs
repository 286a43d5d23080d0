//! Coordinate key for sparse storage

/// A `(row, col)` position in a matrix
///
/// Equality, hashing and ordering are structural: rows compare first,
/// then columns, so sorting coordinates yields row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate falls inside a `rows x cols` matrix
    pub const fn within(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}
