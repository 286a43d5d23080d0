//! Coordinate-keyed sparse matrix
//!
//! Only non-zero values are stored. Reads outside the declared dimensions
//! return zero, and writes are not bounds-checked; `check_bounds` is the
//! opt-in validation for callers that want it.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::coord::Coord;
use crate::traits::MatrixElement;
use crate::validation::validate_coord;
use crate::Result;

/// Sparse matrix of signed integers keyed by coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T: MatrixElement = i32> {
    rows: usize,
    cols: usize,
    entries: HashMap<Coord, T>,
}

impl<T: MatrixElement> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// A 0x0 placeholder with no entries
    pub fn empty() -> Self {
        Self::with_dimensions(0, 0)
    }

    /// An all-zero matrix with the given dimensions
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Triplets go through [`SparseMatrix::set`], so zeros are dropped and
    /// later duplicates overwrite earlier ones.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::with_dimensions(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, or zero when nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> T {
        self.get_at(Coord::new(row, col))
    }

    pub fn get_at(&self, coord: Coord) -> T {
        self.entries.get(&coord).copied().unwrap_or(T::ZERO)
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&Coord::new(row, col))
    }

    /// Store `value` at `(row, col)`; a zero removes the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.set_at(Coord::new(row, col), value);
    }

    pub fn set_at(&mut self, coord: Coord, value: T) {
        if value.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
    }

    /// Stored entries in storage (unspecified) order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<(Coord, T)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(coord, _)| coord);
        entries
    }

    /// Check that every stored coordinate lies inside the declared dimensions
    ///
    /// Reports the first offender in row-major order.
    pub fn check_bounds(&self) -> Result<()> {
        match self
            .entries
            .keys()
            .filter(|coord| !coord.within(self.rows, self.cols))
            .min()
        {
            None => Ok(()),
            Some(&first) => validate_coord(first, self.rows, self.cols),
        }
    }
}
