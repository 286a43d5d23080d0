//! Sparse arithmetic
//!
//! Every operation checks its dimension precondition before allocating the
//! result, walks only stored entries, and returns a fresh accumulator.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::coord::Coord;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::{MatrixError, Result};

/// Binary operation offered to hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Run the operation on `left` and `right`
    pub fn apply<T: MatrixElement>(
        self,
        left: &SparseMatrix<T>,
        right: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
        }
    }

    /// Capitalized name, e.g. "Addition"
    pub const fn title(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// Lowercase noun used in messages, e.g. "addition"
    pub const fn verb(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Conventional stem of the file a host writes the result to
    pub const fn result_stem(self) -> &'static str {
        match self {
            Operation::Add => "sum",
            Operation::Subtract => "difference",
            Operation::Multiply => "product",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.verb())
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    fn require_same_dimensions(&self, other: &Self, operation: Operation) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Two-pass element-wise merge
    ///
    /// Coordinates stored in `self` get `both(a, other.get(c))`; coordinates
    /// stored only in `other` get `only_right(b)`.
    fn merge_with(
        &self,
        other: &Self,
        both: impl Fn(T, T) -> T,
        only_right: impl Fn(T) -> T,
    ) -> Self {
        let mut result = Self::with_dimensions(self.rows(), self.cols());
        for (coord, value) in self.iter() {
            result.set_at(coord, both(value, other.get_at(coord)));
        }
        for (coord, value) in other.iter() {
            if !self.contains(coord.row, coord.col) {
                result.set_at(coord, only_right(value));
            }
        }
        result
    }

    /// Element-wise sum; both operands must have identical dimensions
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_dimensions(other, Operation::Add)?;
        Ok(self.merge_with(other, T::wrapping_add, |b| b))
    }

    /// Element-wise difference; both operands must have identical dimensions
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.require_same_dimensions(other, Operation::Subtract)?;
        Ok(self.merge_with(other, T::wrapping_sub, T::wrapping_neg))
    }

    /// Matrix product `self * other`; requires `self.cols() == other.rows()`
    ///
    /// Each stored `(r, k) -> a` of `self` is combined with the stored
    /// `(k, c) -> b` of `other` for `c < other.cols()`, accumulating `a * b`
    /// into `(r, c)` through `get`/`set`. `other` is indexed by row once so
    /// the inner loop only visits its non-zeros.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let right_rows = other.row_index();
        let mut result = Self::with_dimensions(self.rows(), other.cols());
        for (coord, left_value) in self.iter() {
            let Some(row) = right_rows.get(&coord.col) else {
                continue;
            };
            for &(col, right_value) in row {
                let target = Coord::new(coord.row, col);
                let product = left_value.wrapping_mul(right_value);
                result.set_at(target, result.get_at(target).wrapping_add(product));
            }
        }
        Ok(result)
    }

    /// Stored entries grouped by row as `(col, value)`
    ///
    /// Entries with `col >= cols()` are left out, matching a column scan
    /// bounded by the declared width.
    fn row_index(&self) -> HashMap<usize, Vec<(usize, T)>> {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (coord, value) in self.iter().filter(|(coord, _)| coord.col < self.cols()) {
            rows.entry(coord.row).or_default().push((coord.col, value));
        }
        rows
    }
}
