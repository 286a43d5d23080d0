//! Structured (serde) representation of a sparse matrix
//!
//! `SparseMatrix` serializes as
//! `{ "rows": .., "cols": .., "entries": [{ "row", "col", "value" }, ..] }`
//! with entries in row-major order. Deserialization goes through `set`, so
//! zero values are dropped.

use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

/// One stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triplet<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Dimensions plus entry list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRecord<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Triplet<T>>,
}

impl<T: MatrixElement> From<&SparseMatrix<T>> for MatrixRecord<T> {
    fn from(matrix: &SparseMatrix<T>) -> Self {
        let entries = matrix
            .sorted_entries()
            .into_iter()
            .map(|(coord, value)| Triplet {
                row: coord.row,
                col: coord.col,
                value,
            })
            .collect();
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries,
        }
    }
}

impl<T: MatrixElement> From<MatrixRecord<T>> for SparseMatrix<T> {
    fn from(record: MatrixRecord<T>) -> Self {
        SparseMatrix::from_triplets(
            record.rows,
            record.cols,
            record
                .entries
                .into_iter()
                .map(|entry| (entry.row, entry.col, entry.value)),
        )
    }
}

impl<T: MatrixElement + Serialize> Serialize for SparseMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRecord::from(self).serialize(serializer)
    }
}

impl<'de, T: MatrixElement + Deserialize<'de>> Deserialize<'de> for SparseMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        MatrixRecord::<T>::deserialize(deserializer).map(SparseMatrix::from)
    }
}
