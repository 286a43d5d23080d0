#![cfg_attr(not(test), no_std)]

//! SMAT Core - Sparse Integer Matrix Model
//!
//! This crate provides the coordinate-keyed sparse matrix, its arithmetic
//! and the text format codec. It performs no I/O.

extern crate alloc;

pub mod coord;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use coord::Coord;
pub use error::*;
pub use format::{parse_matrix, EntryOrder, MatrixDecoder, TextEncoder};
pub use matrix::SparseMatrix;
pub use ops::Operation;
pub use traits::{DataType, MatrixElement};

#[cfg(feature = "serde")]
pub use format::{MatrixRecord, Triplet};
