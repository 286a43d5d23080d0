//! Element type abstractions
//!
//! The matrix is a single concrete type; the only abstraction seam is the
//! integer width it stores.

pub mod element;

pub use element::{DataType, MatrixElement};
