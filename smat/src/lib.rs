//! SMAT - Sparse Integer Matrix Files and Sessions
//!
//! This library adds file I/O and a host session on top of `smat-core`.
//!
//! ## Architecture
//!
//! - **smat-core**: matrix model, arithmetic, text codec (no I/O)
//! - **smat**: file handles, session context, configuration, CLI binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smat::{EntryOrder, MatrixFile, Operation, SparseMatrix};
//!
//! fn example() -> smat::Result<()> {
//!     let a: SparseMatrix = MatrixFile::read("a.txt")?;
//!     let b: SparseMatrix = MatrixFile::read("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     println!("product[0, 1] = {}", product.get(0, 1));
//!
//!     MatrixFile::write("product.txt", &product, EntryOrder::RowMajor)?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use smat_core::{
    parse_matrix, Coord, DataType, EntryOrder, ErrorCategory, MatrixElement, MatrixError,
    Operation, SparseMatrix,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod session;

pub use config::{OutputFormat, SessionConfig};
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use session::{MenuChoice, PersistElement, Session};
