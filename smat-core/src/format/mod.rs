//! Persisted representations of sparse matrices
//!
//! Pure encoders and decoders; reading and writing files is left to the
//! I/O layer.

pub mod constants;
#[cfg(feature = "serde")]
pub mod record;
pub mod text;

pub use text::{parse_matrix, EntryOrder, MatrixDecoder, TextEncoder};

#[cfg(feature = "serde")]
pub use record::{MatrixRecord, Triplet};
