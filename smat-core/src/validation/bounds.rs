//! Coordinate bounds validation
//!
//! Pure checks of stored coordinates against declared dimensions.

use crate::coord::Coord;
use crate::MatrixError;

/// Validate that `coord` lies inside a `rows x cols` matrix
pub const fn validate_coord(coord: Coord, rows: usize, cols: usize) -> Result<(), MatrixError> {
    if !coord.within(rows, cols) {
        return Err(MatrixError::IndexOutOfBounds {
            row: coord.row,
            col: coord.col,
        });
    }
    Ok(())
}
