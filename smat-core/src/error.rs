//! Error types for sparse matrix operations

use crate::ops::Operation;

/// Errors that can occur while building, combining or decoding matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand dimensions violate the operation's precondition
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Missing header or malformed entry line (1-based line number)
    Format { line: usize },
    /// Token that should be an integer is not (1-based line number)
    Parse { line: usize },
    /// Stored coordinate lies outside the declared dimensions
    IndexOutOfBounds { row: usize, col: usize },
}

/// Coarse classification of errors, shared with the I/O layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Dimension,
    Format,
    Parse,
    Bounds,
    Io,
}

impl MatrixError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            MatrixError::Format { .. } => ErrorCategory::Format,
            MatrixError::Parse { .. } => ErrorCategory::Parse,
            MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                let requirement = match operation {
                    Operation::Add | Operation::Subtract => "must be the same",
                    Operation::Multiply => "are not suitable",
                };
                write!(
                    f,
                    "Matrix dimensions {requirement} for {}: {}x{} vs {}x{}",
                    operation.verb(),
                    left.0,
                    left.1,
                    right.0,
                    right.1
                )
            }
            MatrixError::Format { line } => write!(f, "Input file has wrong format (line {line})"),
            MatrixError::Parse { line } => write!(f, "Invalid integer on line {line}"),
            MatrixError::IndexOutOfBounds { row, col } => {
                write!(f, "Entry ({row}, {col}) is outside the declared dimensions")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrorCategory::Dimension => "dimension",
            ErrorCategory::Format => "format",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Bounds => "bounds",
            ErrorCategory::Io => "io",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MatrixError::DimensionMismatch {
            operation: Operation::Add,
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions must be the same for addition: 2x3 vs 3x2"
        );

        let err = MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions are not suitable for multiplication: 2x3 vs 2x3"
        );

        assert_eq!(
            MatrixError::Format { line: 3 }.to_string(),
            "Input file has wrong format (line 3)"
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(MatrixError::Parse { line: 1 }.category(), ErrorCategory::Parse);
        assert_eq!(MatrixError::Format { line: 1 }.category(), ErrorCategory::Format);
        assert_eq!(
            MatrixError::IndexOutOfBounds { row: 0, col: 9 }.category(),
            ErrorCategory::Bounds
        );
    }
}
