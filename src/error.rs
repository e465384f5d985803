//! Error types for Matcache
//!
//! All modules use `MatcacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Matcache operations
pub type MatcacheResult<T> = Result<T, MatcacheError>;

/// All errors that can occur in Matcache
#[derive(Error, Debug)]
pub enum MatcacheError {
    // Solver errors
    #[error("Matrix of order {order} is singular and has no inverse")]
    SingularMatrix { order: usize },

    #[error(
        "Candidate inverse rejected: max deviation from identity {max_deviation:e} exceeds tolerance {tolerance:e}"
    )]
    InvalidInverse {
        max_deviation: f64,
        tolerance: f64,
    },

    // Shape errors
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Row {row} has a different length than the first row")]
    RaggedRows { row: usize },

    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Dimension mismatch: cannot multiply {left}x{left} by {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    // Input errors
    #[error("Failed to parse matrix from {path}: {reason}")]
    MatrixParse { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MatcacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a matrix parse error
    pub fn matrix_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MatrixParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error is an expected, recoverable solve outcome
    /// (as opposed to malformed input or an environment failure)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::SingularMatrix { .. } | Self::InvalidInverse { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SingularMatrix { .. } => Some("Supply an invertible matrix (determinant != 0)"),
            Self::InvalidInverse { .. } => {
                Some("The candidate does not invert the currently cached matrix")
            }
            Self::NotSquare { .. } | Self::RaggedRows { .. } => {
                Some("Provide the matrix as a JSON array of equal-length rows, e.g. [[1,0],[0,1]]")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MatcacheError::SingularMatrix { order: 3 };
        assert!(err.to_string().contains("order 3"));
        assert!(err.to_string().contains("singular"));
    }

    #[test]
    fn error_hint() {
        let err = MatcacheError::NotSquare { rows: 2, cols: 3 };
        assert!(err.hint().unwrap().contains("equal-length rows"));
    }

    #[test]
    fn error_recoverable() {
        assert!(MatcacheError::SingularMatrix { order: 2 }.is_recoverable());
        assert!(MatcacheError::InvalidInverse {
            max_deviation: 1.0,
            tolerance: 1e-8
        }
        .is_recoverable());
        assert!(!MatcacheError::EmptyMatrix.is_recoverable());
    }
}
