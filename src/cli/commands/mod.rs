//! CLI command implementations

pub mod check;
pub mod config;
pub mod invert;

pub use check::execute as check;
pub use config::execute as config;
pub use invert::execute as invert;

use crate::error::{MatcacheError, MatcacheResult};
use crate::matrix::Matrix;
use std::fs;
use std::path::Path;

/// Load a matrix from a JSON file of equal-length rows
pub(crate) fn load_matrix(path: &Path) -> MatcacheResult<Matrix> {
    let content = fs::read_to_string(path)
        .map_err(|e| MatcacheError::io(format!("reading matrix from {}", path.display()), e))?;

    serde_json::from_str(&content).map_err(|e| MatcacheError::matrix_parse(path, e.to_string()))
}
