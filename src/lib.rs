//! Matcache - Memoizing Matrix Inverse Cache
//!
//! Holds one square matrix and, once solved, its inverse in a
//! single-slot cache. Repeated solves against the same matrix are
//! served from the cache; replacing the matrix invalidates the
//! stored inverse.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod matrix;

pub use cache::{cached_inverse, CacheCell, CacheStats, CacheStatus};
pub use error::{MatcacheError, MatcacheResult};
pub use matrix::Matrix;
