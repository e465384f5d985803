//! Cache cell state management
//!
//! Owns the matrix/inverse pair and enforces the one invariant that
//! matters: whenever the inverse slot is filled, its content inverts
//! the currently held matrix within the cell's tolerance.

use crate::error::{MatcacheError, MatcacheResult};
use crate::matrix::Matrix;
use std::fmt;
use tracing::{debug, warn};

/// Default tolerance for accepting a candidate inverse
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Whether the inverse slot is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// No inverse stored (never computed, or invalidated)
    Empty,
    /// A validated inverse is stored
    Cached,
}

impl CacheStatus {
    /// Whether a solve would be served from the cache
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached)
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Cached => write!(f, "cached"),
        }
    }
}

/// Hit/miss counters for one cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Solves served from the stored inverse
    pub hits: u64,
    /// Solves that had to compute
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of solves served from the cache, `0.0` when none ran
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

/// Holds one matrix and, when present, its validated inverse
#[derive(Debug, Clone)]
pub struct CacheCell {
    matrix: Matrix,
    inverse: Option<Matrix>,
    tolerance: f64,
    stats: CacheStats,
}

impl CacheCell {
    /// Create a cell around an initial matrix with the default tolerance
    pub fn new(matrix: Matrix) -> Self {
        Self::with_tolerance(matrix, DEFAULT_TOLERANCE)
    }

    /// Create a cell with an explicit validation tolerance
    pub fn with_tolerance(matrix: Matrix, tolerance: f64) -> Self {
        Self {
            matrix,
            inverse: None,
            tolerance,
            stats: CacheStats::default(),
        }
    }

    /// The currently cached matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Replace the cached matrix, emptying the inverse slot
    pub fn set_matrix(&mut self, matrix: Matrix) {
        debug!(order = matrix.order(), "replacing matrix, dropping stored inverse");
        self.matrix = matrix;
        self.inverse = None;
    }

    /// The stored inverse, or `None` if never computed or invalidated
    pub fn inverse(&self) -> Option<&Matrix> {
        self.inverse.as_ref()
    }

    /// Store a candidate inverse after validating it against the
    /// currently held matrix
    ///
    /// The candidate is accepted when `candidate * matrix` matches the
    /// identity within the cell's tolerance. On rejection the slot is
    /// left exactly as it was.
    pub fn set_inverse(&mut self, candidate: Matrix) -> MatcacheResult<()> {
        let order = self.matrix.order();

        if candidate.order() != order {
            warn!(
                expected = order,
                got = candidate.order(),
                "rejecting candidate inverse of wrong order"
            );
            return Err(MatcacheError::InvalidInverse {
                max_deviation: f64::INFINITY,
                tolerance: self.tolerance,
            });
        }

        let product = candidate.matmul(&self.matrix)?;
        let identity = Matrix::identity(order);

        if !product.approx_eq(&identity, self.tolerance) {
            let max_deviation = product.max_deviation(&identity);
            warn!(
                max_deviation,
                tolerance = self.tolerance,
                "rejecting candidate inverse, product is not the identity"
            );
            return Err(MatcacheError::InvalidInverse {
                max_deviation,
                tolerance: self.tolerance,
            });
        }

        self.inverse = Some(candidate);
        Ok(())
    }

    /// Whether the inverse slot is filled
    pub fn status(&self) -> CacheStatus {
        if self.inverse.is_some() {
            CacheStatus::Cached
        } else {
            CacheStatus::Empty
        }
    }

    /// The validation tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Hit/miss counters observed so far
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub(crate) fn record_hit(&mut self) {
        self.stats.hits = self.stats.hits.saturating_add(1);
    }

    pub(crate) fn record_miss(&mut self) {
        self.stats.misses = self.stats.misses.saturating_add(1);
    }
}
