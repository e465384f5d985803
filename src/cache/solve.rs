//! The memoized solve
//!
//! First request computes and stores the inverse; later requests for
//! the same cached matrix return the stored value without touching
//! the solver.

use crate::cache::cell::CacheCell;
use crate::error::MatcacheResult;
use crate::matrix::{self, Matrix};
use tracing::debug;

/// Return the inverse of the cell's matrix, computing only when the
/// inverse slot is empty
///
/// A freshly computed inverse is stored through the validating setter,
/// so an ill-conditioned solve whose result fails validation surfaces
/// as `InvalidInverse` rather than being returned unverified.
pub fn cached_inverse(cell: &mut CacheCell) -> MatcacheResult<Matrix> {
    if let Some(inverse) = cell.inverse().cloned() {
        cell.record_hit();
        debug!(order = inverse.order(), "cache hit, serving stored inverse");
        return Ok(inverse);
    }

    debug!(order = cell.matrix().order(), "cache miss, computing inverse");
    let inverse = matrix::invert(cell.matrix())?;
    cell.set_inverse(inverse.clone())?;
    cell.record_miss();

    Ok(inverse)
}
