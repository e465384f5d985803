//! Check command - validate a candidate inverse against a matrix

use crate::cache::CacheCell;
use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::error::MatcacheResult;
use console::style;
use tracing::debug;

/// Execute the check command
///
/// Accepts the candidate through the cell's validating setter, so the
/// exit code reflects whether the candidate inverts the matrix.
pub fn execute(args: CheckArgs, config: &Config) -> MatcacheResult<()> {
    let matrix = super::load_matrix(&args.matrix)?;
    let candidate = super::load_matrix(&args.candidate)?;
    debug!(order = matrix.order(), "validating candidate inverse");

    let tolerance = args.tolerance.unwrap_or(config.solver.tolerance);
    let mut cell = CacheCell::with_tolerance(matrix, tolerance);
    cell.set_inverse(candidate)?;

    println!(
        "{} candidate inverts the matrix (tolerance {:e})",
        style("OK").green().bold(),
        tolerance
    );
    Ok(())
}
