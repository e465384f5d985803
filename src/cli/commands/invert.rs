//! Invert command - solve through the cache and print the inverse

use crate::cache::{cached_inverse, CacheCell};
use crate::cli::args::InvertArgs;
use crate::config::Config;
use crate::error::MatcacheResult;
use crate::matrix::{self, Matrix};
use console::style;
use tracing::{debug, info};

/// Execute the invert command
pub fn execute(args: InvertArgs, config: &Config) -> MatcacheResult<()> {
    let matrix = super::load_matrix(&args.matrix)?;
    debug!(
        order = matrix.order(),
        path = %args.matrix.display(),
        "loaded matrix"
    );

    let tolerance = args.tolerance.unwrap_or(config.solver.tolerance);
    let mut cell = CacheCell::with_tolerance(matrix, tolerance);

    info!(
        determinant = matrix::determinant(cell.matrix()),
        tolerance, "solving"
    );
    let inverse = cached_inverse(&mut cell)?;

    println!("{}", serde_json::to_string(&inverse)?);

    if args.verify {
        let product = cell.matrix().matmul(&inverse)?;
        let residual = product.max_deviation(&Matrix::identity(product.order()));
        eprintln!(
            "{} max residual from identity: {:e}",
            style("Verified:").green().bold(),
            residual
        );
    }

    Ok(())
}
