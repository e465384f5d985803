//! Inversion and determinant via Gauss-Jordan elimination
//!
//! Works on the augmented system `[A | I]` with partial pivoting.
//! A pivot at or below the singularity floor fails the solve instead
//! of dividing through by noise.

use crate::error::{MatcacheError, MatcacheResult};
use crate::matrix::Matrix;
use tracing::debug;

/// Pivot magnitudes at or below this floor count as zero
const SINGULARITY_FLOOR: f64 = 1e-12;

/// Compute the inverse of a square matrix
///
/// Returns `SingularMatrix` when elimination cannot find a usable
/// pivot for some column.
pub fn invert(matrix: &Matrix) -> MatcacheResult<Matrix> {
    let n = matrix.order();

    // Augment each row of A with the matching row of I
    let mut aug: Vec<Vec<f64>> = matrix
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            row.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            row
        })
        .collect();

    for col in 0..n {
        // Partial pivoting: bring the largest remaining entry up
        let pivot_row = (col..n)
            .max_by(|&a, &b| aug[a][col].abs().total_cmp(&aug[b][col].abs()))
            .unwrap_or(col);

        if aug[pivot_row][col].abs() <= SINGULARITY_FLOOR {
            debug!(order = n, column = col, "no usable pivot, matrix is singular");
            return Err(MatcacheError::SingularMatrix { order: n });
        }

        aug.swap(col, pivot_row);

        let pivot = aug[col][col];
        for v in aug[col].iter_mut() {
            *v /= pivot;
        }

        let pivot_vals = aug[col].clone();
        for (row, row_vals) in aug.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = row_vals[col];
            if factor == 0.0 {
                continue;
            }
            for (v, p) in row_vals.iter_mut().zip(&pivot_vals) {
                *v -= factor * p;
            }
        }
    }

    // Right half now holds the inverse
    let rows = aug
        .into_iter()
        .map(|row| row[n..].to_vec())
        .collect::<Vec<_>>();

    Matrix::from_rows(rows)
}

/// Compute the determinant via LU-style elimination
///
/// Returns exactly `0.0` when a pivot falls below the singularity
/// floor, matching what `invert` treats as singular.
pub fn determinant(matrix: &Matrix) -> f64 {
    let n = matrix.order();
    let mut rows = matrix.rows();
    let mut det = 1.0;

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| rows[a][col].abs().total_cmp(&rows[b][col].abs()))
            .unwrap_or(col);

        if rows[pivot_row][col].abs() <= SINGULARITY_FLOOR {
            return 0.0;
        }

        if pivot_row != col {
            rows.swap(col, pivot_row);
            det = -det;
        }

        let pivot = rows[col][col];
        det *= pivot;

        let pivot_vals = rows[col].clone();
        for row_vals in rows.iter_mut().skip(col + 1) {
            let factor = row_vals[col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for (v, p) in row_vals.iter_mut().zip(&pivot_vals) {
                *v -= factor * p;
            }
        }
    }

    det
}
