//! Dense square matrices over `f64`
//!
//! Storage is a flat row-major `Vec<f64>` with a fixed order. Only
//! square matrices can be constructed; every downstream stage relies
//! on that.

pub mod solve;

pub use solve::{determinant, invert};

use crate::error::{MatcacheError, MatcacheResult};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense n x n matrix of real numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    order: usize,
}

impl Matrix {
    /// Build a matrix from row vectors
    ///
    /// Fails unless all rows have the same length and the result is
    /// square with at least one element.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MatcacheResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatcacheError::EmptyMatrix);
        }

        let order = rows.len();
        let cols = rows[0].len();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatcacheError::RaggedRows { row: i });
            }
        }

        if cols != order {
            return Err(MatcacheError::NotSquare {
                rows: order,
                cols,
            });
        }

        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            order,
        })
    }

    /// Build a matrix from column vectors
    pub fn from_cols(cols: Vec<Vec<f64>>) -> MatcacheResult<Self> {
        let transposed = Self::from_rows(cols)?;

        let n = transposed.order;
        let mut data = vec![0.0; n * n];
        for r in 0..n {
            for c in 0..n {
                data[r * n + c] = transposed.data[c * n + r];
            }
        }

        Ok(Self { data, order: n })
    }

    /// The n x n identity matrix
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order);
        for i in 0..order {
            m.data[i * order + i] = 1.0;
        }
        m
    }

    /// The n x n all-zeros matrix
    pub fn zeros(order: usize) -> Self {
        Self {
            data: vec![0.0; order * order],
            order,
        }
    }

    /// Number of rows (== number of columns)
    pub fn order(&self) -> usize {
        self.order
    }

    /// Element at (row, column)
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.order + col]
    }

    /// Set element at (row, column)
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.order + col] = value;
    }

    /// Row slice
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.order;
        &self.data[start..start + self.order]
    }

    /// Export as nested row vectors
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..self.order).map(|r| self.row(r).to_vec()).collect()
    }

    /// Standard dense matrix product `self * rhs`
    pub fn matmul(&self, rhs: &Matrix) -> MatcacheResult<Matrix> {
        if self.order != rhs.order {
            return Err(MatcacheError::DimensionMismatch {
                left: self.order,
                right: rhs.order,
            });
        }

        let n = self.order;
        let mut out = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0.0;
                for k in 0..n {
                    acc += self.data[i * n + k] * rhs.data[k * n + j];
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Element-wise approximate equality
    ///
    /// The tolerance is scaled by element magnitude: two elements match
    /// when `|a - b| <= tol * max(1, |a|, |b|)`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        if self.order != other.order {
            return false;
        }

        self.data
            .iter()
            .zip(&other.data)
            .all(|(&a, &b)| (a - b).abs() <= tol * 1.0_f64.max(a.abs()).max(b.abs()))
    }

    /// Largest element-wise absolute difference
    pub fn max_deviation(&self, other: &Matrix) -> f64 {
        if self.order != other.order {
            return f64::INFINITY;
        }

        self.data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.order {
            let row = self
                .row(r)
                .iter()
                .map(|v| format!("{v:>12.6}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "[ {row} ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            Matrix::from_rows(vec![]),
            Err(MatcacheError::EmptyMatrix)
        ));
        assert!(matches!(
            Matrix::from_rows(vec![vec![]]),
            Err(MatcacheError::EmptyMatrix)
        ));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, MatcacheError::RaggedRows { row: 1 }));
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
        assert!(matches!(err, MatcacheError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn from_cols_transposes() {
        let m = Matrix::from_cols(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(0), &[1.0, 3.0]);
        assert_eq!(m.row(1), &[2.0, 4.0]);
    }

    #[test]
    fn identity_diagonal() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn matmul_known_product() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.row(0), &[19.0, 22.0]);
        assert_eq!(c.row(1), &[43.0, 50.0]);
    }

    #[test]
    fn matmul_identity_is_noop() {
        let a = Matrix::from_rows(vec![vec![2.0, -1.0], vec![0.5, 3.0]]).unwrap();
        let id = Matrix::identity(2);
        assert_eq!(a.matmul(&id).unwrap(), a);
        assert_eq!(id.matmul(&a).unwrap(), a);
    }

    #[test]
    fn matmul_order_mismatch() {
        let a = Matrix::identity(2);
        let b = Matrix::identity(3);
        assert!(matches!(
            a.matmul(&b),
            Err(MatcacheError::DimensionMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn approx_eq_within_tolerance() {
        let a = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1.0 + 1e-12, 0.0], vec![1e-12, 1.0]]).unwrap();
        assert!(a.approx_eq(&b, 1e-8));
        assert!(!a.approx_eq(&b, 1e-14));
    }

    #[test]
    fn approx_eq_scales_with_magnitude() {
        let a = Matrix::from_rows(vec![vec![1e12]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1e12 + 1.0]]).unwrap();
        // Absolute difference of 1.0, but relative difference of 1e-12
        assert!(a.approx_eq(&b, 1e-8));
    }

    #[test]
    fn max_deviation_reports_worst_element() {
        let a = Matrix::identity(2);
        let b = Matrix::from_rows(vec![vec![1.0, 0.25], vec![0.0, 1.0]]).unwrap();
        assert_eq!(a.max_deviation(&b), 0.25);
    }

    #[test]
    fn serde_roundtrip_preserves_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.5],[-3.0,4.0]]");
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn deserialize_rejects_non_square() {
        let err = serde_json::from_str::<Matrix>("[[1.0,2.0,3.0],[4.0,5.0,6.0]]");
        assert!(err.is_err());
    }
}
