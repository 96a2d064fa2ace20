use faer::{ColRef, Mat};

use crate::{Error, ShapeMismatch};

/// A square linear system `Ax = b`.
/// Construction validates the shape, so everything downstream can index freely.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

impl LinearSystem {
    /// Validate and wrap the coefficient matrix `a` and right-hand side `b`.
    /// Fails if the system is empty, isn't square, `b` doesn't match,
    /// or any entry is NaN or infinite.
    pub fn new(a: Vec<Vec<f64>>, b: Vec<f64>) -> Result<Self, Error> {
        let n = a.len();
        if n == 0 {
            return Err(Error::EmptySystem);
        }
        for (row, coefficients) in a.iter().enumerate() {
            if coefficients.len() != n {
                return Err(ShapeMismatch::RowLength {
                    row,
                    len: coefficients.len(),
                    expected: n,
                }
                .into());
            }
        }
        if b.len() != n {
            return Err(ShapeMismatch::RhsLength {
                len: b.len(),
                expected: n,
            }
            .into());
        }
        for (row, coefficients) in a.iter().enumerate() {
            if let Some(col) = coefficients.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFiniteEntry {
                    row,
                    col: Some(col),
                });
            }
        }
        if let Some(row) = b.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteEntry { row, col: None });
        }
        Ok(Self { a, b })
    }

    /// Number of equations, which is also the number of unknowns.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// The coefficient matrix, row by row.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.a
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// Coefficients of equation `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.a[i]
    }

    /// `Ax - b` for some candidate solution `x`.
    ///
    /// # Panics
    /// If `x` doesn't have one value per unknown.
    pub fn residual(&self, x: &[f64]) -> Vec<f64> {
        assert_eq!(
            x.len(),
            self.dim(),
            "candidate solution must have one value per unknown"
        );
        let n = self.dim();
        let a = Mat::from_fn(n, n, |i, j| self.a[i][j]);
        let ax = a.as_ref() * ColRef::from_slice(x);
        ax.iter().zip(&self.b).map(|(lhs, rhs)| lhs - rhs).collect()
    }

    /// Largest absolute entry of the residual `Ax - b`.
    pub fn residual_norm(&self, x: &[f64]) -> f64 {
        self.residual(x)
            .into_iter()
            .map(libm::fabs)
            .fold(0.0, libm::fmax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(LinearSystem::new(vec![], vec![]), Err(Error::EmptySystem));
        assert_eq!(
            LinearSystem::new(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]),
            Err(Error::ShapeMismatch(ShapeMismatch::RowLength {
                row: 1,
                len: 1,
                expected: 2
            }))
        );
        assert_eq!(
            LinearSystem::new(vec![vec![1.0]], vec![1.0, 2.0]),
            Err(Error::ShapeMismatch(ShapeMismatch::RhsLength {
                len: 2,
                expected: 1
            }))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            LinearSystem::new(vec![vec![1.0, f64::NAN], vec![0.0, 1.0]], vec![1.0, 2.0]),
            Err(Error::NonFiniteEntry {
                row: 0,
                col: Some(1)
            })
        );
        assert_eq!(
            LinearSystem::new(vec![vec![1.0]], vec![f64::INFINITY]),
            Err(Error::NonFiniteEntry { row: 0, col: None })
        );
    }

    #[test]
    fn residual_of_exact_solution_is_zero() {
        let system =
            LinearSystem::new(vec![vec![2.0, 1.0], vec![1.0, 3.0]], vec![3.0, 4.0]).unwrap();
        assert_eq!(system.residual(&[1.0, 1.0]), vec![0.0, 0.0]);
        assert!((system.residual_norm(&[1.0, 0.0]) - 3.0).abs() < 1e-12);
    }
}
