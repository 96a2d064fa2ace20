use crate::{Error, LinearSystem};

/// The system rearranged so each equation is divided by its diagonal entry.
/// Row `i` then reads `x_i + Σ_{j≠i} a'_ij x_j = b'_i`, which is what the
/// update formulas solve for `x_i`.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationSystem {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
}

impl IterationSystem {
    /// Normalize every row by its diagonal entry.
    /// Fails with [`Error::DegenerateSystem`] before dividing anything if some diagonal is zero.
    pub fn build(system: &LinearSystem) -> Result<Self, Error> {
        if let Some(row) = (0..system.dim()).find(|&i| system.row(i)[i] == 0.0) {
            return Err(Error::DegenerateSystem { row });
        }
        let (a, b) = system
            .matrix()
            .iter()
            .zip(system.rhs())
            .enumerate()
            .map(|(i, (row, rhs))| {
                let diagonal = row[i];
                let normalized: Vec<f64> = row.iter().map(|a_ij| a_ij / diagonal).collect();
                (normalized, rhs / diagonal)
            })
            .unzip();
        Ok(Self { a, b })
    }

    /// Number of unknowns.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// The normalized matrix `A'`.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.a
    }

    /// The normalized right-hand side `b'`.
    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// `Σ_{j≠i} |a'_ij|`. When this is below 1 for every row,
    /// each update shrinks the error.
    pub fn off_diagonal_magnitude(&self, i: usize) -> f64 {
        self.a[i]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, a_ij)| a_ij.abs())
            .sum()
    }
}
