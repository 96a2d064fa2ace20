use crate::LinearSystem;

/// Result of the diagonal-dominance test for one equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowCheck {
    /// `a_ii`
    pub diagonal: f64,
    /// Signed sum of every other coefficient in the row.
    pub off_diagonal_sum: f64,
    /// Was the diagonal strictly greater than the rest of the row?
    pub passed: bool,
}

/// Result of the diagonal-dominance test for the whole system.
///
/// Passing is sufficient for Gauss-Seidel to converge, but not necessary.
/// Systems which fail are not iterated.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceCheck {
    /// One entry per equation.
    pub rows: Vec<RowCheck>,
    /// Did every row pass?
    pub passed: bool,
}

impl ConvergenceCheck {
    /// Check each row: `a_ii > Σ_{j≠i} a_ij`.
    pub fn check(system: &LinearSystem) -> Self {
        let rows: Vec<_> = system
            .matrix()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let diagonal = row[i];
                let off_diagonal_sum: f64 = row
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, a_ij)| a_ij)
                    .sum();
                RowCheck {
                    diagonal,
                    off_diagonal_sum,
                    passed: diagonal > off_diagonal_sum,
                }
            })
            .collect();
        let passed = rows.iter().all(|row| row.passed);
        Self { rows, passed }
    }

    /// Indices of every equation which failed.
    pub fn failing_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.passed)
            .map(|(i, _)| i)
            .collect()
    }
}
