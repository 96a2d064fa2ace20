/// Errors from validating or solving a linear system.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The matrix isn't square, or the right-hand side doesn't match it.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
    /// You provided a system with no equations.
    #[error("Cannot solve an empty system")]
    EmptySystem,
    /// Some coefficient was NaN or infinite.
    #[error("{}", non_finite_message(*row, *col))]
    NonFiniteEntry {
        /// Which equation the entry belongs to.
        row: usize,
        /// Which column of the matrix, or `None` for the right-hand side.
        col: Option<usize>,
    },
    /// A diagonal entry is zero, so the row can't be normalized.
    #[error("Equation {row} has a zero on the diagonal, so it cannot be solved for x{row}")]
    DegenerateSystem {
        /// The equation whose diagonal entry is zero.
        row: usize,
    },
    /// The diagonal-dominance check failed, so iteration was not attempted.
    #[error("Convergence check failed for equations {rows:?}")]
    ConvergenceCheckFailed {
        /// Every equation which failed the check.
        rows: Vec<usize>,
    },
    /// The iterates didn't settle within the tolerance in the allowed number of sweeps.
    /// Consider raising the sweep cap, or loosening the tolerance.
    #[error("Did not converge within {sweeps} sweeps")]
    DidNotConverge {
        /// How many sweeps ran before giving up.
        sweeps: usize,
    },
    /// Tolerance must be finite and strictly positive.
    #[error("Tolerance must be a positive number, but got {0}")]
    InvalidTolerance(f64),
    /// Precision is larger than an f64 can meaningfully show.
    #[error("Precision must be at most {max} digits, but got {0}", max = crate::format::MAX_PRECISION)]
    InvalidPrecision(usize),
}

/// How the matrix and right-hand side failed to line up.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeMismatch {
    /// A matrix row has the wrong number of coefficients.
    #[error("row {row} has {len} coefficients but the system has {expected} equations")]
    RowLength {
        /// Which row.
        row: usize,
        /// How many coefficients it has.
        len: usize,
        /// How many it should have.
        expected: usize,
    },
    /// The right-hand side has the wrong length.
    #[error("right-hand side has {len} entries but the system has {expected} equations")]
    RhsLength {
        /// How many entries it has.
        len: usize,
        /// How many it should have.
        expected: usize,
    },
}

fn non_finite_message(row: usize, col: Option<usize>) -> String {
    match col {
        Some(col) => format!("Coefficient ({row}, {col}) is not a finite number"),
        None => format!("Right-hand side of equation {row} is not a finite number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_entry() {
        let e = Error::NonFiniteEntry {
            row: 1,
            col: Some(2),
        };
        assert_eq!(e.to_string(), "Coefficient (1, 2) is not a finite number");
        let e = Error::NonFiniteEntry { row: 3, col: None };
        assert!(e.to_string().contains("equation 3"));
        let e: Error = ShapeMismatch::RhsLength {
            len: 2,
            expected: 3,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "Shape mismatch: right-hand side has 2 entries but the system has 3 equations"
        );
    }
}
