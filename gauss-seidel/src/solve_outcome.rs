use crate::{ConvergenceCheck, Error, solver::Sweep};

/// Data from a successfully solved system.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SolveOutcome {
    /// Final approximation, at full precision.
    pub(crate) solution: Vec<f64>,
    /// The initial guess followed by every sweep.
    pub(crate) sweeps: Vec<Sweep>,
    /// Diagonal-dominance check which allowed the iteration to run.
    pub(crate) check: ConvergenceCheck,
    /// Largest absolute entry of `Ax - b` at the solution.
    pub(crate) residual: f64,
}

impl SolveOutcome {
    /// Final approximation, at full precision.
    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    /// The initial guess followed by every sweep.
    pub fn sweeps(&self) -> &[Sweep] {
        &self.sweeps
    }

    /// How many sweeps were needed?
    pub fn iterations(&self) -> usize {
        self.sweeps.len().saturating_sub(1)
    }

    /// Diagonal-dominance check which allowed the iteration to run.
    pub fn check(&self) -> &ConvergenceCheck {
        &self.check
    }

    /// Largest absolute entry of `Ax - b` at the solution.
    pub fn residual(&self) -> f64 {
        self.residual
    }
}

/// Returned when a system could not be solved.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FailureOutcome {
    /// The error that stopped the system from being solved.
    pub error: Error,
    /// Diagonal-dominance check, if the system got far enough to run it.
    pub check: Option<ConvergenceCheck>,
    /// Any sweeps that ran before giving up.
    pub sweeps: Vec<Sweep>,
}

impl FailureOutcome {
    pub(crate) fn new(error: Error) -> Self {
        Self {
            error,
            check: None,
            sweeps: Vec::new(),
        }
    }

    /// The error that stopped the system from being solved.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Diagonal-dominance check, if the system got far enough to run it.
    pub fn check(&self) -> Option<&ConvergenceCheck> {
        self.check.as_ref()
    }

    /// Any sweeps that ran before giving up.
    pub fn sweeps(&self) -> &[Sweep] {
        &self.sweeps
    }
}

impl From<Error> for FailureOutcome {
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}
