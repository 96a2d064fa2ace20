use crate::{
    Error,
    format::{MAX_PRECISION, round},
    update::UpdateFunction,
};

/// Default stopping tolerance on the largest change in a sweep.
pub const DEFAULT_EPSILON: f64 = 1e-3;
/// Default number of decimal places in reported values.
pub const DEFAULT_PRECISION: usize = 4;
/// Default cap on the number of sweeps before giving up.
pub const DEFAULT_MAX_SWEEPS: usize = 1000;

/// Settings for a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Config {
    /// Iteration stops once no unknown changes by this much or more in a sweep.
    pub epsilon: f64,
    /// Decimal places shown in the report. `None` shows the shortest exact representation.
    /// Only affects what's reported, never the iteration itself.
    pub precision: Option<usize>,
    /// Give up after this many sweeps.
    pub max_sweeps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            precision: Some(DEFAULT_PRECISION),
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl Config {
    /// Set the stopping tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the reported precision.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Set the sweep cap.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Check the settings make sense.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidTolerance(self.epsilon));
        }
        if let Some(precision) = self.precision
            && precision > MAX_PRECISION
        {
            return Err(Error::InvalidPrecision(precision));
        }
        Ok(())
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// 0 is the initial guess, 1 is the first sweep, and so on.
    pub index: usize,
    /// The approximation after this sweep, rounded for display.
    pub values: Vec<f64>,
    /// Largest change of any unknown during this sweep, rounded for display.
    /// `None` for the initial guess.
    pub max_difference: Option<f64>,
}

/// Everything the iteration produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// The initial guess followed by every sweep.
    pub sweeps: Vec<Sweep>,
    /// Final approximation, at full precision.
    pub solution: Vec<f64>,
    /// Did the last sweep change every unknown by less than the tolerance?
    pub converged: bool,
}

impl Trace {
    /// Number of sweeps run, not counting the initial guess.
    pub fn num_sweeps(&self) -> usize {
        self.sweeps.len().saturating_sub(1)
    }
}

/// The current approximation, updated in place one unknown at a time.
pub(crate) struct Approximation<'u> {
    updates: &'u [UpdateFunction],
    x: Vec<f64>,
}

impl<'u> Approximation<'u> {
    /// Start from the zero vector.
    pub fn new(updates: &'u [UpdateFunction]) -> Self {
        Self {
            updates,
            x: vec![0.0; updates.len()],
        }
    }

    /// Update every unknown once, in index order.
    /// Each update sees the values already written earlier in this sweep.
    /// Returns the largest absolute change.
    pub fn sweep(&mut self) -> f64 {
        let mut max_difference: f64 = 0.0;
        for update in self.updates {
            let i = update.index();
            let next = update.eval(&self.x);
            max_difference = libm::fmax(max_difference, libm::fabs(next - self.x[i]));
            self.x[i] = next;
        }
        max_difference
    }

    pub fn values(&self) -> &[f64] {
        &self.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|v| v.is_finite())
    }

    fn snapshot(&self, precision: Option<usize>) -> Vec<f64> {
        self.x.iter().map(|&v| round(v, precision)).collect()
    }
}

/// Run Gauss-Seidel sweeps from the zero vector until the largest change in a sweep
/// drops below `config.epsilon`, or `config.max_sweeps` sweeps have run.
pub fn iterate(updates: &[UpdateFunction], config: &Config) -> Trace {
    let mut approximation = Approximation::new(updates);
    let mut sweeps = vec![Sweep {
        index: 0,
        values: approximation.snapshot(config.precision),
        max_difference: None,
    }];
    let mut converged = false;

    for index in 1..=config.max_sweeps {
        let max_difference = approximation.sweep();
        sweeps.push(Sweep {
            index,
            values: approximation.snapshot(config.precision),
            max_difference: Some(round(max_difference, config.precision)),
        });
        // Overflowed iterates can never settle, so don't keep sweeping.
        if !approximation.is_finite() {
            break;
        }
        if max_difference < config.epsilon {
            converged = true;
            break;
        }
    }

    Trace {
        sweeps,
        solution: approximation.values().to_vec(),
        converged,
    }
}
