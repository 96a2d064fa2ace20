mod parser;

use std::str::FromStr;

use indexmap::IndexMap;
use winnow::Parser;

use crate::{Config, Error, FailureOutcome, LinearSystem, Report, gauss_seidel, solve};

pub use parser::parse_problem;

/// One row of the system: coefficients, then the right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    /// `a_i0, a_i1, ...`
    pub coefficients: Vec<f64>,
    /// `b_i`
    pub rhs: f64,
}

/// A line from the `# config` section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    /// `epsilon = 0.001`
    Epsilon(f64),
    /// `precision = 4`, or `precision = auto` for `None`.
    Precision(Option<usize>),
    /// `max_sweeps = 100`
    MaxSweeps(usize),
}

/// A linear system and its solver settings, as written in a problem file:
///
/// ```text
/// # system
/// 4 1 | 8
/// 2 5 | 10
///
/// # config
/// epsilon = 0.001
/// precision = 4
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Equations, in order.
    pub equations: Vec<Equation>,
    /// Settings, in the order they were written. Later ones win.
    pub settings: Vec<Setting>,
}

impl FromStr for Problem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_problem.parse(s).map_err(|e| e.to_string())
    }
}

impl Problem {
    /// Validate the equations as a [`LinearSystem`].
    pub fn to_system(&self) -> Result<LinearSystem, Error> {
        let (a, b) = self
            .equations
            .iter()
            .map(|eq| (eq.coefficients.clone(), eq.rhs))
            .unzip();
        LinearSystem::new(a, b)
    }

    /// Default settings, overridden by any given in the problem.
    pub fn config(&self) -> Config {
        self.settings
            .iter()
            .fold(Config::default(), |config, setting| match *setting {
                Setting::Epsilon(epsilon) => config.with_epsilon(epsilon),
                Setting::Precision(precision) => config.with_precision(precision),
                Setting::MaxSweeps(max_sweeps) => config.with_max_sweeps(max_sweeps),
            })
    }

    /// Solve with the problem's own settings and explain how.
    pub fn report(&self) -> Result<Report, Error> {
        gauss_seidel(&self.to_system()?, self.config())
    }

    /// Solve with the problem's own settings.
    pub fn solve(&self) -> Result<Outcome, FailureOutcome> {
        self.solve_with_config(self.config())
    }

    /// Solve, ignoring the problem's own settings.
    pub fn solve_with_config(&self, config: Config) -> Result<Outcome, FailureOutcome> {
        let system = self.to_system()?;
        let outcome = solve(&system, config)?;
        Ok(Outcome {
            values: outcome
                .solution()
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("x{i}"), *v))
                .collect(),
            iterations: outcome.iterations(),
            residual: outcome.residual(),
        })
    }
}

/// Solution to a [`Problem`], with each unknown named the way the report names it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// `x0`, `x1`, ... in order.
    pub values: IndexMap<String, f64>,
    /// Sweeps needed.
    pub iterations: usize,
    /// Largest absolute entry of `Ax - b`.
    pub residual: f64,
}

impl Outcome {
    /// Look up an unknown by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}
