//! Gauss-Seidel iterative solver for square linear systems `Ax = b`.
//!
//! Before iterating, the system is checked for diagonal dominance, a sufficient condition
//! for the iteration to converge. Solving produces a [`Report`] walking through the
//! derivation step by step: the system, the convergence check, the iteration formulas,
//! and every sweep until the approximation settles.
//!
//! ```
//! use gauss_seidel::{Config, LinearSystem, gauss_seidel};
//!
//! let system = LinearSystem::new(vec![vec![4.0, 1.0], vec![2.0, 5.0]], vec![8.0, 10.0])?;
//! let report = gauss_seidel(&system, Config::default())?;
//! assert!(!report.has_error());
//! # Ok::<(), gauss_seidel::Error>(())
//! ```

pub use crate::convergence::{ConvergenceCheck, RowCheck};
pub use crate::error::{Error, ShapeMismatch};
pub use crate::iteration::IterationSystem;
pub use crate::report::{Cell, PlainText, Report, ReportSink, Section, Status, StatusKind, Table};
pub use crate::solve_outcome::{FailureOutcome, SolveOutcome};
pub use crate::solver::{Config, Sweep, Trace};
pub use crate::system::LinearSystem;
pub use crate::update::UpdateFunction;

use crate::update::compile;

/// Diagonal-dominance test run before iterating.
mod convergence;
/// Turning each step of a solve into a report section.
mod derivation;
mod error;
/// Number formatting for expressions and tables.
pub mod format;
/// Row-normalized form of the system.
mod iteration;
/// Report structure and rendering.
mod report;
mod solve_outcome;
/// The sweep loop.
mod solver;
mod system;
/// Unit tests
#[cfg(test)]
mod tests;
/// Parser for textual representation of these problems.
pub mod textual;
/// Per-unknown update formulas.
pub mod update;

/// Section titles, in the order they appear in a report.
pub mod titles {
    /// The system as given.
    pub const LINEAR_SYSTEM: &str = "Linear system";
    /// Diagonal-dominance check.
    pub const CONVERGENCE: &str = "Check on convergence";
    /// Rearranged update formulas.
    pub const ITERATION_SYSTEM: &str = "Iteration system";
    /// One row per sweep.
    pub const RESULT_TABLE: &str = "Result table";
    /// How well the final approximation satisfies the system.
    pub const RESIDUAL: &str = "Residual";
}

struct Pipeline {
    check: ConvergenceCheck,
    /// `None` if the convergence check failed and nothing was iterated.
    iterated: Option<Iterated>,
}

struct Iterated {
    updates: Vec<UpdateFunction>,
    trace: Trace,
}

fn run_pipeline(system: &LinearSystem, config: &Config) -> Result<Pipeline, Error> {
    config.validate()?;
    let check = ConvergenceCheck::check(system);
    if !check.passed {
        return Ok(Pipeline {
            check,
            iterated: None,
        });
    }
    let iteration = IterationSystem::build(system)?;
    let updates = compile(&iteration);
    let trace = solver::iterate(&updates, config);
    Ok(Pipeline {
        check,
        iterated: Some(Iterated { updates, trace }),
    })
}

/// Solve the system and explain how, step by step.
///
/// A failed convergence check, or running out of sweeps, is not an `Err`: the report
/// ends with a section whose status is [`StatusKind::Error`] saying why.
/// Errors are only returned for unusable input, i.e. a bad config or a zero on the diagonal.
pub fn gauss_seidel(system: &LinearSystem, config: Config) -> Result<Report, Error> {
    let pipeline = run_pipeline(system, &config)?;
    let precision = config.precision;

    let mut report = Report::default();
    report.push(derivation::linear_system(system, precision));
    report.push(derivation::convergence(system, &pipeline.check, precision));
    let Some(Iterated { updates, trace }) = pipeline.iterated else {
        return Ok(report);
    };
    report.push(derivation::iteration_system(&updates, precision));
    report.push(derivation::result_table(&trace, precision));
    if trace.converged {
        let residual = system.residual_norm(&trace.solution);
        report.push(derivation::residual(residual, config.epsilon));
    }
    Ok(report)
}

/// Solve the system, without building a report.
pub fn solve(system: &LinearSystem, config: Config) -> Result<SolveOutcome, FailureOutcome> {
    let Pipeline { check, iterated } = run_pipeline(system, &config)?;
    let Some(Iterated { trace, .. }) = iterated else {
        return Err(FailureOutcome {
            error: Error::ConvergenceCheckFailed {
                rows: check.failing_rows(),
            },
            check: Some(check),
            sweeps: Vec::new(),
        });
    };
    if !trace.converged {
        return Err(FailureOutcome {
            error: Error::DidNotConverge {
                sweeps: trace.num_sweeps(),
            },
            check: Some(check),
            sweeps: trace.sweeps,
        });
    }
    let residual = system.residual_norm(&trace.solution);
    Ok(SolveOutcome {
        solution: trace.solution,
        sweeps: trace.sweeps,
        check,
        residual,
    })
}
