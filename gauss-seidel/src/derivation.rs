use crate::{
    Cell, ConvergenceCheck, LinearSystem, Section, Status, Table, Trace, UpdateFunction,
    format::{Position, format_number},
    titles,
};

fn position(first: bool) -> Position {
    if first {
        Position::Leading
    } else {
        Position::Following
    }
}

/// One row per equation, e.g. `3.8570*x0 + 0.2390*x1 = 0.1900`.
pub(crate) fn linear_system(system: &LinearSystem, precision: Option<usize>) -> Section {
    let mut section = Section::new(titles::LINEAR_SYSTEM);
    for (row, rhs) in system.matrix().iter().zip(system.rhs()) {
        let mut expression = String::new();
        for (j, a_ij) in row.iter().enumerate() {
            expression.push_str(&format_number(*a_ij, position(j == 0), precision));
            expression.push_str(&format!("*x{j}"));
        }
        let rhs = format_number(*rhs, Position::Leading, precision);
        section.table.push(vec![format!("{expression} = {rhs}").into()]);
    }
    section.status = Some(Status::ok());
    section
}

/// One row per equation, comparing the diagonal to the rest of the row.
pub(crate) fn convergence(
    system: &LinearSystem,
    check: &ConvergenceCheck,
    precision: Option<usize>,
) -> Section {
    let mut section = Section::new(titles::CONVERGENCE);
    section.table = Table::with_head(["check", "isCorrect"]);
    for (i, (row, row_check)) in system.matrix().iter().zip(&check.rows).enumerate() {
        let terms: String = row
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .enumerate()
            .map(|(nth, (_, a_ij))| format_number(*a_ij, position(nth == 0), precision))
            .collect();
        let diagonal = format_number(row_check.diagonal, Position::Leading, precision);
        let sum = format_number(row_check.off_diagonal_sum, Position::Leading, precision);
        let comparison = if terms.is_empty() {
            format!("{diagonal} > {sum}")
        } else {
            format!("{diagonal} > {terms} = {sum}")
        };
        section
            .table
            .push(vec![comparison.into(), row_check.passed.into()]);
    }
    section.status = Some(if check.passed {
        Status::ok()
    } else {
        Status::error("Convergence check failed")
    });
    section
}

/// One formula per unknown.
pub(crate) fn iteration_system(updates: &[UpdateFunction], precision: Option<usize>) -> Section {
    let mut section = Section::new(titles::ITERATION_SYSTEM);
    for update in updates {
        section.table.push(vec![update.formula(precision).into()]);
    }
    section.status = Some(Status::ok());
    section
}

/// One row per sweep: `k`, each unknown, and the largest change.
pub(crate) fn result_table(trace: &Trace, precision: Option<usize>) -> Section {
    let mut section = Section::new(titles::RESULT_TABLE);
    let dim = trace.solution.len();
    section.table = Table::with_head(
        std::iter::once("k".to_owned())
            .chain((0..dim).map(|i| format!("x{i}")))
            .chain(std::iter::once("delta".to_owned())),
    );
    let number = |value: f64| Cell::Number { value, precision };
    for sweep in &trace.sweeps {
        let mut row: Vec<Cell> = Vec::with_capacity(dim + 2);
        row.push(sweep.index.into());
        row.extend(sweep.values.iter().copied().map(number));
        row.push(match sweep.max_difference {
            Some(difference) => number(difference),
            None => "-".into(),
        });
        section.table.push(row);
    }
    section.status = Some(if trace.converged {
        Status::ok()
    } else {
        Status::error(format!(
            "Did not converge within {} sweeps",
            trace.num_sweeps()
        ))
    });
    section
}

/// How far the final approximation is from satisfying the system.
pub(crate) fn residual(residual: f64, epsilon: f64) -> Section {
    let mut section = Section::new(titles::RESIDUAL);
    section.text = Some(format!("max |Ax - b| = {residual:e}"));
    section.status = Some(if residual < epsilon {
        Status::ok()
    } else {
        Status::warn(format!(
            "Residual is not below the tolerance {epsilon}; consider a smaller epsilon"
        ))
    });
    section
}
