use crate::{
    IterationSystem,
    format::{Position, format_number},
};

/// Computes the next value of one unknown from the current approximation.
///
/// For unknown `i` this is `x_i = b'_i - Σ_{j≠i} a'_ij x_j`.
/// Callers pass the approximation they're updating in place,
/// so entries before `i` already hold this sweep's values.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFunction {
    /// Which unknown this function solves for.
    index: usize,
    /// `b'_i`
    constant: f64,
    /// `(j, -a'_ij)` for every `j ≠ i`, in column order.
    terms: Vec<(usize, f64)>,
}

impl UpdateFunction {
    /// Which unknown this function solves for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Evaluate against the current approximation.
    #[inline]
    pub fn eval(&self, x: &[f64]) -> f64 {
        self.terms
            .iter()
            .fold(self.constant, |acc, &(j, coefficient)| {
                acc + coefficient * x[j]
            })
    }

    /// Render as an iteration formula, e.g. `x1(k+1) = 0.05 - 0.12*x0(k+1) - 0.03*x2(k)`.
    /// Unknowns before this one have already been updated this sweep, so they're marked `(k+1)`.
    pub fn formula(&self, precision: Option<usize>) -> String {
        let mut expression = format_number(self.constant, Position::Leading, precision);
        for &(j, coefficient) in &self.terms {
            let sweep = if j < self.index { "k+1" } else { "k" };
            expression.push_str(&format_number(coefficient, Position::Following, precision));
            expression.push_str(&format!("*x{j}({sweep})"));
        }
        format!("x{}(k+1) = {expression}", self.index)
    }
}

/// Build one update function per unknown, in index order.
pub fn compile(iteration: &IterationSystem) -> Vec<UpdateFunction> {
    iteration
        .matrix()
        .iter()
        .zip(iteration.rhs())
        .enumerate()
        .map(|(index, (row, &constant))| UpdateFunction {
            index,
            constant,
            terms: row
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != index)
                .map(|(j, a_ij)| (j, -a_ij))
                .collect(),
        })
        .collect()
}
