//! # The Simplex algorithm
//!
//! A single phase tableau implementation. The stages each consume the output of the previous one:
//!
//! 1. validation (`StandardForm::new`),
//! 2. sign normalization of the rows (`preprocess`),
//! 3. choice of the initial basis (`basis`),
//! 4. pivoting until optimal or unbounded (`primal`),
//! 5. reading the solution from the final tableau (`Tableau::current_bfs`).
//!
//! There is no first phase: if the initial basis can't be built from slack columns and columns
//! supplied by the caller, the problem is rejected.
use log::{debug, trace};

use crate::algorithm::error::Error;
use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Value;

pub mod basis;
pub mod preprocess;
pub mod strategy;
pub mod tableau;

/// Maximize `c^T x` subject to `A x <= b` and `x >= 0`.
///
/// Validates the input and solves it with `solve_standard_form`.
///
/// # Arguments
///
/// * `c`: Objective coefficients of length `n`.
/// * `a`: Constraint rows, `m` of them, each of length `n`.
/// * `b`: Right-hand side of length `m`.
/// * `accuracy`: Strictly positive tolerance on the relative costs.
///
/// # Errors
///
/// See `Error`: shape and accuracy problems are detected before any computation.
pub fn solve<F: Value>(
    c: Vec<F>,
    a: Vec<Vec<F>>,
    b: Vec<F>,
    accuracy: F,
) -> Result<Solution<F>, Error> {
    StandardForm::new(c, a, b, accuracy)?.solve()
}

/// Solve a validated problem.
///
/// Works on a copy of the problem data, so identical problems give identical pivot sequences and
/// results.
///
/// # Errors
///
/// `Error::InfeasibleBasis` if no initial basis exists and `Error::Unbounded` if the objective is
/// unbounded.
pub fn solve_standard_form<F: Value>(problem: &StandardForm<F>) -> Result<Solution<F>, Error> {
    let extended = preprocess::preprocess(problem);
    let (extended, basis) = basis::build(extended)?;
    let mut tableau = Tableau::new(problem.c(), extended, basis, problem.accuracy());

    let nr_pivots = primal::<_, MostNegative>(&mut tableau)?;

    let solution = tableau.current_bfs();
    debug!(
        "optimal after {} pivots, objective value {}",
        nr_pivots, solution.objective_value(),
    );
    Ok(solution)
}

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// No limit is placed on the number of pivots; degenerate problems may cycle.
///
/// # Return value
///
/// The number of pivots that were needed to reach optimality.
///
/// # Errors
///
/// `Error::Unbounded` if an entering column has no positive value.
pub fn primal<F: Value, PR: PivotRule>(tableau: &mut Tableau<F>) -> Result<usize, Error> {
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    loop {
        trace!("{}", tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => match tableau.select_primal_pivot_row(column_index) {
                Some(row_index) => {
                    debug!(
                        "pivot {}: column {} (relative cost {}) enters, column {} leaves at row {}",
                        nr_pivots,
                        column_index,
                        cost,
                        tableau.basis_column_for_row(row_index),
                        row_index,
                    );
                    tableau.bring_into_basis(column_index, row_index);
                    nr_pivots += 1;
                    debug!("objective value {}", tableau.objective_function_value());
                },
                None => {
                    debug!("column {} has no positive value, problem is unbounded", column_index);
                    break Err(Error::Unbounded { column: column_index });
                },
            },
            None => break Ok(nr_pivots),
        }
    }
}
