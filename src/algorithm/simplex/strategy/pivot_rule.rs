//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::cmp::Ordering;

use itertools::Itertools;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Value;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is currently made
/// independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The entering column and its relative cost, or `None` if the tableau is optimal.
    fn select_primal_pivot_column<F: Value>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Pivot on the column with the most negative relative cost.
///
/// Ties are broken by taking the lowest column index. The tableau counts as optimal when the most
/// negative relative cost is not below minus the accuracy. There is no protection against cycling.
pub struct MostNegative;

impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Value>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        // `position_min_by` returns the first of several equal minima
        let column = (0..tableau.nr_columns())
            .map(|j| tableau.relative_cost(j))
            .position_min_by(|left, right| left.partial_cmp(right).unwrap_or(Ordering::Equal))?;
        let cost = tableau.relative_cost(column);

        if cost >= -tableau.accuracy() {
            None
        } else {
            Some((column, cost))
        }
    }
}
