//! # Selecting the initial basis
//!
//! Every constraint row needs a column that is `1` in that row and `0` in all others. Plain rows get
//! their slack column. Rows that were multiplied by `-1` can only use a unit column that the caller
//! already supplied: their own surplus column has value `-1` and never qualifies. No artificial
//! variables are introduced when such a column is missing; the problem is rejected instead.
use log::debug;

use crate::algorithm::error::Error;
use crate::algorithm::simplex::preprocess::ExtendedMatrix;
use crate::data::linear_program::elements::RowKind;
use crate::data::number_types::traits::Value;

/// For each constraint row, the index of the column of its basic variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basis {
    columns: Vec<usize>,
}

impl Basis {
    /// Column of the basic variable of row `i`.
    pub fn column_for_row(&self, i: usize) -> usize {
        self.columns[i]
    }

    /// Whether a column is in the basis.
    pub fn contains(&self, j: usize) -> bool {
        self.columns.contains(&j)
    }

    /// Let column `j` replace the basic variable of row `i`.
    pub fn replace(&mut self, i: usize, j: usize) {
        debug_assert!(!self.contains(j));

        self.columns[i] = j;
    }

    /// Number of basic variables, one for each row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Basis columns in row order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().copied()
    }
}

/// Set the slack columns and choose a basic column for each row.
///
/// Rows are treated in order. A superplus row takes the left-most column that has exactly `1` in
/// that row and exactly `0` in every other row. A plain row gets the `1` of its slack column.
///
/// # Arguments
///
/// * `extended`: Output of the preprocessing step, of which the slack columns are still zero.
///
/// # Return value
///
/// The completed extended matrix and the initial basis.
///
/// # Errors
///
/// `Error::InfeasibleBasis` when a superplus row has no unit column.
pub fn build<F: Value>(
    mut extended: ExtendedMatrix<F>,
) -> Result<(ExtendedMatrix<F>, Basis), Error> {
    let mut columns = Vec::with_capacity(extended.nr_rows());

    for i in 0..extended.nr_rows() {
        let column = match extended.row_kind(i) {
            RowKind::Superplus => find_unit_column(&extended, i)
                .ok_or(Error::InfeasibleBasis { row: Some(i) })?,
            RowKind::Plain => {
                let slack = extended.dedicated_column(i);
                extended.constraints[(i, slack)] = F::one();
                slack
            },
        };
        columns.push(column);
    }

    // Consistency check: one basic column for each row
    if columns.len() < extended.nr_rows() {
        return Err(Error::InfeasibleBasis { row: None });
    }

    debug!("initial basis: {:?}", columns);
    Ok((extended, Basis { columns }))
}

/// Left-most column that is `1` in row `i` and `0` in every other row.
///
/// Compares exactly, without tolerance.
fn find_unit_column<F: Value>(extended: &ExtendedMatrix<F>, i: usize) -> Option<usize> {
    (0..extended.nr_columns())
        .filter(|&j| extended.get(i, j) == F::one())
        .find(|&j| {
            (0..extended.nr_rows())
                .filter(|&p| p != i)
                .all(|p| extended.get(p, j) == F::zero())
        })
}
