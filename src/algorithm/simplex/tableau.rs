//! # The simplex tableau
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau has `m + 1` rows and `n' + 1` columns. Rows `0` until `m` are the constraints, row
//! `m` is the objective row. The last column holds the right-hand side, and in the objective row
//! the current objective value.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::simplex::basis::Basis;
use crate::algorithm::simplex::preprocess::{ColumnLayout, ExtendedMatrix};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Value;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// Owns all data that changes while pivoting. Nothing outside of the tableau can observe the
/// intermediate states.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows followed by the objective row, right-hand side as the last column.
    matrix: DenseMatrix<F>,
    /// All columns currently in the basis, indexed by row.
    basis: Basis,
    layout: ColumnLayout,
    accuracy: F,
}

impl<F: Value> Tableau<F> {
    /// Create the initial tableau.
    ///
    /// The objective row holds `-c` in the original columns and zero elsewhere. If a basic column
    /// has a nonzero value in that row (only possible for an original column chosen as the unit
    /// column of a superplus row), its row is subtracted from the objective row such that all basic
    /// columns have zero relative cost before the first pivot. The objective value therefore starts
    /// at `c^T x` of the initial basic solution rather than at zero, which matters when a supplied
    /// unit column has a negative cost.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective coefficients of the original problem.
    /// * `extended`: Constraints with all slack columns set.
    /// * `basis`: Initial basis for `extended`.
    /// * `accuracy`: Tolerance of the problem.
    pub fn new(c: &[F], extended: ExtendedMatrix<F>, basis: Basis, accuracy: F) -> Self {
        debug_assert_eq!(c.len(), extended.layout().nr_original());
        debug_assert_eq!(basis.len(), extended.nr_rows());

        let nr_rows = extended.nr_rows();
        let nr_columns = extended.nr_columns();

        let mut matrix = DenseMatrix::zeros(nr_rows + 1, nr_columns + 1);
        for i in 0..nr_rows {
            for j in 0..nr_columns {
                matrix[(i, j)] = extended.get(i, j);
            }
            matrix[(i, nr_columns)] = extended.b()[i];
        }
        for (j, &cost) in c.iter().enumerate() {
            matrix[(nr_rows, j)] = -cost;
        }

        for i in 0..nr_rows {
            let cost = matrix[(nr_rows, basis.column_for_row(i))];
            if cost != F::zero() {
                matrix.mul_add_rows(i, nr_rows, -cost);
            }
        }

        let layout = extended.layout().clone();
        let tableau = Self { matrix, basis, layout, accuracy };
        debug_assert!(tableau.is_in_basic_solution_state());

        tableau
    }

    /// Determine the row to pivot on.
    ///
    /// Among the rows with a strictly positive value in the column, this is the row with the
    /// minimal ratio between the right-hand side and that value. Ties go to the lowest row index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        (0..self.nr_rows())
            .filter(|&i| self.matrix[(i, column)] > F::zero())
            .map(|i| (i, self.constraint_value(i) / self.matrix[(i, column)]))
            // Keeps the first of equal ratios
            .fold(None, |minimum: Option<(usize, F)>, (i, ratio)| match minimum {
                Some((_, min_ratio)) if min_ratio <= ratio => minimum,
                _ => Some((i, ratio)),
            })
            .map(|(i, _)| i)
    }

    /// Brings a column into the basis.
    ///
    /// The pivot row is divided by the pivot value, after which a multiple of it is subtracted
    /// from every other row (including the objective row) such that the column becomes the unit
    /// vector of the pivot row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the pivot, in range `0` until `self.nr_columns()`.
    /// Is not yet in the basis.
    /// * `pivot_row_index`: Row index of the pivot, in range `0` until `self.nr_rows()`.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot_value = self.matrix[(pivot_row_index, pivot_column_index)];
        // Division of a value by itself is exact, so the pivot becomes exactly one
        self.matrix.divide_row(pivot_row_index, pivot_value);

        for i in (0..=self.nr_rows()).filter(|&i| i != pivot_row_index) {
            let factor = self.matrix[(i, pivot_column_index)];
            if factor != F::zero() {
                self.matrix.mul_add_rows(pivot_row_index, i, -factor);
            }
        }

        self.basis.replace(pivot_row_index, pivot_column_index);
        debug_assert!(self.is_in_basic_solution_state());
    }

    /// Get the current basic feasible solution.
    ///
    /// Only the original variables are reported; basic slack, surplus and auxiliary columns are
    /// dropped.
    pub fn current_bfs(&self) -> Solution<F> {
        let mut x = vec![F::zero(); self.layout.nr_original()];
        for i in 0..self.nr_rows() {
            let j = self.basis.column_for_row(i);
            if j < self.layout.nr_original() {
                x[j] = self.constraint_value(i);
            }
        }

        Solution::new(x, self.objective_function_value())
    }

    /// Relative cost of a column: its value in the objective row.
    ///
    /// Zero for basic columns.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.matrix[(self.nr_rows(), j)]
    }

    /// Value of the basic variable of row `i`.
    pub fn constraint_value(&self, i: usize) -> F {
        debug_assert!(i < self.nr_rows());

        self.matrix[(i, self.nr_columns())]
    }

    /// Get the objective value of the current solution.
    pub fn objective_function_value(&self) -> F {
        self.matrix[(self.nr_rows(), self.nr_columns())]
    }

    /// Column of the basic variable of row `i`.
    pub fn basis_column_for_row(&self, i: usize) -> usize {
        self.basis.column_for_row(i)
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        self.basis.contains(j)
    }

    /// Single value of the constraint part of the tableau.
    pub fn get(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix[(i, j)]
    }

    /// Tolerance used for optimality decisions.
    pub fn accuracy(&self) -> F {
        self.accuracy
    }

    /// Number of constraint rows `m`, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variable columns `n'`, excluding the right-hand side.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }

    /// Check whether the basis columns form an identity matrix with zero relative cost.
    ///
    /// The right-hand side is not checked: after a tie in the ratio test, rounding can leave a
    /// value slightly below zero, proportional to the magnitude of the right-hand side. Only used
    /// for debug purposes.
    fn is_in_basic_solution_state(&self) -> bool {
        let close = |value: F, target: F| (value - target).abs() <= self.accuracy;

        (0..self.nr_rows()).all(|i| {
            let j = self.basis.column_for_row(i);
            (0..self.nr_rows()).all(|p| {
                close(self.matrix[(p, j)], if p == i { F::one() } else { F::zero() })
            }) && close(self.relative_cost(j), F::zero())
        })
    }
}

impl<F: Value> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let headers = (0..self.nr_columns())
            .map(|j| {
                let (kind, index) = self.layout.column_kind(j);
                format!("{kind}{index}")
            })
            .chain(Some("b".to_string()))
            .collect::<Vec<_>>();
        let rows = (0..=self.nr_rows())
            .map(|i| self.matrix.row(i).map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = "cost".len();
        let column_width = headers.iter().enumerate()
            .map(|(j, header)| {
                rows.iter().map(|row| row[j].len()).chain(Some(header.len())).max().unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let total_width = row_counter_width + 2 + column_width.iter().map(|w| w + 1).sum::<usize>();

        writeln!(f, "=== Tableau ===")?;
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        for (header, width) in headers.iter().zip(&column_width) {
            write!(f, " {0:^width$}", header, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        for (i, row) in rows.iter().enumerate() {
            if i == self.nr_rows() {
                writeln!(f, "{}", "-".repeat(total_width))?;
                write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
            } else {
                write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            }
            for (value, width) in row.iter().zip(&column_width) {
                write!(f, " {0:^width$}", value, width = width)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{:?}", self.basis.iter().enumerate().collect::<Vec<_>>())
    }
}
