//! # Preparing the extended matrix
//!
//! Rows with a negative right-hand side are multiplied by `-1` and receive a surplus column. Every
//! other row will receive a slack column while the basis is built. All columns are allocated here,
//! at once, so the matrix never grows afterwards.
//!
//! The indexing for the columns is as follows:
//!
//! /                || Vars of which we want a solution | Surplus vars (t) | Slack vars (s) |
//! =================||==================================|==================|================| -----
//! Plain      (<=)  ||           coefficients           |        0         |       I        | | b |
//! -----------------||----------------------------------|------------------|----------------| |---|
//! Superplus (-<=)  ||          -coefficients           |       -I         |       0        | |-b |
//! -------------------------------------------------------------------------------------------  -----
//!
//! Rows keep their original order; the picture groups them by kind only for readability.
use std::ops::Range;

use cumsum::cumsum_array_owned;
use enum_map::{EnumMap, enum_map};
use log::debug;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ColumnKind, RowKind};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Value;

/// Where each group of columns ends in the extended matrix.
///
/// Derived from the number of original variables and the kinds of the rows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnLayout {
    column_group_end: EnumMap<ColumnKind, usize>,
}

impl ColumnLayout {
    /// Compute the final column count up front.
    ///
    /// # Arguments
    ///
    /// * `nr_original`: Number of variables of the original problem.
    /// * `row_kinds`: Kind of each row, in row order.
    pub fn new(nr_original: usize, row_kinds: &[RowKind]) -> Self {
        let mut counts = EnumMap::<RowKind, usize>::default();
        for &kind in row_kinds {
            counts[kind] += 1;
        }

        let cumulative = cumsum_array_owned([
            nr_original,
            counts[RowKind::Superplus],
            counts[RowKind::Plain],
        ]);
        let column_group_end = enum_map! {
            ColumnKind::Original => cumulative[0],
            ColumnKind::Surplus  => cumulative[1],
            ColumnKind::Slack    => cumulative[2],
        };

        Self { column_group_end }
    }

    /// Range of column indices belonging to a group.
    pub fn range(&self, kind: ColumnKind) -> Range<usize> {
        let start = match kind {
            ColumnKind::Original => 0,
            ColumnKind::Surplus => self.column_group_end[ColumnKind::Original],
            ColumnKind::Slack => self.column_group_end[ColumnKind::Surplus],
        };

        start..self.column_group_end[kind]
    }

    /// Classify a column by type using the column index.
    ///
    /// # Return value
    ///
    /// The group of the column and the index of the column within that group.
    pub fn column_kind(&self, j: usize) -> (ColumnKind, usize) {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnKind::Original] {
            (ColumnKind::Original, j)
        } else if j < self.column_group_end[ColumnKind::Surplus] {
            (ColumnKind::Surplus, j - self.column_group_end[ColumnKind::Original])
        } else {
            (ColumnKind::Slack, j - self.column_group_end[ColumnKind::Surplus])
        }
    }

    /// Number of variables of the original problem, `n`.
    pub fn nr_original(&self) -> usize {
        self.column_group_end[ColumnKind::Original]
    }

    /// Total number of columns of the extended matrix, `n'`.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnKind::Slack]
    }
}

/// The constraint rows after the sign normalization.
///
/// Owns its own copy of the constraint data; the problem it was derived from is left alone.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedMatrix<F> {
    /// Size `m` x `n'`. Slack columns are still zero after preprocessing.
    pub(super) constraints: DenseMatrix<F>,
    /// Nonnegative right-hand side of length `m`.
    pub(super) b: Vec<F>,
    pub(super) row_kinds: Vec<RowKind>,
    pub(super) layout: ColumnLayout,
}

impl<F: Value> ExtendedMatrix<F> {
    /// Index of the column that is dedicated to row `i`.
    ///
    /// For a superplus row that is its surplus column, for a plain row its slack column. Columns
    /// within a group are ordered by row, so the index is the number of earlier rows of the same
    /// kind, shifted to the start of the group.
    pub fn dedicated_column(&self, i: usize) -> usize {
        debug_assert!(i < self.nr_rows());

        let kind = self.row_kinds[i];
        let rank = self.row_kinds[..i].iter().filter(|&&other| other == kind).count();
        let group = match kind {
            RowKind::Superplus => ColumnKind::Surplus,
            RowKind::Plain => ColumnKind::Slack,
        };

        self.layout.range(group).start + rank
    }

    /// Kind of row `i`.
    pub fn row_kind(&self, i: usize) -> RowKind {
        self.row_kinds[i]
    }

    /// Value at row `i` and column `j`.
    pub fn get(&self, i: usize, j: usize) -> F {
        self.constraints[(i, j)]
    }

    /// Right-hand side, nonnegative for every row.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Column groups.
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Number of constraint rows, `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of columns, `n'`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }
}

/// Normalize the rows of a problem such that the right-hand side is nonnegative.
///
/// For each row with `b[i] < 0`, the row and `b[i]` are negated and a surplus column with value
/// `-1` at row `i` (zero elsewhere) is set. Other rows are copied unchanged; their slack column is
/// left to the basis construction.
///
/// # Arguments
///
/// * `problem`: Validated problem, which is only read.
///
/// # Return value
///
/// The extended matrix with its final number of columns.
pub fn preprocess<F: Value>(problem: &StandardForm<F>) -> ExtendedMatrix<F> {
    let row_kinds = problem.b().iter()
        .map(RowKind::from_right_hand_side)
        .collect::<Vec<_>>();
    let layout = ColumnLayout::new(problem.nr_variables(), &row_kinds);

    let mut extended = ExtendedMatrix {
        constraints: DenseMatrix::zeros(problem.nr_constraints(), layout.nr_columns()),
        b: problem.b().to_vec(),
        row_kinds,
        layout,
    };

    for (i, row) in problem.a().iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            extended.constraints[(i, j)] = value;
        }

        if extended.row_kinds[i] == RowKind::Superplus {
            extended.constraints.multiply_row(i, -F::one());
            extended.b[i] = -extended.b[i];

            let surplus = extended.dedicated_column(i);
            extended.constraints[(i, surplus)] = -F::one();
        }
    }

    debug!(
        "preprocessed {} rows, {} flipped; columns: {} original, {} surplus, {} slack",
        extended.nr_rows(),
        extended.layout.range(ColumnKind::Surplus).len(),
        extended.layout.range(ColumnKind::Original).len(),
        extended.layout.range(ColumnKind::Surplus).len(),
        extended.layout.range(ColumnKind::Slack).len(),
    );

    extended
}
