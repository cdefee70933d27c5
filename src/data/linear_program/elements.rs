//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::Enum;

/// How a constraint row enters the tableau.
///
/// Decided once, from the sign of the right-hand side, before any column is appended.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RowKind {
    /// The right-hand side is nonnegative; the row gets a slack column that is part of the initial
    /// basis.
    Plain,
    /// The right-hand side was negative, so the row was multiplied by `-1` and received a surplus
    /// column with value `-1`.
    ///
    /// The initial basis column of such a row has to be found among the existing columns.
    Superplus,
}

impl RowKind {
    /// Classify a row using its right-hand side value.
    ///
    /// Only a strictly negative value flips the row.
    #[must_use]
    pub fn from_right_hand_side<F: PartialOrd + num_traits::Zero>(value: &F) -> Self {
        if *value < F::zero() {
            RowKind::Superplus
        } else {
            RowKind::Plain
        }
    }
}

/// Indexing within the different column groups of the extended matrix.
///
/// The groups appear in this order, each group ordered by the row it belongs to.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnKind {
    /// Variables for which we want a solution.
    Original,
    /// One `-1` column for each `RowKind::Superplus` row.
    Surplus,
    /// One `+1` column for each `RowKind::Plain` row.
    Slack,
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnKind::Original => "x",
            ColumnKind::Surplus => "t",
            ColumnKind::Slack => "s",
        })
    }
}
