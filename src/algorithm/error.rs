//! # Reasons a problem can't be solved
//!
//! The tableau method either finds an optimum or stops at the first obstacle; nothing is retried
//! and no partial result is returned.
use thiserror::Error;

/// Why `solve` failed.
///
/// Each variant carries the context that was available at the point of detection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dimensions of the objective, the constraint matrix and the right-hand side don't agree.
    ///
    /// The contained `String` describes the mismatch for the end user.
    #[error("shape of matrix with coefficients for the inequalities is not valid: {reason}")]
    Shape {
        /// Which dimension doesn't match.
        reason: String,
    },
    /// The accuracy is not a positive number.
    #[error("accuracy value is not valid")]
    InvalidAccuracy,
    /// No initial basic column could be found.
    ///
    /// Only rows that were multiplied by `-1` can cause this: they need a unit column that was
    /// already present in the problem.
    #[error("simplex method can not be used to solve this task{}", row_suffix(.row))]
    InfeasibleBasis {
        /// The row for which no basic column exists, if known.
        row: Option<usize>,
    },
    /// The objective can be increased without bound along the entering column.
    #[error("leaving variable can not be defined for entering column {column}")]
    Unbounded {
        /// Entering column without a positive entry.
        column: usize,
    },
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(": no unit column for row {row}"),
        None => String::new(),
    }
}

/// Error kind without context, see `Error`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Shape,
    InvalidAccuracy,
    InfeasibleBasis,
    Unbounded,
}

impl Error {
    /// Forget the context of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape { .. } => ErrorKind::Shape,
            Error::InvalidAccuracy => ErrorKind::InvalidAccuracy,
            Error::InfeasibleBasis { .. } => ErrorKind::InfeasibleBasis,
            Error::Unbounded { .. } => ErrorKind::Unbounded,
        }
    }
}
