//! # Linear programs in standard maximization form
//!
//! maximize   sum_{j} c[j] * x[j]
//! subject to sum_{j} a[i][j] * x[j] <= b[i] (for all i)
//!            x[j] >= 0 (for all j)
use itertools::izip;

use crate::algorithm::error::Error;
use crate::algorithm::simplex;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Value;

/// A validated linear program, together with the accuracy used to solve it.
///
/// Owned by the caller; solving works on a copy.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Objective coefficients, one for each variable.
    c: Vec<F>,
    /// Constraint coefficients, row major. Each row has as many values as `c`.
    a: Vec<Vec<F>>,
    /// Right-hand side, one value for each row of `a`.
    b: Vec<F>,
    /// Tolerance used when deciding whether a relative cost is negative.
    accuracy: F,
}

impl<F: Value> StandardForm<F> {
    /// Create a new linear program after checking its dimensions and accuracy.
    ///
    /// No numeric work happens before these checks pass.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective coefficients of length `n`.
    /// * `a`: Constraint matrix with `m` rows of length `n`.
    /// * `b`: Right-hand side of length `m`.
    /// * `accuracy`: Strictly positive tolerance.
    ///
    /// # Errors
    ///
    /// `Error::Shape` if the dimensions don't agree, `Error::InvalidAccuracy` if the accuracy is not
    /// positive.
    pub fn new(c: Vec<F>, a: Vec<Vec<F>>, b: Vec<F>, accuracy: F) -> Result<Self, Error> {
        if a.len() != b.len() {
            return Err(Error::Shape {
                reason: format!(
                    "the matrix has {} rows, but the right-hand side has length {}",
                    a.len(), b.len(),
                ),
            });
        }
        if let Some((i, row)) = a.iter().enumerate().find(|(_, row)| row.len() != c.len()) {
            return Err(Error::Shape {
                reason: format!(
                    "row {} of the matrix has {} columns, but the objective has length {}",
                    i, row.len(), c.len(),
                ),
            });
        }
        // Also rejects NaN
        if !(accuracy > F::zero()) {
            return Err(Error::InvalidAccuracy);
        }

        Ok(Self { c, a, b, accuracy })
    }

    /// Solve this problem with the tableau method.
    ///
    /// See `algorithm::simplex::solve_standard_form`.
    pub fn solve(&self) -> Result<Solution<F>, Error> {
        simplex::solve_standard_form(self)
    }

    /// Value of the objective function at `x`.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        dot(&self.c, x)
    }

    /// Whether `x` satisfies all constraints and is nonnegative, within `tolerance`.
    pub fn is_feasible(&self, x: &[F], tolerance: F) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        x.iter().all(|&value| value >= -tolerance)
            && izip!(&self.a, &self.b).all(|(row, &b)| dot(row, x) <= b + tolerance)
    }

    /// Objective coefficients.
    pub fn c(&self) -> &[F] {
        &self.c
    }

    /// Constraint matrix rows.
    pub fn a(&self) -> &[Vec<F>] {
        &self.a
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Tolerance.
    pub fn accuracy(&self) -> F {
        self.accuracy
    }

    /// Number of variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

fn dot<F: Value>(left: &[F], right: &[F]) -> F {
    izip!(left, right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}
