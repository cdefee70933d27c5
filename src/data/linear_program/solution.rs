//! # Representation of optimal solutions
//!
//! Once a linear program is solved, only the values of the original variables are reported. Slack,
//! surplus and auxiliary columns are internal to the algorithm.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::data::number_types::traits::Value;

/// An optimal vertex of a linear program, together with its objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// One value for each variable of the original problem.
    x: Vec<F>,
    /// Value of the objective function at `x`.
    objective_value: F,
}

impl<F: Value> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(x: Vec<F>, objective_value: F) -> Self {
        Self { x, objective_value }
    }

    /// Values of the original variables.
    pub fn x(&self) -> &[F] {
        &self.x
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Take the solution vector and objective value out.
    pub fn into_parts(self) -> (Vec<F>, F) {
        (self.x, self.objective_value)
    }
}

impl<F: Value> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution vector x*: [{}]", self.x.iter().join(", "))?;
        writeln!(f)?;
        write!(f, "Objective function value: {}", self.objective_value)
    }
}
