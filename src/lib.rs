//! # A tableau Simplex solver
//!
//! Solves linear programs of the form
//!
//! ```text
//! maximize    c^T x
//! subject to  A x <= b
//!             x >= 0
//! ```
//!
//! with a single phase of the primal Simplex method on a dense tableau, as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use tableau_simplex::solve;
//!
//! let solution = solve(
//!     vec![3f64, 4f64],
//!     vec![vec![1f64, 1f64], vec![2f64, 3f64]],
//!     vec![55f64, 120f64],
//!     1e-9,
//! ).unwrap();
//! assert!((solution.objective_value() - 175f64).abs() < 1e-9);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use algorithm::error::{Error, ErrorKind};
pub use algorithm::simplex::solve;
pub use data::linear_program::solution::Solution;
pub use data::linear_program::standard_form::StandardForm;

#[cfg(test)]
mod tests;
