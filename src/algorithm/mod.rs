//! # Algorithms
pub mod error;
pub mod simplex;
