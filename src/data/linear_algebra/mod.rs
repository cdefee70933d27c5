//! # Linear algebra primitives
//!
//! Dense storage for the tableau. Problems solved with the tableau method are small enough that a
//! sparse representation doesn't pay off.
pub mod matrix;
