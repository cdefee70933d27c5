//! # Representing linear programs
//!
//! A linear program is given in standard maximization form. The algorithm derives its own working
//! representations from it; the problem itself is never changed.
pub mod elements;
pub mod solution;
pub mod standard_form;
