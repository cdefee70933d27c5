//! # Number types
//!
//! The tableau is defined over a floating point type. Comparisons against zero happen either
//! exactly or against the caller's accuracy, never against a built-in epsilon.
pub mod traits;
