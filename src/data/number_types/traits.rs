//! # Traits
//!
//! The values stored in a tableau. Floats are not actually an ordered field because of their
//! finite precision; the accuracy of a problem absorbs the resulting rounding errors.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// All operations the simplex algorithm needs from the numbers it calculates with.
///
/// Automatically implemented for all types satisfying the trait's bounds, in particular `f32` and
/// `f64`.
pub trait Value: Float + Debug + Display {}
impl<T: Float + Debug + Display> Value for T {}
