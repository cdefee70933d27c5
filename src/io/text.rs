//! # Plain text problem descriptions
//!
//! Meaningful lines, in order: the objective coefficients, the number of inequalities `m`, `m`
//! rows of the constraint matrix, the right-hand side (absent when `m` is zero) and the accuracy.
//! Values are separated by whitespace. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # maximize 3 x0 + 4 x1
//! 3 4
//! 2
//! 1 1
//! 2 3
//! 55 120
//! 1e-9
//! ```
use std::convert::TryFrom;
use std::str::FromStr;

use crate::algorithm::error::Error;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::Value;
use crate::io::error::{FileLocation, ParseError};

/// A problem as read from text, not yet validated.
///
/// Rows of unequal length are kept as they are; `StandardForm::try_from` reports them.
#[derive(Clone, Debug, PartialEq)]
pub struct RawProblem<F> {
    /// Objective coefficients.
    pub c: Vec<F>,
    /// Constraint rows.
    pub a: Vec<Vec<F>>,
    /// Right-hand side.
    pub b: Vec<F>,
    /// Tolerance on the relative costs.
    pub accuracy: F,
}

impl<F> RawProblem<F> {
    /// Replace the accuracy that was read.
    pub fn with_accuracy(self, accuracy: F) -> Self {
        Self { accuracy, ..self }
    }
}

impl<F: Value> TryFrom<RawProblem<F>> for StandardForm<F> {
    type Error = Error;

    fn try_from(raw: RawProblem<F>) -> Result<Self, Self::Error> {
        StandardForm::new(raw.c, raw.a, raw.b, raw.accuracy)
    }
}

/// Parse a problem description.
///
/// # Errors
///
/// If a line is missing, a value can't be parsed, or there is content after the accuracy.
pub fn parse<F: Value + FromStr>(text: &str) -> Result<RawProblem<F>, ParseError> {
    let mut lines = text.lines()
        .enumerate()
        .map(|(index, line)| (index as u64 + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));
    let mut next = |expected: &str| lines.next()
        .ok_or_else(|| ParseError::new(format!("unexpected end of input, expected {}", expected)));

    let c = parse_values(next("the objective coefficients")?)?;

    let location = next("the number of inequalities")?;
    let nr_rows = parse_single::<usize>(location, "number of inequalities")?;

    let a = (0..nr_rows)
        .map(|i| next(&format!("row {} of the constraint matrix", i)).and_then(parse_values))
        .collect::<Result<Vec<_>, _>>()?;

    let b = if nr_rows > 0 {
        parse_values(next("the right-hand side")?)?
    } else {
        Vec::new()
    };

    let accuracy = parse_single(next("the accuracy")?, "accuracy")?;

    if let Some(location) = lines.next() {
        return Err(ParseError::with_file_location("unexpected content after the accuracy", location));
    }

    Ok(RawProblem { c, a, b, accuracy })
}

/// All whitespace separated values on a line.
fn parse_values<F: FromStr>(location: FileLocation) -> Result<Vec<F>, ParseError> {
    let (_, line) = location;
    line.split_whitespace()
        .map(|token| parse_token(token, location))
        .collect()
}

/// A line holding exactly one value.
fn parse_single<T: FromStr>(location: FileLocation, name: &str) -> Result<T, ParseError> {
    let (_, line) = location;
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_token(token, location),
        _ => Err(ParseError::with_file_location(
            format!("expected a single value for the {}", name),
            location,
        )),
    }
}

fn parse_token<T: FromStr>(token: &str, location: FileLocation) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::with_file_location(
        format!("could not parse \"{}\"", token),
        location,
    ))
}
