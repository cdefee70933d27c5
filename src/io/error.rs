//! # Error reporting for reading of linear program files
//!
//! A collection of types describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading couldn't start or was interrupted.
    #[error("could not read the problem: {0}")]
    Io(#[from] io::Error),
    /// Contents could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// Rows of unequal length are not represented with this error. This variant is only created
    /// for syntactically incorrect input.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// When the error can be attributed to a line, the line number and line contents are kept.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("ParseError: {description}{}", location_suffix(.location))]
pub struct ParseError {
    description: String,
    location: Option<(u64, String)>,
}

/// A `FileLocation` references a line by its number, counting from 1, and its contents.
pub(super) type FileLocation<'a> = (u64, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` instance that points to a line.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of the line at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

fn location_suffix(location: &Option<(u64, String)>) -> String {
    match location {
        Some((line_number, line)) => format!("\n\tCaused at line\t{}:\t{}", line_number, line),
        None => String::new(),
    }
}
