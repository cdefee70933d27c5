//! # Reading of linear programs
//!
//! Problems are read from the plain text format described in the `text` module.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::data::number_types::traits::Value;
use crate::io::error::ImportError;
use crate::io::text::RawProblem;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// # Errors
///
/// When the file cannot be found or read, or its contents can't be parsed.
pub fn import<F: Value + FromStr>(file_path: &Path) -> Result<RawProblem<F>, ImportError> {
    debug!("reading problem file {:?}", file_path);
    read(File::open(file_path)?)
}

/// Read a problem from any source, such as standard input.
///
/// # Errors
///
/// When reading is interrupted, or the contents can't be parsed.
pub fn read<F: Value + FromStr>(mut reader: impl Read) -> Result<RawProblem<F>, ImportError> {
    let mut program = String::new();
    reader.read_to_string(&mut program)?;

    let raw = text::parse(&program)?;
    debug!("read a problem with {} variables and {} inequalities", raw.c.len(), raw.a.len());
    Ok(raw)
}
