use std::convert::TryFrom;
use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use tableau_simplex::data::linear_program::standard_form::StandardForm;
use tableau_simplex::io::{import, read};
use tableau_simplex::io::error::ImportError;
use tableau_simplex::io::text::RawProblem;

/// Maximize c^T x subject to A x <= b and x >= 0 with the tableau Simplex method.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// File containing the problem description, read from standard input when absent
    #[arg(value_name = "FILE")]
    problem_file: Option<PathBuf>,

    /// Override the accuracy given in the problem description
    #[arg(short, long, value_name = "VALUE")]
    accuracy: Option<f64>,

    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let raw: RawProblem<f64> = match read_problem(&opts) {
        Ok(raw) => raw,
        Err(error) => {
            eprintln!("{}", error);
            exit(2);
        },
    };
    let raw = match opts.accuracy {
        Some(accuracy) => raw.with_accuracy(accuracy),
        None => raw,
    };

    let result = StandardForm::try_from(raw)
        .and_then(|problem| problem.solve().map(|solution| (problem, solution)));
    match result {
        Ok((problem, solution)) => {
            debug!("solution is feasible: {}", problem.is_feasible(solution.x(), problem.accuracy()));
            println!("{}", solution);
        },
        Err(error) => {
            println!("{}", error);
            println!("The method is not applicable!");
            exit(1);
        },
    }
}

fn read_problem(opts: &Opts) -> Result<RawProblem<f64>, ImportError> {
    match &opts.problem_file {
        Some(path) => import(path),
        None => read(io::stdin().lock()),
    }
}
