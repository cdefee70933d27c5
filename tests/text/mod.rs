use std::convert::TryFrom;

use approx::assert_relative_eq;

use tableau_simplex::{ErrorKind, StandardForm};
use tableau_simplex::io::read;
use tableau_simplex::io::error::ImportError;
use tableau_simplex::io::text::parse;

#[test]
fn solve_from_text() {
    let text = "\
# Scenario with two tight constraints
3 4
2
1 1
2 3
55 120
1e-6
";
    let raw = read::<f64>(text.as_bytes()).unwrap();
    let solution = StandardForm::try_from(raw).unwrap().solve().unwrap();

    assert_relative_eq!(solution.objective_value(), 175f64, max_relative = 1e-9);
}

#[test]
fn rendered_solution() {
    let raw = parse::<f64>("1 0\n1\n2 1\n4\n1e-6").unwrap();
    let solution = StandardForm::try_from(raw).unwrap().solve().unwrap();

    assert_eq!(
        solution.to_string(),
        "Solution vector x*: [2, 0]\n\nObjective function value: 2",
    );
}

#[test]
fn accuracy_from_text_is_validated() {
    let raw = parse::<f64>("1\n1\n1\n1\n0").unwrap();
    assert_eq!(StandardForm::try_from(raw.clone()).unwrap_err().kind(), ErrorKind::InvalidAccuracy);

    assert!(StandardForm::try_from(raw.with_accuracy(1e-3)).is_ok());
}

#[test]
fn unequal_rows_reach_the_solver() {
    let raw = parse::<f64>("1 2\n2\n1 1\n1\n3 4\n1e-6").unwrap();
    assert_eq!(StandardForm::try_from(raw).unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn syntax_error() {
    match read::<f64>("1 2\n1\n1 1\n3 oops\n1e-6".as_bytes()) {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(4)),
        other => panic!("expected a parse error, got {:?}", other),
    }
}
