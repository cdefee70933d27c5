use approx::assert_relative_eq;

use tableau_simplex::{Error, ErrorKind, solve, StandardForm};

#[test]
fn bounded_optimum() {
    let _ = env_logger::builder().is_test(true).try_init();

    let solution = solve(
        vec![3f64, 4f64],
        vec![vec![1f64, 1f64], vec![2f64, 3f64]],
        vec![55f64, 120f64],
        1e-6,
    ).unwrap();

    assert_relative_eq!(solution.x()[0], 45f64, max_relative = 1e-9);
    assert_relative_eq!(solution.x()[1], 10f64, max_relative = 1e-9);
    assert_relative_eq!(solution.objective_value(), 175f64, max_relative = 1e-9);
}

#[test]
fn infeasible_basis() {
    let result = solve(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![-5f64], 1e-6);

    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InfeasibleBasis);
    assert_eq!(error.to_string(), "simplex method can not be used to solve this task: no unit column for row 0");
}

#[test]
fn unbounded() {
    let result = solve(vec![1f64], vec![vec![-1f64]], vec![5f64], 1e-6);
    assert_eq!(result, Err(Error::Unbounded { column: 0 }));
}

#[test]
fn shape_mismatch() {
    let result = solve(vec![1f64, 2f64], vec![vec![1f64, 1f64]], vec![1f64, 2f64], 1e-6);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Shape);
}

#[test]
fn invalid_accuracy() {
    for accuracy in [0f64, -1e-6, f64::NAN] {
        let result = solve(vec![1f64], vec![vec![1f64]], vec![1f64], accuracy);
        assert_eq!(result, Err(Error::InvalidAccuracy));
    }
}

#[test]
fn greater_or_equal_row_with_explicit_unit_column() {
    // x0 + x1 >= 1 written as -x0 - x1 - x2 <= -1, where x2 does not appear elsewhere
    let problem = StandardForm::new(
        vec![2f64, 1f64, 0f64],
        vec![
            vec![1f64, 1f64, 0f64],
            vec![-1f64, -1f64, -1f64],
        ],
        vec![3f64, -1f64],
        1e-9,
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_relative_eq!(solution.objective_value(), 6f64, max_relative = 1e-12);
    assert_relative_eq!(solution.x()[0], 3f64, max_relative = 1e-12);
    assert!(problem.is_feasible(solution.x(), 1e-9));
}

#[test]
fn problem_is_left_untouched() {
    let problem = StandardForm::new(
        vec![1f64, 1f64, -1f64],
        vec![vec![1f64, 1f64, 0f64], vec![-1f64, 0f64, -1f64]],
        vec![4f64, -2f64],
        1e-6,
    ).unwrap();
    let copy = problem.clone();

    let first = problem.solve();
    assert_eq!(problem, copy);
    assert_eq!(problem.solve(), first);
}

#[test]
fn tied_ratio_test_at_large_magnitude() {
    let solution = solve(
        vec![1f64],
        vec![vec![0.9f64], vec![2.7f64]],
        vec![4.4e6, 1.32e7],
        1e-9,
    ).unwrap();

    assert_relative_eq!(solution.objective_value(), 4.4e6 / 0.9, max_relative = 1e-12);
    assert!(solution.x()[0] >= 0f64);
}

#[test]
fn supplied_unit_column_with_negative_cost_stays_basic() {
    // x1 >= 1 written as -x1 <= -1, so x1 is the basic column of the second row throughout
    let problem = StandardForm::new(
        vec![1f64, -1f64],
        vec![vec![1f64, 0f64], vec![0f64, -1f64]],
        vec![3f64, -1f64],
        1e-9,
    ).unwrap();
    let solution = problem.solve().unwrap();

    assert_eq!(solution.x(), &[3f64, 1f64]);
    assert_eq!(solution.objective_value(), problem.objective_value(solution.x()));
    assert_eq!(solution.objective_value(), 2f64);
}
