use proptest::collection::vec;
use proptest::prelude::*;

use tableau_simplex::{ErrorKind, solve, StandardForm};
use tableau_simplex::algorithm::simplex::basis::build;
use tableau_simplex::algorithm::simplex::preprocess::preprocess;
use tableau_simplex::algorithm::simplex::primal;
use tableau_simplex::algorithm::simplex::strategy::pivot_rule::MostNegative;
use tableau_simplex::algorithm::simplex::tableau::Tableau;

const ACCURACY: f64 = 1e-9;
const TOLERANCE: f64 = 1e-6;

/// Positive constraint coefficients and right-hand sides: feasible at the origin and bounded.
fn bounded_problem() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>, Vec<f64>)> {
    (1..5usize, 1..5usize).prop_flat_map(|(n, m)| (
        vec(0f64..10f64, n),
        vec(vec(0.1f64..10f64, n), m),
        vec(1f64..100f64, m),
    ))
}

/// One variable and rows that are multiples of each other: every row ties in the ratio test, up to
/// rounding, at right-hand sides of up to `1e8`.
fn tied_problem() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<f64>>, Vec<f64>)> {
    (0.1f64..10f64, 0.1f64..10f64, 1e5f64..1e7f64, vec(0.1f64..10f64, 1..5))
        .prop_map(|(cost, coefficient, right_hand_side, multiples)| {
            let (a, b): (Vec<Vec<f64>>, Vec<f64>) = Some(1f64).into_iter().chain(multiples)
                .map(|k| (vec![k * coefficient], k * right_hand_side))
                .unzip();
            (vec![cost], a, b)
        })
}

proptest! {
    #[test]
    fn optimum_is_feasible((c, a, b) in bounded_problem()) {
        let problem = StandardForm::new(c, a, b, ACCURACY).unwrap();
        let solution = problem.solve().unwrap();

        prop_assert!(problem.is_feasible(solution.x(), TOLERANCE));
        let value = problem.objective_value(solution.x());
        prop_assert!((value - solution.objective_value()).abs() <= TOLERANCE * (1f64 + value.abs()));
    }

    #[test]
    fn optimum_beats_single_variable_solutions((c, a, b) in bounded_problem()) {
        let problem = StandardForm::new(c.clone(), a.clone(), b.clone(), ACCURACY).unwrap();
        let optimum = problem.solve().unwrap().objective_value();

        for j in 0..c.len() {
            let largest = a.iter().zip(&b)
                .map(|(row, &b_i)| b_i / row[j])
                .fold(f64::INFINITY, f64::min);
            prop_assert!(optimum >= c[j] * largest - TOLERANCE * (1f64 + optimum.abs()));
        }
    }

    #[test]
    fn final_tableau_is_optimal_and_feasible((c, a, b) in bounded_problem()) {
        let problem = StandardForm::new(c, a, b, ACCURACY).unwrap();
        let (extended, basis) = build(preprocess(&problem)).unwrap();
        let mut tableau = Tableau::new(problem.c(), extended, basis, problem.accuracy());

        prop_assert!(primal::<_, MostNegative>(&mut tableau).is_ok());

        for j in 0..tableau.nr_columns() {
            prop_assert!(tableau.relative_cost(j) >= -ACCURACY);
            if tableau.is_in_basis(j) {
                prop_assert!(tableau.relative_cost(j).abs() <= TOLERANCE);
            }
        }
        for i in 0..tableau.nr_rows() {
            prop_assert!(tableau.constraint_value(i) >= -TOLERANCE);
        }
    }

    #[test]
    fn solving_is_deterministic((c, a, b) in bounded_problem()) {
        let first = solve(c.clone(), a.clone(), b.clone(), ACCURACY);
        let second = solve(c, a, b, ACCURACY);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn column_without_positive_entry_is_unbounded(
        (c, a, b) in bounded_problem(),
        cost in 0.1f64..10f64,
        entries in vec(-10f64..0f64, 4),
    ) {
        let c = c.into_iter().chain(Some(cost)).collect();
        let a = a.into_iter()
            .zip(entries.iter().cycle())
            .map(|(row, &entry)| row.into_iter().chain(Some(entry)).collect())
            .collect();

        let result = solve(c, a, b, ACCURACY);
        prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Unbounded);
    }

    #[test]
    fn row_length_mismatch_is_a_shape_error(
        (c, mut a, b) in bounded_problem(),
        row in 0..4usize,
        extra in 1..3usize,
    ) {
        let row = row % a.len();
        a[row].extend(std::iter::repeat_n(1f64, extra));

        prop_assert_eq!(solve(c, a, b, ACCURACY).unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn right_hand_side_mismatch_is_a_shape_error((c, a, mut b) in bounded_problem()) {
        b.push(1f64);
        prop_assert_eq!(solve(c, a, b, ACCURACY).unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn non_positive_accuracy_is_rejected((c, a, b) in bounded_problem(), accuracy in -10f64..=0f64) {
        prop_assert_eq!(solve(c, a, b, accuracy).unwrap_err().kind(), ErrorKind::InvalidAccuracy);
    }

    #[test]
    fn tied_ratios_at_large_magnitude((c, a, b) in tied_problem()) {
        let scale = b.iter().fold(1f64, |largest, value| largest.max(value.abs()));
        let problem = StandardForm::new(c, a, b, ACCURACY).unwrap();

        let solution = problem.solve();
        prop_assert!(solution.is_ok());
        let solution = solution.unwrap();

        prop_assert!(solution.x().iter().all(|&value| value >= -1e-12 * scale));
        prop_assert!(problem.is_feasible(solution.x(), 1e-12 * scale));
    }
}
