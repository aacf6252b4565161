//! Problems with free variables, solved through their dual.
use approx::{assert_abs_diff_eq, assert_relative_eq};

use twophase::algorithm::dual::DualSimplex;
use twophase::algorithm::LinearSolver;
use twophase::algorithm::options::{Options, Representation};
use twophase::data::linear_algebra::matrix::DenseMatrix;
use twophase::data::linear_program::convex::ConvexData;
use twophase::data::linear_program::solution::State;

const TOLERANCE: f64 = 1e-9;

/// min x0 - 2 x1 + x2 / 2, x0 + x1 + x2 = 1 / 2, -1 <= x <= 1
fn boxed() -> ConvexData {
    let nr_variables = 3;
    let inequalities = (0..nr_variables)
        .flat_map(|j| [1_f64, -1_f64].map(|sign| {
            (0..nr_variables).map(|k| if k == j { sign } else { 0_f64 }).collect::<Vec<_>>()
        }))
        .collect();

    ConvexData::new(
        vec![1_f64, -2_f64, 0.5_f64],
        DenseMatrix::from_data(vec![vec![1_f64; nr_variables]]),
        vec![0.5_f64],
        DenseMatrix::from_data(inequalities),
        vec![1_f64; 2 * nr_variables],
    ).unwrap()
}

#[test]
fn karush_kuhn_tucker() {
    let data = boxed();
    for representation in [Representation::Dense, Representation::Sparse] {
        let options = Options::default().with_representation(representation);
        let mut solver = DualSimplex::new(&data, options).unwrap();
        let solution = solver.solve();

        assert_eq!(solution.state, State::Optimal);
        assert_relative_eq!(solution.objective_value, -2.75_f64, epsilon = TOLERANCE);
        let x = solution.primal;
        assert_eq!(x.len(), 3);
        for (value, expected) in x.iter().zip([-1_f64, 1_f64, 0.5_f64]) {
            assert_abs_diff_eq!(*value, expected, epsilon = TOLERANCE);
        }

        let multipliers = solution.multipliers.unwrap();
        assert_eq!(multipliers.len(), data.nr_equalities() + data.nr_inequalities());
        let (lambda, mu) = multipliers.split_at(data.nr_equalities());
        assert_abs_diff_eq!(lambda[0], -0.5_f64, epsilon = TOLERANCE);

        // Stationarity
        for j in 0..data.nr_variables() {
            let gradient = data.cost()[j]
                + (0..data.nr_equalities()).map(|i| data.equalities().get_value(i, j) * lambda[i]).sum::<f64>()
                + (0..data.nr_inequalities()).map(|i| data.inequalities().get_value(i, j) * mu[i]).sum::<f64>();
            assert_abs_diff_eq!(gradient, 0_f64, epsilon = TOLERANCE);
        }
        // Dual feasibility and complementary slackness
        for (i, &m) in mu.iter().enumerate() {
            assert!(m >= -TOLERANCE);
            let lhs = data.inequalities().row(i).iter().zip(&x).map(|(a, x)| a * x).sum::<f64>();
            assert!(lhs <= data.inequality_rhs()[i] + TOLERANCE);
            assert_abs_diff_eq!(m * (data.inequality_rhs()[i] - lhs), 0_f64, epsilon = TOLERANCE);
        }
    }
}

#[test]
fn only_equalities() {
    // min x0 + x1, x0 - x1 = 1, x0 + x1 = 3
    let data = ConvexData::new(
        vec![1_f64, 1_f64],
        DenseMatrix::from_data(vec![vec![1_f64, -1_f64], vec![1_f64, 1_f64]]),
        vec![1_f64, 3_f64],
        DenseMatrix::zeros(0, 2),
        Vec::new(),
    ).unwrap();
    let mut solver = DualSimplex::new(&data, Options::default()).unwrap();
    let solution = solver.solve();

    assert_eq!(solution.state, State::Optimal);
    assert_relative_eq!(solution.objective_value, 3_f64);
    assert_relative_eq!(solution.primal[0], 2_f64);
    assert_relative_eq!(solution.primal[1], 1_f64);
    assert_eq!(solver.state(), State::Optimal);
}

#[test]
fn budget_exhausted() {
    let mut solver = DualSimplex::new(&boxed(), Options::default()).unwrap();
    let solution = solver.solve_with(&mut |_| false);
    assert_eq!(solution.state, State::Unexplored);
    assert_eq!(solution.multipliers, None);
}
