//! Small problems of which the outcome is known.
use approx::assert_relative_eq;

use twophase::algorithm::builder::{Builder, PrimalSolver};
use twophase::algorithm::LinearSolver;
use twophase::algorithm::options::{Options, Representation};
use twophase::algorithm::two_phase::Step;
use twophase::data::linear_algebra::matrix::DenseMatrix;
use twophase::data::linear_program::solution::State;

fn solver(cost: Vec<f64>, rows: Vec<Vec<f64>>, b: Vec<f64>, nr_slack: usize, representation: Representation) -> PrimalSolver {
    Builder::new()
        .objective(cost)
        .equalities(DenseMatrix::from_data(rows), b)
        .slack_variables(nr_slack)
        .options(Options::default().with_representation(representation))
        .build()
        .unwrap()
}

const REPRESENTATIONS: [Representation; 2] = [Representation::Dense, Representation::Sparse];

#[test]
fn single_equality() {
    for representation in REPRESENTATIONS {
        let mut solver = solver(vec![1f64, 1f64], vec![vec![1f64, 1f64]], vec![1f64], 0, representation);
        let solution = solver.solve();
        assert_eq!(solution.state, State::Optimal);
        assert_relative_eq!(solution.objective_value, 1f64);
        assert_relative_eq!(solution.primal.iter().sum::<f64>(), 1f64);
        assert_eq!(solution.multipliers, Some(vec![1f64]));
    }
}

#[test]
fn contradicting_equalities() {
    for representation in REPRESENTATIONS {
        let mut solver = solver(vec![1f64], vec![vec![1f64], vec![1f64]], vec![1f64, 2f64], 0, representation);
        let solution = solver.solve();
        assert_eq!(solution.state, State::Infeasible);
        assert_eq!(solution.multipliers, None);
    }
}

#[test]
fn ratio_tie_is_reproducible() {
    let pivots = |representation| {
        let mut solver = solver(
            vec![-1f64, 0f64, 0f64],
            vec![vec![1f64, 1f64, 0f64], vec![1f64, 0f64, 1f64]],
            vec![1f64, 1f64],
            2,
            representation,
        );
        let mut taken = Vec::new();
        while let Step::Pivot(point) = solver.step() {
            taken.push(point.pivot_element());
        }
        (taken, solver.extract_solution())
    };

    let (taken, x) = pivots(Representation::Dense);
    // Both rows have ratio one, the first wins
    assert_eq!(taken, vec![Some((0, 0))]);
    assert_eq!(x, vec![1f64, 0f64, 0f64]);
    for _ in 0..3 {
        assert_eq!(pivots(Representation::Dense), (taken.clone(), x.clone()));
        assert_eq!(pivots(Representation::Sparse), (taken.clone(), x.clone()));
    }
}

#[test]
fn fix_at_optimum_and_resolve() {
    // max 3x + 2y, x + y <= 4, x <= 3, y <= 3
    for representation in REPRESENTATIONS {
        let mut solver = solver(
            vec![-3f64, -2f64, 0f64, 0f64, 0f64],
            vec![
                vec![1f64, 1f64, 1f64, 0f64, 0f64],
                vec![1f64, 0f64, 0f64, 1f64, 0f64],
                vec![0f64, 1f64, 0f64, 0f64, 1f64],
            ],
            vec![4f64, 3f64, 3f64],
            3,
            representation,
        );
        let first = solver.solve();
        assert_eq!(first.state, State::Optimal);
        assert_relative_eq!(first.objective_value, -11f64);

        for (index, &value) in first.primal.iter().enumerate() {
            solver.fix_variable(index, value).unwrap();
            let again = solver.solve();
            assert_eq!(again.state, State::Optimal);
            assert_relative_eq!(again.objective_value, first.objective_value);
            assert_eq!(again.primal, first.primal);
        }
    }
}

#[test]
fn unbounded() {
    for representation in REPRESENTATIONS {
        // min -x, x - y = 1
        let mut solver = solver(vec![-1f64, 0f64], vec![vec![1f64, -1f64]], vec![1f64], 0, representation);
        assert_eq!(solver.solve().state, State::Unbounded);
    }
}

#[test]
fn redundant_equality() {
    // min x + 2y, x + y = 2, 2x + 2y = 4
    for representation in REPRESENTATIONS {
        let mut solver = solver(
            vec![1f64, 2f64],
            vec![vec![1f64, 1f64], vec![2f64, 2f64]],
            vec![2f64, 4f64],
            0,
            representation,
        );
        let solution = solver.solve();
        assert_eq!(solution.state, State::Optimal);
        assert_relative_eq!(solution.objective_value, 2f64);
        assert_relative_eq!(solution.primal[0], 2f64);
    }
}
