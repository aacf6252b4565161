//! Dense and sparse tableaus on generated problems.
use approx::assert_relative_eq;

use twophase::algorithm::builder::PrimalSolver;
use twophase::algorithm::LinearSolver;
use twophase::algorithm::options::{Options, Representation};
use twophase::algorithm::two_phase::iteration_point::Phase;
use twophase::algorithm::two_phase::Step;
use twophase::algorithm::two_phase::tableau::{infeasible_rows, is_optimal, Tableau};
use twophase::data::linear_program::solution::{Solution, State};

use super::Generated;

const TOLERANCE: f64 = 1e-8;

/// Step until termination, checking the tableau after every pivot.
fn solve_checked(solver: &mut PrimalSolver) -> Solution {
    let mut previous_phase = Phase::One;
    loop {
        match solver.step() {
            Step::Pivot(point) => {
                let tableau = solver.to_dense();
                assert!(infeasible_rows(&tableau, TOLERANCE).is_empty(), "{}", tableau);
                assert!(tableau.basis().is_consistent());
                assert!(!(previous_phase == Phase::Two && point.phase == Phase::One));
                previous_phase = point.phase;
            },
            Step::Done(state) => {
                assert!(state.is_terminal());
                break;
            },
        }
    }

    solver.solve()
}

fn problems() -> Vec<Generated> {
    vec![
        Generated::packing(1, 1),
        Generated::packing(3, 4),
        Generated::packing(6, 5),
        Generated::packing(10, 12),
        Generated::covering(2, 3),
        Generated::covering(4, 7),
        Generated::covering(8, 9),
    ]
}

#[test]
fn same_results() {
    for problem in problems() {
        let mut dense = problem.build(Options::default().with_representation(Representation::Dense));
        let mut sparse = problem.build(Options::default().with_representation(Representation::Sparse));
        assert_eq!(dense.representation(), Representation::Dense);
        assert_eq!(sparse.representation(), Representation::Sparse);

        let dense_solution = solve_checked(&mut dense);
        let sparse_solution = solve_checked(&mut sparse);

        assert_eq!(dense_solution.state, State::Optimal);
        assert_eq!(sparse_solution.state, State::Optimal);
        assert_relative_eq!(dense_solution.objective_value, sparse_solution.objective_value, max_relative = TOLERANCE);
        assert!(problem.violation(&dense_solution.primal) < TOLERANCE);
        assert!(problem.violation(&sparse_solution.primal) < TOLERANCE);
    }
}

#[test]
fn materialized_sparse_tableau() {
    for problem in problems() {
        let mut dense = problem.build(Options::default().with_representation(Representation::Dense));
        let mut sparse = problem.build(Options::default().with_representation(Representation::Sparse));
        dense.solve();
        sparse.solve();

        let from_sparse = sparse.to_dense();
        let from_dense = dense.to_dense();
        assert_relative_eq!(from_sparse.objective_value(), from_dense.objective_value(), max_relative = TOLERANCE);
        assert!(is_optimal(&from_sparse, Phase::Two, TOLERANCE));
        assert_eq!(from_sparse.extract_solution(), sparse.extract_solution());
    }
}

#[test]
fn optimality_certificate() {
    for problem in problems() {
        let mut solver = problem.build(Options::default().with_validate(true));
        let solution = solver.solve();
        assert_eq!(solution.state, State::Optimal);

        let tableau = solver.to_dense();
        assert!(is_optimal(&tableau, Phase::Two, TOLERANCE));

        // Weak duality holds with equality: b^T y = c^T x
        let multipliers = solution.multipliers.unwrap();
        let dual_objective = multipliers.iter().zip(&problem.b).map(|(y, b)| y * b).sum::<f64>();
        assert_relative_eq!(dual_objective, solution.objective_value, epsilon = TOLERANCE, max_relative = TOLERANCE);
    }
}

#[test]
fn automatic_choice() {
    let problem = Generated::packing(10, 12);
    // 12 rows of 10 + 12 + 10 + 1 cells
    let cells = 12 * 33;
    let fits = problem.build(Options::default().with_cache_budget(cells * 8));
    assert_eq!(fits.representation(), Representation::Dense);
    let too_large = problem.build(Options::default().with_cache_budget(cells * 8 - 1));
    assert_eq!(too_large.representation(), Representation::Sparse);
}
