//! # Algorithms
//!
//! The simplex iterations live in `two_phase`. The `builder` chooses a storage format and sets up
//! a solver for a problem in standard form, `dual` solves a problem with free variables through
//! its dual.
use crate::data::linear_program::solution::{Solution, State};

pub mod builder;
pub mod dual;
pub mod options;
pub mod two_phase;

/// A linear program, set up to be solved.
///
/// Running out of budget is not an error: the returned `Solution` then carries the state in which
/// the algorithm stopped.
pub trait LinearSolver {
    /// Iterate until termination or until the configured budget runs out.
    fn solve(&mut self) -> Solution;

    /// Iterate until termination or until `keep_iterating` returns false.
    ///
    /// The predicate is called before every iteration, with the number of iterations performed
    /// during this call so far.
    fn solve_with(&mut self, keep_iterating: &mut dyn FnMut(usize) -> bool) -> Solution;

    /// Where the algorithm is.
    fn state(&self) -> State;

    /// Objective value of the current solution.
    fn objective_value(&self) -> f64;

    /// Values of the variables in the current solution.
    fn extract_solution(&self) -> Vec<f64>;

    /// Dual values, one per constraint. Only meaningful once optimal.
    fn extract_multipliers(&self) -> Vec<f64>;
}
