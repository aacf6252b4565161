//! # Representation of solver results
//!
//! Once the simplex iterations stop, the tableau is read out into a `Solution`: the state the
//! algorithm ended in together with the values of the current basic solution.

/// Where the algorithm is, or where it stopped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum State {
    /// No feasible solution found yet.
    Unexplored,
    /// A feasible solution was found, but it is not (yet) known to be optimal.
    Feasible,
    /// The solution is optimal.
    Optimal,
    /// There is no solution satisfying the constraints.
    Infeasible,
    /// The objective can decrease without bound.
    Unbounded,
}

impl State {
    /// Whether no further iterations can change this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Optimal | State::Infeasible | State::Unbounded)
    }

    /// Whether the current solution satisfies the constraints.
    pub fn is_feasible(self) -> bool {
        matches!(self, State::Feasible | State::Optimal | State::Unbounded)
    }

    /// Whether the solution is optimal.
    pub fn is_optimal(self) -> bool {
        self == State::Optimal
    }
}

/// The result of a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the algorithm ended.
    pub state: State,
    /// Objective value of the current solution, including the contribution of fixed variables.
    pub objective_value: f64,
    /// One value per problem and slack variable.
    pub primal: Vec<f64>,
    /// One value per constraint. Only present when the solution is optimal.
    pub multipliers: Option<Vec<f64>>,
}

impl Solution {
    /// Create a new `Solution` instance.
    pub fn new(state: State, objective_value: f64, primal: Vec<f64>, multipliers: Option<Vec<f64>>) -> Self {
        Self { state, objective_value, primal, multipliers }
    }
}
