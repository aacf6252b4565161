//! # Solving through the dual
//!
//! A problem with free variables
//!
//! ```text
//! min c^T x
//! s.t. A_E x  = b_E
//!      A_I x <= b_I
//! ```
//!
//! has as its dual, after negating the objective, the problem
//!
//! ```text
//! min b_E^T (l+ - l-) + b_I^T u
//! s.t. A_E^T (l+ - l-) + A_I^T u = -c
//!      l+, l-, u >= 0
//! ```
//!
//! which is in standard form once the rows with a negative right hand side are negated. The
//! multipliers of the equality rows `u` are used as slack columns. The solution of the original
//! problem is read from the multipliers of the dual and vice versa.
use crate::algorithm::builder::PrimalSolver;
use crate::algorithm::LinearSolver;
use crate::algorithm::options::Options;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::convex::ConvexData;
use crate::data::linear_program::solution::{Solution, State};
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::SolverResult;

/// Solves a problem with free variables by applying the primal simplex method to its dual.
pub struct DualSimplex {
    inner: PrimalSolver,
    nr_equalities: usize,
    /// Rows of the dual that were negated to make the right hand side nonnegative.
    flipped: Vec<bool>,
}

impl DualSimplex {
    /// Set up the dual problem.
    ///
    /// # Errors
    ///
    /// If the dual is not a valid standard form problem, which can only happen when the problem
    /// data contains non finite values.
    pub fn new(data: &ConvexData, options: Options) -> SolverResult<Self> {
        let nr_variables = data.nr_variables();
        let equalities = transposed(data.equalities(), nr_variables);
        let inequalities = transposed(data.inequalities(), nr_variables);

        let mut constraints = equalities
            .hcat(&equalities.clone().scaled(-1_f64))
            .hcat(&inequalities);
        let mut b = data.cost().iter().map(|c| -c).collect::<Vec<_>>();
        let flipped = b.iter().map(|&value| value < 0_f64).collect::<Vec<_>>();
        for (row, _) in flipped.iter().enumerate().filter(|&(_, &flip)| flip) {
            constraints.multiply_row(row, -1_f64);
            b[row] = -b[row];
        }

        let cost = data.equality_rhs().iter().copied()
            .chain(data.equality_rhs().iter().map(|value| -value))
            .chain(data.inequality_rhs().iter().copied())
            .collect();
        let problem = StandardForm::new(cost, constraints, b, data.nr_inequalities())?;

        Ok(Self {
            inner: PrimalSolver::new(&problem, options),
            nr_equalities: data.nr_equalities(),
            flipped,
        })
    }

    fn solution(&self) -> Solution {
        let state = self.state();
        let multipliers = state.is_optimal().then(|| self.extract_multipliers());
        Solution::new(state, self.objective_value(), self.extract_solution(), multipliers)
    }
}

/// The state of the original problem given the state of its dual.
///
/// An unbounded dual means an infeasible original problem and the other way around. A feasible
/// dual says nothing about feasibility of the original problem, so it is still unexplored.
fn original_state(dual: State) -> State {
    match dual {
        State::Infeasible => State::Unbounded,
        State::Unbounded => State::Infeasible,
        State::Feasible => State::Unexplored,
        state => state,
    }
}

/// Transpose, keeping the number of rows when there are no columns.
fn transposed(matrix: &DenseMatrix, nr_variables: usize) -> DenseMatrix {
    if matrix.nr_rows() == 0 {
        DenseMatrix::zeros(nr_variables, 0)
    } else {
        matrix.transpose()
    }
}

impl LinearSolver for DualSimplex {
    fn solve(&mut self) -> Solution {
        self.inner.solve();
        self.solution()
    }

    fn solve_with(&mut self, keep_iterating: &mut dyn FnMut(usize) -> bool) -> Solution {
        self.inner.solve_with(keep_iterating);
        self.solution()
    }

    fn state(&self) -> State {
        original_state(self.inner.state())
    }

    fn objective_value(&self) -> f64 {
        -self.inner.objective_value()
    }

    /// The multipliers of the dual rows.
    fn extract_solution(&self) -> Vec<f64> {
        self.inner.extract_multipliers().into_iter()
            .zip(&self.flipped)
            .map(|(value, &flipped)| if flipped { -value } else { value })
            .collect()
    }

    /// The combined sign split variables of the equalities, followed by those of the
    /// inequalities.
    fn extract_multipliers(&self) -> Vec<f64> {
        let values = self.inner.extract_solution();
        let (positive, rest) = values.split_at(self.nr_equalities);
        let (negative, inequalities) = rest.split_at(self.nr_equalities);

        positive.iter().zip(negative)
            .map(|(plus, minus)| plus - minus)
            .chain(inequalities.iter().copied())
            .collect()
    }
}
