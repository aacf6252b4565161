//! # Setting up a solver
//!
//! A problem in standard form is loaded into a dense or a sparse tableau, depending on its size.
use std::mem::size_of;

use crate::algorithm::LinearSolver;
use crate::algorithm::options::{Options, Representation};
use crate::algorithm::two_phase::{PrimalSimplex, Step};
use crate::algorithm::two_phase::tableau::dense::DenseTableau;
use crate::algorithm::two_phase::tableau::layout::Layout;
use crate::algorithm::two_phase::tableau::sparse::SparseTableau;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::{Solution, State};
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{SolverError, SolverResult};

/// Decide on a storage format for a tableau.
///
/// Unless a format is forced by the options, a dense tableau is used when all of its cells fit in
/// the cache budget.
pub fn choose_representation(layout: &Layout, options: &Options) -> Representation {
    match options.representation {
        Representation::Automatic => {
            let bytes = layout.nr_cells().saturating_mul(size_of::<f64>());
            if bytes <= options.cache_budget {
                Representation::Dense
            } else {
                Representation::Sparse
            }
        },
        forced => forced,
    }
}

/// Collects the parts of a problem in standard form.
///
/// ```
/// use twophase::algorithm::builder::Builder;
/// use twophase::algorithm::LinearSolver;
/// use twophase::data::linear_algebra::matrix::DenseMatrix;
/// use twophase::data::linear_program::solution::State;
///
/// // min x + y, x + y = 1
/// let mut solver = Builder::new()
///     .objective(vec![1_f64, 1_f64])
///     .equalities(DenseMatrix::from_data(vec![vec![1_f64, 1_f64]]), vec![1_f64])
///     .build()
///     .unwrap();
/// let solution = solver.solve();
/// assert_eq!(solution.state, State::Optimal);
/// assert_eq!(solution.objective_value, 1_f64);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    objective: Option<Vec<f64>>,
    equalities: Option<(DenseMatrix, Vec<f64>)>,
    nr_slack_variables: usize,
    options: Options,
}

impl Builder {
    /// Start without any problem data and with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cost of each column, to be minimized.
    #[must_use]
    pub fn objective(mut self, cost: Vec<f64>) -> Self {
        self.objective = Some(cost);
        self
    }

    /// Equality constraints `Ax = b`, with `b` nonnegative.
    #[must_use]
    pub fn equalities(mut self, constraints: DenseMatrix, b: Vec<f64>) -> Self {
        self.equalities = Some((constraints, b));
        self
    }

    /// How many of the last columns are slack columns.
    #[must_use]
    pub fn slack_variables(mut self, nr_slack_variables: usize) -> Self {
        self.nr_slack_variables = nr_slack_variables;
        self
    }

    /// Solver configuration.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Validate the problem and set up the tableau.
    ///
    /// # Errors
    ///
    /// If the objective or the constraints are missing, or if the problem data is not a valid
    /// standard form problem.
    pub fn build(self) -> SolverResult<PrimalSolver> {
        let cost = self.objective.ok_or(SolverError::Missing("objective"))?;
        let (constraints, b) = self.equalities.ok_or(SolverError::Missing("equality constraints"))?;
        let problem = StandardForm::new(cost, constraints, b, self.nr_slack_variables)?;

        Ok(PrimalSolver::new(&problem, self.options))
    }
}

/// The primal simplex method on either storage format.
pub enum PrimalSolver {
    /// All cells stored.
    Dense(PrimalSimplex<DenseTableau>),
    /// Sparse constraint rows.
    Sparse(PrimalSimplex<SparseTableau>),
}

macro_rules! dispatch {
    ($solver:expr, $simplex:ident => $body:expr) => {
        match $solver {
            PrimalSolver::Dense($simplex) => $body,
            PrimalSolver::Sparse($simplex) => $body,
        }
    };
}

impl PrimalSolver {
    /// Set up a tableau for a problem in the format chosen by `choose_representation`.
    pub fn new(problem: &StandardForm, options: Options) -> Self {
        let layout = Layout::new(
            problem.nr_constraints(),
            problem.nr_problem_variables(),
            problem.nr_slack_variables(),
        );

        match choose_representation(&layout, &options) {
            Representation::Sparse => Self::Sparse(PrimalSimplex::new(SparseTableau::new(problem), options)),
            _ => Self::Dense(PrimalSimplex::new(DenseTableau::new(problem), options)),
        }
    }

    /// The storage format in use.
    pub fn representation(&self) -> Representation {
        match self {
            Self::Dense(_) => Representation::Dense,
            Self::Sparse(_) => Representation::Sparse,
        }
    }

    /// Perform a single iteration, see `PrimalSimplex::step`.
    pub fn step(&mut self) -> Step {
        dispatch!(self, simplex => simplex.step())
    }

    /// Fix a problem or slack variable at a value, see `PrimalSimplex::fix_variable`.
    ///
    /// # Errors
    ///
    /// When the index or value is invalid, or when the variable is already fixed at another
    /// value.
    pub fn fix_variable(&mut self, index: usize, value: f64) -> SolverResult<()> {
        dispatch!(self, simplex => simplex.fix_variable(index, value))
    }

    /// A dense copy of the current tableau.
    pub fn to_dense(&self) -> DenseTableau {
        dispatch!(self, simplex => simplex.tableau().to_dense())
    }

    /// Number of pivots performed.
    pub fn iterations(&self) -> usize {
        dispatch!(self, simplex => simplex.iterations())
    }
}

impl LinearSolver for PrimalSolver {
    fn solve(&mut self) -> Solution {
        dispatch!(self, simplex => {
            simplex.solve();
            simplex.solution()
        })
    }

    fn solve_with(&mut self, keep_iterating: &mut dyn FnMut(usize) -> bool) -> Solution {
        dispatch!(self, simplex => {
            simplex.solve_with(|iterations| keep_iterating(iterations));
            simplex.solution()
        })
    }

    fn state(&self) -> State {
        dispatch!(self, simplex => simplex.state())
    }

    fn objective_value(&self) -> f64 {
        dispatch!(self, simplex => simplex.objective_value())
    }

    fn extract_solution(&self) -> Vec<f64> {
        dispatch!(self, simplex => simplex.extract_solution())
    }

    fn extract_multipliers(&self) -> Vec<f64> {
        dispatch!(self, simplex => simplex.extract_multipliers())
    }
}
