//! # Linear problems with free variables
//!
//! `min c^T x` subject to `A_E x = b_E` and `A_I x <= b_I`, with `x` free. This is the linear
//! part of the data a convex solver works with; the dual adapter solves these problems through
//! their dual, which is in standard form.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::error::{SolverError, SolverResult};

/// Problem data with equality and inequality constraints over free variables.
///
/// Either constraint matrix may have zero rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexData {
    cost: Vec<f64>,
    equalities: DenseMatrix,
    equality_rhs: Vec<f64>,
    inequalities: DenseMatrix,
    inequality_rhs: Vec<f64>,
}

impl ConvexData {
    /// Create and validate the problem data.
    pub fn new(
        cost: Vec<f64>,
        equalities: DenseMatrix,
        equality_rhs: Vec<f64>,
        inequalities: DenseMatrix,
        inequality_rhs: Vec<f64>,
    ) -> SolverResult<Self> {
        let nr_variables = cost.len();
        for (what, matrix, rhs) in [
            ("equality matrix", &equalities, &equality_rhs),
            ("inequality matrix", &inequalities, &inequality_rhs),
        ] {
            if matrix.nr_rows() > 0 && matrix.nr_columns() != nr_variables {
                return Err(SolverError::InconsistentDimensions {
                    what,
                    expected: nr_variables,
                    found: matrix.nr_columns(),
                });
            }
            if rhs.len() != matrix.nr_rows() {
                return Err(SolverError::InconsistentDimensions {
                    what,
                    expected: rhs.len(),
                    found: matrix.nr_rows(),
                });
            }
        }
        for (what, values) in [
            ("cost", cost.as_slice()),
            ("equality matrix", equalities.values()),
            ("equality right hand side", equality_rhs.as_slice()),
            ("inequality matrix", inequalities.values()),
            ("inequality right hand side", inequality_rhs.as_slice()),
        ] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(SolverError::NotFinite { what, index });
            }
        }

        Ok(Self { cost, equalities, equality_rhs, inequalities, inequality_rhs })
    }

    /// Objective coefficients.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// `A_E`, with `nr_variables` columns or without rows.
    pub fn equalities(&self) -> &DenseMatrix {
        &self.equalities
    }

    /// `b_E`.
    pub fn equality_rhs(&self) -> &[f64] {
        &self.equality_rhs
    }

    /// `A_I`, with `nr_variables` columns or without rows.
    pub fn inequalities(&self) -> &DenseMatrix {
        &self.inequalities
    }

    /// `b_I`.
    pub fn inequality_rhs(&self) -> &[f64] {
        &self.inequality_rhs
    }

    /// Number of (free) variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of rows in `A_E`.
    pub fn nr_equalities(&self) -> usize {
        self.equality_rhs.len()
    }

    /// Number of rows in `A_I`.
    pub fn nr_inequalities(&self) -> usize {
        self.inequality_rhs.len()
    }
}
