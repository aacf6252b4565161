//! # Standard form
//!
//! `min c^T x` subject to `Ax = b`, `x >= 0`, with `b >= 0`. The last columns of `A` may be
//! marked as slack columns; they are treated like any other column, but counted separately.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::error::{SolverError, SolverResult};

/// A validated linear program in standard form.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardForm {
    cost: Vec<f64>,
    constraints: DenseMatrix,
    b: Vec<f64>,
    nr_slack_variables: usize,
}

impl StandardForm {
    /// Create a new standard form problem, checking dimensions, signs and finiteness.
    ///
    /// # Arguments
    ///
    /// * `cost`: One value per column of `constraints`.
    /// * `constraints`: Equality constraint matrix.
    /// * `b`: Right hand side, one nonnegative value per row of `constraints`.
    /// * `nr_slack_variables`: How many of the last columns are slack columns.
    pub fn new(
        cost: Vec<f64>,
        constraints: DenseMatrix,
        b: Vec<f64>,
        nr_slack_variables: usize,
    ) -> SolverResult<Self> {
        if cost.len() != constraints.nr_columns() {
            return Err(SolverError::InconsistentDimensions {
                what: "cost",
                expected: constraints.nr_columns(),
                found: cost.len(),
            });
        }
        if b.len() != constraints.nr_rows() {
            return Err(SolverError::InconsistentDimensions {
                what: "right hand side",
                expected: constraints.nr_rows(),
                found: b.len(),
            });
        }
        if nr_slack_variables > cost.len() {
            return Err(SolverError::TooManySlacks {
                nr_slack: nr_slack_variables,
                nr_columns: cost.len(),
            });
        }
        check_finite("cost", &cost)?;
        check_finite("constraint matrix", constraints.values())?;
        check_finite("right hand side", &b)?;
        if let Some((row, &value)) = b.iter().enumerate().find(|&(_, &value)| value < 0_f64) {
            return Err(SolverError::NegativeRightHandSide { row, value });
        }

        Ok(Self { cost, constraints, b, nr_slack_variables })
    }

    /// Cost of each column.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// The equality constraint matrix.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// The right hand side.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Number of equality constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of columns that are not slack columns.
    pub fn nr_problem_variables(&self) -> usize {
        self.cost.len() - self.nr_slack_variables
    }

    /// Number of slack columns, these are the last columns.
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_slack_variables
    }

    /// Total number of columns.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }
}

fn check_finite(what: &'static str, values: &[f64]) -> SolverResult<()> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(SolverError::NotFinite { what, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::error::SolverError;

    fn matrix() -> DenseMatrix {
        DenseMatrix::from_data(vec![vec![1f64, 1f64, 1f64], vec![1f64, 0f64, 0f64]])
    }

    #[test]
    fn valid() {
        let problem = StandardForm::new(vec![1f64, 2f64, 0f64], matrix(), vec![4f64, 0f64], 1).unwrap();
        assert_eq!(problem.nr_constraints(), 2);
        assert_eq!(problem.nr_problem_variables(), 2);
        assert_eq!(problem.nr_slack_variables(), 1);
        assert_eq!(problem.nr_columns(), 3);
    }

    #[test]
    fn dimensions() {
        assert_eq!(
            StandardForm::new(vec![1f64, 2f64], matrix(), vec![4f64, 0f64], 0),
            Err(SolverError::InconsistentDimensions { what: "cost", expected: 3, found: 2 }),
        );
        assert_eq!(
            StandardForm::new(vec![1f64, 2f64, 3f64], matrix(), vec![4f64], 0),
            Err(SolverError::InconsistentDimensions { what: "right hand side", expected: 2, found: 1 }),
        );
        assert_eq!(
            StandardForm::new(vec![1f64, 2f64, 3f64], matrix(), vec![4f64, 1f64], 4),
            Err(SolverError::TooManySlacks { nr_slack: 4, nr_columns: 3 }),
        );
    }

    #[test]
    fn values() {
        assert_eq!(
            StandardForm::new(vec![1f64, 2f64, 3f64], matrix(), vec![4f64, -1f64], 0),
            Err(SolverError::NegativeRightHandSide { row: 1, value: -1f64 }),
        );
        assert_eq!(
            StandardForm::new(vec![1f64, f64::NAN, 3f64], matrix(), vec![4f64, 1f64], 0),
            Err(SolverError::NotFinite { what: "cost", index: 1 }),
        );
    }
}
