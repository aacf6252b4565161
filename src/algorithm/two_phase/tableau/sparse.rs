//! # Sparse tableau
//!
//! One sparse vector per constraint row, dense vectors for the two objective rows. Used for
//! problems that are too large to keep densely.
//!
//! The tableau can be built up value by value. While doing so, the infeasibility row is kept
//! consistent with the all artificial initial basis: every change to a constraint value or right
//! hand side is subtracted from it right away.
use std::fmt;
use std::fmt::{Display, Formatter};

use num_traits::Zero;

use crate::algorithm::two_phase::iteration_point::Phase;
use crate::algorithm::two_phase::tableau::{format_tableau, Tableau};
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::dense::DenseTableau;
use crate::algorithm::two_phase::tableau::layout::Layout;
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::linear_program::standard_form::StandardForm;

/// Tableau with sparse constraint rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseTableau {
    layout: Layout,
    basis: Basis,
    rows: Vec<SparseVector>,
    b: DenseVector,
    cost: DenseVector,
    cost_rhs: f64,
    infeasibility: DenseVector,
    infeasibility_rhs: f64,
}

impl SparseTableau {
    /// An empty problem of the given dimensions.
    ///
    /// All constraint values, right hand sides and costs are zero; each row holds only its
    /// artificial variable, which is basic.
    pub fn with_layout(layout: Layout) -> Self {
        let m = layout.nr_constraints();
        let total = layout.nr_variables_totally();

        Self {
            basis: Basis::new(m, layout.nr_columns()),
            rows: (0..m)
                .map(|i| SparseVector::standard_basis_vector(layout.artificial_column(i), total))
                .collect(),
            b: DenseVector::constant(0_f64, m),
            cost: DenseVector::constant(0_f64, total),
            cost_rhs: 0_f64,
            infeasibility: DenseVector::constant(0_f64, total),
            infeasibility_rhs: 0_f64,
            layout,
        }
    }

    /// Create the initial tableau of a problem, with all artificial variables basic.
    pub fn new(problem: &StandardForm) -> Self {
        let layout = Layout::new(
            problem.nr_constraints(),
            problem.nr_problem_variables(),
            problem.nr_slack_variables(),
        );
        let mut tableau = Self::with_layout(layout);

        let constraints = problem.constraints();
        for i in 0..constraints.nr_rows() {
            for (j, &value) in constraints.row(i).iter().enumerate() {
                if !value.is_zero() {
                    tableau.set(i, j, value);
                }
            }
            tableau.set_rhs(i, problem.b()[i]);
        }
        for (j, &value) in problem.cost().iter().enumerate() {
            tableau.set_cost(j, value);
        }

        tableau
    }

    fn debug_assert_building(&self, row: usize, column: usize) {
        debug_assert!(row < self.layout.nr_constraints());
        debug_assert!(column < self.layout.nr_columns());
        debug_assert_eq!(self.basis.nr_artificial(), self.layout.nr_constraints());
    }

    /// Set a constraint value of a problem or slack column.
    ///
    /// Only valid before the first pivot.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.debug_assert_building(row, column);

        let old = self.rows[row].get(column);
        self.rows[row].set(column, value);
        self.infeasibility[column] -= value - old;
    }

    /// Add to a constraint value of a problem or slack column.
    ///
    /// Only valid before the first pivot.
    pub fn add(&mut self, row: usize, column: usize, addend: f64) {
        self.debug_assert_building(row, column);

        self.rows[row].shift_value(column, addend);
        self.infeasibility[column] -= addend;
    }

    /// Set the right hand side of a constraint, which should be nonnegative.
    ///
    /// Only valid before the first pivot.
    pub fn set_rhs(&mut self, row: usize, value: f64) {
        debug_assert!(row < self.layout.nr_constraints());
        debug_assert!(value >= 0_f64);

        let old = self.b[row];
        self.b[row] = value;
        self.infeasibility_rhs -= value - old;
        self.rows[row].set(self.layout.artificial_column(row), 1_f64);
    }

    /// Add to the right hand side of a constraint, the result should be nonnegative.
    ///
    /// Only valid before the first pivot.
    pub fn add_rhs(&mut self, row: usize, addend: f64) {
        debug_assert!(row < self.layout.nr_constraints());
        debug_assert!(self.b[row] + addend >= 0_f64);

        self.b[row] += addend;
        self.infeasibility_rhs -= addend;
        self.rows[row].set(self.layout.artificial_column(row), 1_f64);
    }

    /// Set the cost of a problem or slack column.
    pub fn set_cost(&mut self, column: usize, value: f64) {
        debug_assert!(column < self.layout.nr_columns());

        self.cost[column] = value;
    }

    /// A constraint row, without the right hand side.
    pub fn row(&self, i: usize) -> &SparseVector {
        &self.rows[i]
    }

    /// Eliminate the pivot column from one of the dense objective rows.
    fn eliminate(
        weights: &mut DenseVector,
        rhs: &mut f64,
        pivot_row: &SparseVector,
        pivot_rhs: f64,
        column: usize,
    ) {
        let factor = weights[column];
        if !factor.is_zero() {
            for &(j, value) in pivot_row.iter() {
                weights[j] -= factor * value;
            }
            *rhs -= factor * pivot_rhs;
            weights[column] = 0_f64;
        }
    }
}

/// One row to read and another one to write.
fn row_pair(rows: &mut [SparseVector], source: usize, target: usize) -> (&SparseVector, &mut SparseVector) {
    debug_assert_ne!(source, target);

    if source < target {
        let (low, high) = rows.split_at_mut(target);
        (&low[source], &mut high[0])
    } else {
        let (low, high) = rows.split_at_mut(source);
        (&high[0], &mut low[target])
    }
}

impl Tableau for SparseTableau {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn basis(&self) -> &Basis {
        &self.basis
    }

    fn basis_mut(&mut self) -> &mut Basis {
        &mut self.basis
    }

    fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.layout.nr_rows_totally());
        debug_assert!(column <= self.layout.rhs_column());

        let m = self.layout.nr_constraints();
        let rhs_column = self.layout.rhs_column();
        match (row, column == rhs_column) {
            (i, true) if i < m => self.b[i],
            (i, false) if i < m => self.rows[i].get(column),
            (i, true) if i == m => self.cost_rhs,
            (i, false) if i == m => self.cost[column],
            (_, true) => self.infeasibility_rhs,
            (_, false) => self.infeasibility[column],
        }
    }

    fn pivot(&mut self, row: usize, column: usize, phase: Phase) {
        debug_assert!(row < self.layout.nr_constraints());
        debug_assert!(column < self.layout.nr_columns());

        let pivot_value = self.rows[row].get(column);
        debug_assert!(!pivot_value.is_zero());
        if pivot_value.abs() < 1_f64 {
            self.rows[row].element_wise_divide(pivot_value);
            self.b[row] /= pivot_value;
        } else if pivot_value != 1_f64 {
            let factor = 1_f64 / pivot_value;
            self.rows[row].element_wise_multiply(factor);
            self.b[row] *= factor;
        }
        self.rows[row].set(column, 1_f64);
        let pivot_rhs = self.b[row];

        for target in (0..self.layout.nr_constraints()).filter(|&i| i != row) {
            let factor = self.rows[target].get(column);
            if !factor.is_zero() {
                let (pivot_row, target_row) = row_pair(&mut self.rows, row, target);
                target_row.add_multiple_of_row(-factor, pivot_row);
                target_row.set_zero(column);
                self.b[target] -= factor * pivot_rhs;
            }
        }

        Self::eliminate(&mut self.cost, &mut self.cost_rhs, &self.rows[row], pivot_rhs, column);
        if phase == Phase::One {
            Self::eliminate(
                &mut self.infeasibility,
                &mut self.infeasibility_rhs,
                &self.rows[row],
                pivot_rhs,
                column,
            );
        }

        self.basis.update(row, column);
    }

    fn substitute_column(&mut self, column: usize, value: f64) {
        debug_assert!(column < self.layout.nr_columns());

        for (row, b) in self.rows.iter_mut().zip(self.b.as_mut_slice()) {
            let coefficient = row.get(column);
            *b -= value * coefficient;
            row.set_zero(column);
        }
        self.cost_rhs -= value * self.cost[column];
        self.cost[column] = 0_f64;
        self.infeasibility_rhs -= value * self.infeasibility[column];
        self.infeasibility[column] = 0_f64;
    }

    fn negate_row(&mut self, row: usize) {
        debug_assert!(row < self.layout.nr_constraints());

        self.rows[row].element_wise_multiply(-1_f64);
        self.b[row] = -self.b[row];
    }

    fn reset_infeasibility(&mut self) {
        let nr_columns = self.layout.nr_columns();

        self.infeasibility.fill(0_f64);
        self.infeasibility_rhs = 0_f64;
        for (i, row) in self.rows.iter().enumerate() {
            if self.basis.entry(i).is_artificial() {
                for &(j, value) in row.iter().take_while(|&&(j, _)| j < nr_columns) {
                    self.infeasibility[j] -= value;
                }
                self.infeasibility_rhs -= self.b[i];
            }
        }
    }

    fn to_dense(&self) -> DenseTableau {
        let layout = self.layout.clone();
        let width = layout.nr_variables_totally() + 1;
        let rhs_column = layout.rhs_column();

        let mut data = vec![0_f64; layout.nr_cells()];
        for (i, row) in self.rows.iter().enumerate() {
            for &(j, value) in row.iter() {
                data[i * width + j] = value;
            }
            data[i * width + rhs_column] = self.b[i];
        }
        let objective_row = layout.objective_row();
        data[objective_row * width..objective_row * width + rhs_column]
            .copy_from_slice(self.cost.as_slice());
        data[objective_row * width + rhs_column] = self.cost_rhs;
        let infeasibility_row = layout.infeasibility_row();
        data[infeasibility_row * width..infeasibility_row * width + rhs_column]
            .copy_from_slice(self.infeasibility.as_slice());
        data[infeasibility_row * width + rhs_column] = self.infeasibility_rhs;

        DenseTableau::from_parts(layout, self.basis.clone(), data)
    }
}

impl From<&SparseTableau> for DenseTableau {
    fn from(tableau: &SparseTableau) -> Self {
        tableau.to_dense()
    }
}

impl Display for SparseTableau {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        format_tableau(self, f)
    }
}
