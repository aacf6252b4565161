//! # Tableau
//!
//! The explicit simplex tableau: the constraint rows, the objective row and the infeasibility row,
//! with a right hand side column. See `layout` for the indexing.
//!
//! Two storage formats implement the `Tableau` trait. The dense format keeps all cells in one
//! contiguous buffer and is used when that buffer is small enough; the sparse format stores each
//! constraint row as a sparse vector.
use std::cmp::max;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::algorithm::two_phase::iteration_point::Phase;
use crate::algorithm::two_phase::tableau::basis::{Basis, BasisEntry};
use crate::algorithm::two_phase::tableau::dense::DenseTableau;
use crate::algorithm::two_phase::tableau::layout::Layout;
use crate::error::{SolverError, SolverResult};

pub mod basis;
pub mod dense;
pub mod index_selector;
pub mod layout;
pub mod sparse;

/// Operations on a tableau, regardless of storage format.
///
/// Rows are indexed `0..nr_rows_totally()` and columns `0..=nr_variables_totally()`, see the
/// `Layout`. The required methods are the storage specific primitives; the algorithm specific
/// logic is shared in the provided methods.
pub trait Tableau: Display {
    /// Dimensions.
    fn layout(&self) -> &Layout;
    /// Current basis.
    fn basis(&self) -> &Basis;
    /// Current basis, to be changed together with the values.
    fn basis_mut(&mut self) -> &mut Basis;

    /// Value of a cell.
    fn get(&self, row: usize, column: usize) -> f64;

    /// Gauss-Jordan elimination on the pivot element, followed by the basis change.
    ///
    /// The pivot row is scaled such that the pivot element becomes one, after which the column is
    /// eliminated from all other constraint rows and the objective row. The infeasibility row is
    /// only updated in phase one.
    fn pivot(&mut self, row: usize, column: usize, phase: Phase);

    /// Substitute a constant value for a column.
    ///
    /// For every row, including the objective rows, the right hand side is decreased by `value`
    /// times the value in the column, after which the column is zeroed.
    fn substitute_column(&mut self, column: usize, value: f64);

    /// Multiply a constraint row, including the right hand side, by minus one.
    fn negate_row(&mut self, row: usize);

    /// Recompute the infeasibility row as minus the sum of the rows with an artificial basic
    /// variable.
    ///
    /// Only the problem and slack columns and the right hand side are computed, the artificial
    /// columns of the row are zeroed.
    fn reset_infeasibility(&mut self);

    /// A dense copy of this tableau.
    fn to_dense(&self) -> DenseTableau;

    /// Number of constraint rows.
    fn nr_constraints(&self) -> usize {
        self.layout().nr_constraints()
    }

    /// Number of problem and slack columns.
    fn nr_columns(&self) -> usize {
        self.layout().nr_columns()
    }

    /// Right hand side of a row.
    fn rhs(&self, row: usize) -> f64 {
        self.get(row, self.layout().rhs_column())
    }

    /// Values of a column, over the constraint rows and both objective rows.
    fn column_values(&self, column: usize) -> Vec<f64> {
        (0..self.layout().nr_rows_totally()).map(|i| self.get(i, column)).collect()
    }

    /// Relative cost of a column in the objective of a phase.
    fn relative_cost(&self, phase: Phase, column: usize) -> f64 {
        let row = match phase {
            Phase::One => self.layout().infeasibility_row(),
            Phase::Two => self.layout().objective_row(),
        };

        self.get(row, column)
    }

    /// Sum of the artificial variables in the current basic solution.
    fn infeasibility(&self) -> f64 {
        -self.get(self.layout().infeasibility_row(), self.layout().rhs_column())
    }

    /// Objective value of the current basic solution.
    ///
    /// Includes the contribution of fixed variables.
    fn objective_value(&self) -> f64 {
        -self.get(self.layout().objective_row(), self.layout().rhs_column())
    }

    /// Values of the problem and slack variables in the current basic solution.
    fn extract_solution(&self) -> Vec<f64> {
        let mut solution = vec![0_f64; self.nr_columns()];
        for (row, entry) in self.basis().entries().iter().enumerate() {
            if let BasisEntry::Column(j) = *entry {
                solution[j] = self.rhs(row);
            }
        }
        for (j, value) in self.basis().fixed() {
            solution[j] = value;
        }

        solution
    }

    /// Dual values, one per constraint.
    ///
    /// The objective row over the artificial columns holds minus the multipliers.
    fn extract_multipliers(&self) -> Vec<f64> {
        let layout = self.layout();
        (0..layout.nr_constraints())
            .map(|i| -self.get(layout.objective_row(), layout.artificial_column(i)))
            .collect()
    }

    /// Fix a problem or slack variable at a nonnegative value.
    ///
    /// The variable is substituted out of the tableau and will not enter the basis anymore. The
    /// row in which it was basic, and every row whose right hand side became negative, gets an
    /// artificial basic variable; the latter rows are negated first. The infeasibility row is
    /// rebuilt from those rows, so that solving can restart at phase one.
    ///
    /// Fixing a variable twice at the same value does nothing.
    ///
    /// # Errors
    ///
    /// When the index doesn't refer to a problem or slack variable, when the value is negative or
    /// not finite, or when the variable is already fixed at another value. The tableau is not
    /// changed in that case.
    fn fix_variable(&mut self, column: usize, value: f64) -> SolverResult<()> {
        let len = self.nr_columns();
        if column >= len {
            return Err(SolverError::IndexOutOfRange { index: column, len });
        }
        if !value.is_finite() || value < 0_f64 {
            return Err(SolverError::InvalidFixedValue { index: column, value });
        }
        if let Some(existing) = self.basis().fixed_value(column) {
            return if existing == value {
                Ok(())
            } else {
                Err(SolverError::AlreadyFixed { index: column, value: existing })
            };
        }

        self.substitute_column(column, value);
        if let Some(row) = self.basis().row_of(column) {
            self.basis_mut().release(row);
        }
        self.basis_mut().fix(column, value);

        for row in 0..self.nr_constraints() {
            if self.rhs(row) < 0_f64 {
                self.negate_row(row);
                self.basis_mut().release(row);
            }
        }
        self.reset_infeasibility();

        Ok(())
    }
}

/// Constraint rows with a right hand side below `-tolerance`.
///
/// Empty for a tableau in a basic feasible solution state.
pub fn infeasible_rows<T: Tableau + ?Sized>(tableau: &T, tolerance: f64) -> Vec<usize> {
    (0..tableau.nr_constraints())
        .filter(|&row| tableau.rhs(row) < -tolerance)
        .collect()
}

/// Basic columns with a relative cost that is not (close to) zero in the cost row of the phase.
///
/// Empty when the cost row is consistent with the basis.
pub fn inconsistent_costs<T: Tableau + ?Sized>(tableau: &T, phase: Phase, tolerance: f64) -> Vec<usize> {
    tableau.basis().selector().included().iter()
        .copied()
        .filter(|&j| tableau.relative_cost(phase, j).abs() > tolerance)
        .sorted_unstable()
        .collect()
}

/// Whether no non basic, non fixed column has a relative cost below `-tolerance`.
pub fn is_optimal<T: Tableau + ?Sized>(tableau: &T, phase: Phase, tolerance: f64) -> bool {
    let basis = tableau.basis();
    basis.selector().excluded().iter()
        .filter(|&&j| !basis.is_fixed(j))
        .all(|&j| tableau.relative_cost(phase, j) >= -tolerance)
}

/// Print a tableau as a table, used by the `Display` implementations of the storage formats.
pub fn format_tableau<T: Tableau + ?Sized>(tableau: &T, f: &mut Formatter) -> fmt::Result {
    let layout = tableau.layout();
    let rhs_column = layout.rhs_column();

    let labels = (0..layout.nr_constraints()).map(|i| i.to_string())
        .chain(["cost".to_string(), "inf".to_string()])
        .collect::<Vec<_>>();
    let label_width = labels.iter().map(String::len).fold(0, max);
    let cells = (0..layout.nr_rows_totally())
        .map(|i| {
            // Right hand side first
            std::iter::once(rhs_column).chain(0..rhs_column)
                .map(|j| tableau.get(i, j).to_string())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let headers = std::iter::once("b".to_string())
        .chain((0..rhs_column).map(|j| j.to_string()))
        .collect::<Vec<_>>();
    let widths = headers.iter().enumerate()
        .map(|(k, header)| cells.iter().map(|row| row[k].len()).fold(header.len(), max))
        .collect::<Vec<_>>();

    writeln!(f, "=== Tableau ===")?;
    let write_line = |f: &mut Formatter, label: &str, values: &[String]| {
        write!(f, "{0:>width$} |", label, width = label_width)?;
        for (value, width) in values.iter().zip_eq(&widths) {
            write!(f, " {0:>width$}", value, width = *width)?;
        }
        writeln!(f)
    };
    write_line(f, "", headers.as_slice())?;
    writeln!(f, "{}", "-".repeat(label_width + 2 + widths.iter().map(|w| w + 1).sum::<usize>()))?;
    for (label, row) in labels.iter().zip_eq(&cells) {
        write_line(f, label.as_str(), row.as_slice())?;
    }

    writeln!(f, "=== Basis Columns ===")?;
    let basis = tableau.basis().entries().iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            BasisEntry::Column(j) => format!("({}, {})", i, j),
            BasisEntry::Artificial => format!("({}, a)", i),
        })
        .join(" ");
    writeln!(f, "[{}]", basis)
}
