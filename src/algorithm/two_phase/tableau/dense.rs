//! # Dense tableau
//!
//! All cells in a single `Vec`. The tableau is stored transposed, in column major order: each
//! logical row of the tableau is one contiguous storage column of `nr_variables_totally() + 1`
//! values, the right hand side being the last of them. A pivot touches every cell once and
//! doesn't allocate.
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::algorithm::two_phase::iteration_point::Phase;
use crate::algorithm::two_phase::tableau::{format_tableau, Tableau};
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::layout::Layout;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;

/// Tableau with contiguous storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTableau {
    layout: Layout,
    basis: Basis,
    /// Length of one logical row, including the right hand side.
    width: usize,
    data: Vec<f64>,
}

impl DenseTableau {
    /// Create the initial tableau of a problem, with all artificial variables basic.
    ///
    /// The constraints are extended with an identity block and the right hand side; below that
    /// the cost row and the artificial cost row are placed. The artificial cost row is then made
    /// consistent with the basis by subtracting all constraint rows from it.
    pub fn new(problem: &StandardForm) -> Self {
        let m = problem.nr_constraints();
        let layout = Layout::new(m, problem.nr_problem_variables(), problem.nr_slack_variables());
        let n = layout.nr_columns();

        let body = problem.constraints()
            .hcat(&DenseMatrix::identity(m))
            .hcat(&DenseMatrix::column_vector(problem.b().to_vec()));
        let cost = problem.cost().iter().copied()
            .chain(std::iter::repeat_n(0_f64, m + 1))
            .collect();
        let artificial_cost = std::iter::repeat_n(0_f64, n)
            .chain(std::iter::repeat_n(1_f64, m))
            .chain(std::iter::once(0_f64))
            .collect();
        let data = body
            .vcat(&DenseMatrix::row_vector(cost))
            .vcat(&DenseMatrix::row_vector(artificial_cost))
            .into_values();

        let mut tableau = Self::from_parts(layout, Basis::new(m, n), data);
        let target = tableau.layout.infeasibility_row();
        for row in 0..m {
            tableau.subtract_multiple_of_row(row, target, 1_f64);
        }

        tableau
    }

    /// Assemble from the values of all rows, stored one after the other.
    pub(crate) fn from_parts(layout: Layout, basis: Basis, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), layout.nr_cells());
        debug_assert_eq!(basis.entries().len(), layout.nr_constraints());

        let width = layout.nr_variables_totally() + 1;
        Self { layout, basis, width, data }
    }

    /// All values of a row, the right hand side last.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.layout.nr_rows_totally());

        &self.data[i * self.width..(i + 1) * self.width]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.width..(i + 1) * self.width]
    }

    /// `target <- target - factor * source`, for two different rows.
    fn subtract_multiple_of_row(&mut self, source: usize, target: usize, factor: f64) {
        let (source, target) = row_pair(&mut self.data, self.width, source, target);
        for (t, s) in target.iter_mut().zip(source) {
            *t -= factor * s;
        }
    }
}

/// One row to read and another one to write, split from the same buffer.
fn row_pair(data: &mut [f64], width: usize, source: usize, target: usize) -> (&[f64], &mut [f64]) {
    debug_assert_ne!(source, target);

    if source < target {
        let (low, high) = data.split_at_mut(target * width);
        (&low[source * width..(source + 1) * width], &mut high[..width])
    } else {
        let (low, high) = data.split_at_mut(source * width);
        (&high[..width], &mut low[target * width..(target + 1) * width])
    }
}

impl Tableau for DenseTableau {
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
        debug_assert!(column < self.width);

        self.data[row * self.width + column]
    }

    fn pivot(&mut self, row: usize, column: usize, phase: Phase) {
        debug_assert!(row < self.layout.nr_constraints());
        debug_assert!(column < self.layout.nr_columns());

        let pivot_value = self.get(row, column);
        debug_assert_ne!(pivot_value, 0_f64);
        {
            let pivot_row = self.row_mut(row);
            if pivot_value.abs() < 1_f64 {
                pivot_row.iter_mut().for_each(|v| *v /= pivot_value);
            } else if pivot_value != 1_f64 {
                let factor = 1_f64 / pivot_value;
                pivot_row.iter_mut().for_each(|v| *v *= factor);
            }
            pivot_row[column] = 1_f64;
        }

        let nr_rows = match phase {
            Phase::One => self.layout.nr_rows_totally(),
            Phase::Two => self.layout.nr_rows_totally() - 1,
        };
        for target in (0..nr_rows).filter(|&i| i != row) {
            let factor = self.get(target, column);
            if factor != 0_f64 {
                self.subtract_multiple_of_row(row, target, factor);
                self.data[target * self.width + column] = 0_f64;
            }
        }

        self.basis.update(row, column);
    }

    fn substitute_column(&mut self, column: usize, value: f64) {
        debug_assert!(column < self.layout.nr_columns());

        let rhs_column = self.layout.rhs_column();
        for row in 0..self.layout.nr_rows_totally() {
            let values = self.row_mut(row);
            values[rhs_column] -= value * values[column];
            values[column] = 0_f64;
        }
    }

    fn negate_row(&mut self, row: usize) {
        debug_assert!(row < self.layout.nr_constraints());

        self.row_mut(row).iter_mut().for_each(|v| *v = -*v);
    }

    fn reset_infeasibility(&mut self) {
        let target = self.layout.infeasibility_row();
        let nr_columns = self.layout.nr_columns();
        let rhs_column = self.layout.rhs_column();

        self.row_mut(target).iter_mut().for_each(|v| *v = 0_f64);
        for row in 0..self.layout.nr_constraints() {
            if self.basis.entry(row).is_artificial() {
                let (source, infeasibility) = row_pair(&mut self.data, self.width, row, target);
                for j in (0..nr_columns).chain(std::iter::once(rhs_column)) {
                    infeasibility[j] -= source[j];
                }
            }
        }
    }

    fn to_dense(&self) -> DenseTableau {
        self.clone()
    }
}

impl Display for DenseTableau {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        format_tableau(self, f)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::iteration_point::Phase;
    use crate::algorithm::two_phase::tableau::basis::BasisEntry;
    use crate::algorithm::two_phase::tableau::dense::DenseTableau;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::standard_form::StandardForm;
    use crate::tests::problem_1;

    #[test]
    fn construction() {
        let tableau = problem_1::dense_tableau_form();
        assert_eq!(tableau.row(0), &[1f64, 1f64, 1f64, 0f64, 0f64, 1f64, 0f64, 0f64, 4f64]);
        assert_eq!(tableau.row(3), &[-3f64, -2f64, 0f64, 0f64, 0f64, 0f64, 0f64, 0f64, 0f64]);
        assert_eq!(tableau.row(4), &[-2f64, -2f64, -1f64, -1f64, -1f64, 0f64, 0f64, 0f64, -10f64]);
        assert_eq!(tableau.infeasibility(), 10f64);
        assert_eq!(tableau.basis().nr_artificial(), 3);
    }

    #[test]
    fn pivot_phase_one() {
        let mut tableau = problem_1::dense_tableau_form();
        tableau.pivot(1, 0, Phase::One);

        assert_eq!(tableau.row(0), &[0f64, 1f64, 1f64, -1f64, 0f64, 1f64, -1f64, 0f64, 1f64]);
        assert_eq!(tableau.row(3), &[0f64, -2f64, 0f64, 3f64, 0f64, 0f64, 3f64, 0f64, 9f64]);
        assert_eq!(tableau.row(4), &[0f64, -2f64, -1f64, 1f64, -1f64, 0f64, 2f64, 0f64, -4f64]);
        assert_eq!(tableau.basis().entry(1), BasisEntry::Column(0));
        assert!(tableau.basis().selector().is_included(0));
    }

    #[test]
    fn pivot_scaling() {
        let problem = StandardForm::new(
            vec![1f64, 1f64],
            DenseMatrix::from_data(vec![vec![4f64, 2f64], vec![0.5f64, 1f64]]),
            vec![8f64, 3f64],
            0,
        ).unwrap();

        // Large pivot element: multiplied by the reciprocal
        let mut tableau = DenseTableau::new(&problem);
        tableau.pivot(0, 0, Phase::One);
        assert_eq!(tableau.row(0), &[1f64, 0.5f64, 0.25f64, 0f64, 2f64]);
        assert_eq!(tableau.row(1), &[0f64, 0.75f64, -0.125f64, 1f64, 2f64]);

        // Small pivot element: divided by
        let mut tableau = DenseTableau::new(&problem);
        tableau.pivot(1, 0, Phase::One);
        assert_eq!(tableau.row(1), &[1f64, 2f64, 0f64, 2f64, 6f64]);
        assert_eq!(tableau.row(0), &[0f64, -6f64, 1f64, -8f64, -16f64]);
    }

    #[test]
    fn phase_two_leaves_infeasibility_row() {
        let mut tableau = problem_1::dense_tableau_form();
        let before = tableau.row(4).to_vec();
        tableau.pivot(1, 0, Phase::Two);
        assert_eq!(tableau.row(4), before.as_slice());
    }

    #[test]
    fn without_constraints() {
        let problem = StandardForm::new(vec![1f64, -1f64], DenseMatrix::zeros(0, 2), Vec::new(), 0).unwrap();
        let tableau = DenseTableau::new(&problem);
        assert_eq!(tableau.row(0), &[1f64, -1f64, 0f64]);
        assert_eq!(tableau.row(1), &[0f64, 0f64, 0f64]);
        assert!(tableau.extract_multipliers().is_empty());
    }
}
