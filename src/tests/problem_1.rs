//! Maximize `3x + 2y` subject to `x + y <= 4`, `x <= 3` and `y <= 3`.
//!
//! In standard form, with slacks `s1`, `s2`, `s3`: minimize `-3x - 2y`. The optimum `x = 3`,
//! `y = 1` is not degenerate, the third slack is basic at value 2.
use crate::algorithm::two_phase::iteration_point::Phase;
use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::dense::DenseTableau;
use crate::algorithm::two_phase::tableau::layout::Layout;
use crate::algorithm::two_phase::tableau::sparse::SparseTableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::StandardForm;

/// Pivots taken with the most negative relative cost rule: (phase, row, column).
pub const PIVOTS: [(Phase, usize, usize); 4] = [
    (Phase::One, 1, 0),
    (Phase::One, 0, 1),
    (Phase::One, 2, 3),
    (Phase::Two, 2, 4),
];
pub const SOLUTION: [f64; 5] = [3f64, 1f64, 0f64, 0f64, 2f64];
pub const MULTIPLIERS: [f64; 3] = [-2f64, -1f64, 0f64];
pub const OBJECTIVE_VALUE: f64 = -11f64;

pub fn standard_form() -> StandardForm {
    StandardForm::new(
        vec![-3f64, -2f64, 0f64, 0f64, 0f64],
        DenseMatrix::from_data(vec![
            vec![1f64, 1f64, 1f64, 0f64, 0f64],
            vec![1f64, 0f64, 0f64, 1f64, 0f64],
            vec![0f64, 1f64, 0f64, 0f64, 1f64],
        ]),
        vec![4f64, 3f64, 3f64],
        3,
    ).unwrap()
}

pub fn dense_tableau_form() -> DenseTableau {
    DenseTableau::new(&standard_form())
}

pub fn sparse_tableau_form() -> SparseTableau {
    SparseTableau::new(&standard_form())
}

pub fn optimal_dense_tableau() -> DenseTableau {
    let mut basis = Basis::new(3, 5);
    for &(_, row, column) in &PIVOTS {
        basis.update(row, column);
    }

    let rows = [
        [0f64, 1f64, 1f64, -1f64, 0f64, 1f64, -1f64, 0f64, 1f64],
        [1f64, 0f64, 0f64, 1f64, 0f64, 0f64, 1f64, 0f64, 3f64],
        [0f64, 0f64, -1f64, 1f64, 1f64, -1f64, 1f64, 1f64, 2f64],
        [0f64, 0f64, 2f64, 1f64, 0f64, 2f64, 1f64, 0f64, 11f64],
        [0f64, 0f64, 0f64, 0f64, 0f64, 1f64, 1f64, 1f64, 0f64],
    ];

    DenseTableau::from_parts(Layout::new(3, 2, 3), basis, rows.concat())
}
