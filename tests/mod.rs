//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use twophase::algorithm::builder::{Builder, PrimalSolver};
use twophase::algorithm::options::Options;
use twophase::data::linear_algebra::matrix::DenseMatrix;

mod dual;
mod representation;
mod scenario;

/// A problem in standard form, generated from formulas.
pub struct Generated {
    pub cost: Vec<f64>,
    pub constraints: DenseMatrix,
    pub b: Vec<f64>,
    pub nr_slack: usize,
}

impl Generated {
    /// `max sum w_j x_j` subject to `Ax <= b` with positive `A`; feasible at zero and bounded.
    ///
    /// The slack columns are appended to the problem columns.
    pub fn packing(nr_rows: usize, nr_columns: usize) -> Self {
        let rows = (0..nr_rows)
            .map(|i| {
                (0..nr_columns)
                    .map(|j| ((i * 7 + j * 3) % 5 + 1) as f64)
                    .chain((0..nr_rows).map(|k| if k == i { 1_f64 } else { 0_f64 }))
                    .collect()
            })
            .collect();
        let cost = (0..nr_columns)
            .map(|j| -(((j * 5) % 4 + 1) as f64))
            .chain(std::iter::repeat_n(0_f64, nr_rows))
            .collect();
        let b = (0..nr_rows).map(|i| (10 + 3 * i) as f64).collect();

        Self { cost, constraints: DenseMatrix::from_data(rows), b, nr_slack: nr_rows }
    }

    /// `min c^T x` subject to `Ax = b`, where `b` is chosen such that all ones is feasible.
    ///
    /// Positive costs make it bounded; without slacks, phase one has to do all the work.
    pub fn covering(nr_rows: usize, nr_columns: usize) -> Self {
        let rows: Vec<Vec<f64>> = (0..nr_rows)
            .map(|i| (0..nr_columns).map(|j| ((i + 2 * j) % 3) as f64).collect())
            .collect();
        let b = rows.iter().map(|row| row.iter().sum()).collect();
        let cost = (0..nr_columns).map(|j| (j % 3 + 1) as f64).collect();

        Self { cost, constraints: DenseMatrix::from_data(rows), b, nr_slack: 0 }
    }

    pub fn build(&self, options: Options) -> PrimalSolver {
        Builder::new()
            .objective(self.cost.clone())
            .equalities(self.constraints.clone(), self.b.clone())
            .slack_variables(self.nr_slack)
            .options(options)
            .build()
            .unwrap()
    }

    /// Largest violation of `Ax = b` and `x >= 0`.
    pub fn violation(&self, x: &[f64]) -> f64 {
        let rows = (0..self.constraints.nr_rows()).map(|i| {
            let lhs = self.constraints.row(i).iter().zip(x).map(|(a, x)| a * x).sum::<f64>();
            (lhs - self.b[i]).abs()
        });
        let signs = x.iter().map(|&value| (-value).max(0_f64));

        rows.chain(signs).fold(0_f64, f64::max)
    }
}
