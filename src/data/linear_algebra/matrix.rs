//! # Dense matrices
//!
//! Problem data is handed to the solver as dense matrices. They are only used while setting up a
//! tableau or transforming a problem, never inside the simplex iterations.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// Row major matrix backed by a single `Vec`. Dimensions are fixed at creation.
///
/// Matrices without rows or without columns are allowed, such that problems without equality or
/// without inequality constraints can be represented.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a matrix from a flat, row major slice of values.
    pub fn new(data: Vec<f64>, nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_eq!(data.len(), nr_rows * nr_columns);

        Self { data, nr_rows, nr_columns }
    }

    /// Create a matrix from a list of rows.
    ///
    /// All rows should have the same length.
    pub fn from_data(rows: Vec<Vec<f64>>) -> Self {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        Self::new(rows.into_iter().flatten().collect(), nr_rows, nr_columns)
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.set_value(i, i, 1_f64);
        }

        matrix
    }

    /// Create a dense matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::new(vec![0_f64; nr_rows * nr_columns], nr_rows, nr_columns)
    }

    /// A matrix consisting of a single row.
    pub fn row_vector(values: Vec<f64>) -> Self {
        let len = values.len();
        Self::new(values, 1, len)
    }

    /// A matrix consisting of a single column.
    pub fn column_vector(values: Vec<f64>) -> Self {
        let len = values.len();
        Self::new(values, len, 1)
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i * self.nr_columns + j] = value;
    }

    /// All values in row `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        let nr_columns = self.nr_columns;
        for value in &mut self.data[i * nr_columns..(i + 1) * nr_columns] {
            *value *= factor;
        }
    }

    /// Multiply every value with a factor.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        for value in &mut self.data {
            *value *= factor;
        }

        self
    }

    /// The transpose of this matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns)
            .flat_map(|j| (0..self.nr_rows).map(move |i| (i, j)))
            .map(|(i, j)| self.get_value(i, j))
            .collect();

        Self::new(data, self.nr_columns, self.nr_rows)
    }

    /// Concatenate horizontally: the columns of `other` are placed right of the columns of this
    /// matrix.
    #[must_use]
    pub fn hcat(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_rows, other.nr_rows);

        let data = (0..self.nr_rows)
            .flat_map(|i| self.row(i).iter().chain(other.row(i)).copied())
            .collect();

        Self::new(data, self.nr_rows, self.nr_columns + other.nr_columns)
    }

    /// Concatenate vertically: the rows of `other` are placed below the rows of this matrix.
    #[must_use]
    pub fn vcat(&self, other: &Self) -> Self {
        debug_assert_eq!(self.nr_columns, other.nr_columns);

        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);

        Self::new(data, self.nr_rows + other.nr_rows, self.nr_columns)
    }

    /// All values, row major.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Take the row major data out.
    pub fn into_values(self) -> Vec<f64> {
        self.data
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of values stored.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl Display for DenseMatrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for i in 0..self.nr_rows {
            writeln!(f, "[{}]", self.row(i).iter().join(", "))?;
        }

        Ok(())
    }
}
