//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::Itertools;

use crate::data::linear_algebra::vector::Vector;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    data: Vec<f64>,
}

impl Dense {
    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: f64, len: usize) -> Self {
        Self { data: vec![value; len] }
    }

    /// Overwrite all values.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// The values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<usize> for Dense {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl IndexMut<usize> for Dense {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl Vector for Dense {
    type Inner = f64;

    /// Create a `DenseVector` from the provided data.
    fn new(data: Vec<Self::Inner>, len: usize) -> Self {
        debug_assert_eq!(data.len(), len);

        Self { data }
    }

    fn set(&mut self, i: usize, value: f64) {
        debug_assert!(i < self.len());

        self.data[i] = value;
    }

    fn get(&self, i: usize) -> f64 {
        debug_assert!(i < self.len());

        self.data[i]
    }

    fn iter_values(&self) -> Iter<'_, Self::Inner> {
        self.data.iter()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

impl FromIterator<f64> for Dense {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl Display for Dense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
