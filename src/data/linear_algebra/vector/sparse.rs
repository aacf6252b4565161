//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, f64)>`, fixed size.
use std::{fmt, mem};
use std::fmt::Display;
use std::iter::FromIterator;
use std::slice::Iter;

use num_traits::Zero;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::vector::Vector;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0` and are kept sorted; no explicit zeros are stored.
#[derive(PartialEq, Clone, Debug)]
pub struct Sparse {
    data: Vec<SparseTuple>,
    len: usize,
}

impl Sparse {
    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// Remove the value at index `i`, if there is one.
    pub fn set_zero(&mut self, i: usize) {
        debug_assert!(i < self.len);

        if let Ok(index) = self.get_data_index(i) {
            self.data.remove(index);
        }
    }

    /// Iterate over the nonzero (index, value) tuples in increasing index order.
    pub fn iter(&self) -> Iter<'_, SparseTuple> {
        self.data.iter()
    }

    /// Create a `SparseVector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at zero, and runs
    /// until (not through) `len`.
    /// * `len`: Size of the `SparseVector`.
    #[must_use]
    pub fn standard_basis_vector(i: usize, len: usize) -> Self {
        debug_assert!(i < len);

        Self::new(vec![(i, 1_f64)], len)
    }

    /// Add the multiple of another row to this row.
    ///
    /// Values that cancel out exactly are removed.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Non-zero constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector to add a multiple of to this vector.
    pub fn add_multiple_of_row(&mut self, multiple: f64, other: &Sparse) {
        debug_assert_eq!(other.len(), self.len());

        let mut new_tuples = Vec::with_capacity(self.data.len() + other.data.len());

        let mut j = 0;  // data index
        let old_data = mem::take(&mut self.data);
        for (i, value) in old_data {
            while j < other.data.len() && other.data[j].0 < i {
                let new_value = other.data[j].1 * multiple;
                if !new_value.is_zero() {
                    new_tuples.push((other.data[j].0, new_value));
                }
                j += 1;
            }

            if j < other.data.len() && i == other.data[j].0 {
                let new_value = value + other.data[j].1 * multiple;
                if !new_value.is_zero() {
                    new_tuples.push((i, new_value));
                }
                j += 1;
            } else {
                new_tuples.push((i, value));
            }
        }
        new_tuples.extend(other.data[j..].iter()
            .map(|&(j, value)| (j, value * multiple))
            .filter(|(_, value)| !value.is_zero()));

        self.data = new_tuples;
    }

    /// Add `value` to the value at index `i`.
    pub fn shift_value(&mut self, i: usize, value: f64) {
        debug_assert!(i < self.len);

        if !value.is_zero() {
            match self.get_data_index(i) {
                Ok(index) => {
                    self.data[index].1 += value;
                    if self.data[index].1.is_zero() {
                        self.data.remove(index);
                    }
                },
                Err(index) => self.data.insert(index, (i, value)),
            }
        }
    }

    /// Multiply each element of the vector by a value.
    pub fn element_wise_multiply(&mut self, value: f64) {
        debug_assert!(!value.is_zero());

        for (_, v) in &mut self.data {
            *v *= value;
        }
    }

    /// Divide each element of the vector by a value.
    pub fn element_wise_divide(&mut self, value: f64) {
        debug_assert!(!value.is_zero());

        for (_, v) in &mut self.data {
            *v /= value;
        }
    }
}

impl Vector for Sparse {
    type Inner = SparseTuple;

    /// Create a vector of length `len` from `data`.
    ///
    /// Requires that the indices are sorted and that zeros are already filtered.
    fn new(data: Vec<Self::Inner>, len: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < len));
        debug_assert!(data.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(data.iter().all(|(_, v)| !v.is_zero()));

        Self { data, len }
    }

    /// Set the value at index `i` to `value`.
    ///
    /// A new tuple might be inserted, potentially causing many values to be shifted. Setting a
    /// zero removes the tuple.
    fn set(&mut self, i: usize, value: f64) {
        debug_assert!(i < self.len);

        if value.is_zero() {
            self.set_zero(i);
        } else {
            match self.get_data_index(i) {
                Ok(index) => self.data[index].1 = value,
                Err(index) => self.data.insert(index, (i, value)),
            }
        }
    }

    fn get(&self, index: usize) -> f64 {
        debug_assert!(index < self.len);

        self.get_data_index(index).map_or(0_f64, |i| self.data[i].1)
    }

    fn iter_values(&self) -> Iter<'_, Self::Inner> {
        self.data.iter()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}

impl FromIterator<f64> for Sparse {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut counter = 0;

        for item in iter {
            if !item.is_zero() {
                data.push((counter, item));
            }
            counter += 1;
        }

        Self::new(data, counter)
    }
}

impl Display for Sparse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (data_index, (index, value)) in self.data.iter().enumerate() {
            write!(f, "({} {})", index, value)?;
            if data_index < self.data.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
