//! # Vector types for the tableau
//!
//! Sparse and dense vectors. These were written by hand, because a certain specific set of
//! operations needs to be done quickly with these types: the rows of the sparse tableau are
//! updated with a sparse `axpy` on every pivot.
use std::fmt::{Debug, Display};
use std::slice::Iter;

pub use dense::Dense as DenseVector;
pub use sparse::Sparse as SparseVector;

mod dense;
mod sparse;

/// Defines basic ways to create or change a vector, regardless of back-end.
pub trait Vector: PartialEq + Display + Debug {
    /// Items stored internally.
    type Inner;

    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Will not be changed and directly used for creation.
    /// * `len`: Length of the vector represented (and not necessarily of the internal data
    /// structure).
    fn new(data: Vec<Self::Inner>, len: usize) -> Self;
    /// Set the value at an index.
    ///
    /// Depending on internal representation, this can be an expensive operation (for
    /// `SparseVector`s, the cost depends on the (lack of) sparsity).
    fn set(&mut self, index: usize, value: f64);
    /// Retrieve the value at an index.
    fn get(&self, index: usize) -> f64;
    /// Iterate over the internal values.
    fn iter_values(&self) -> Iter<'_, Self::Inner>;
    /// Number of items represented by the vector.
    fn len(&self) -> usize;
    /// Whether the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Get the size of the internal data structure (and not of the represented vector).
    fn size(&self) -> usize;
}
