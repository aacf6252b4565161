//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in either a dense or a sparse format.

pub mod matrix;
pub mod vector;

/// An index with a value, the element of a sparse vector.
pub type SparseTuple = (usize, f64);
