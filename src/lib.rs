//! # A two phase primal simplex engine
//!
//! Linear programs in standard form, `min c^T x` subject to `Ax = b`, `x >= 0` and `b >= 0`, are
//! solved with the two phase Simplex Method on an explicit tableau. The tableau is stored either
//! densely, in a single contiguous buffer, or sparsely, one sparse vector per row; the choice is
//! made from the size of the problem.
//!
//! Arithmetic is done in `f64` throughout, with the tolerances collected in
//! `data::number_types::float::numerical_precision::Accuracy`.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
#[macro_use]
extern crate approx;

#[cfg(test)]
mod tests;
