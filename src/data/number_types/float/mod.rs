//! # Floating point numbers
//!
//! Rounding errors accumulate over the pivots of the simplex method, so every comparison that
//! decides the path of the algorithm goes through a tolerance.
pub mod numerical_precision;
