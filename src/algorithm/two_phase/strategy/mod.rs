//! # Strategies
//!
//! Choices the simplex method leaves open, such as which improving column enters the basis.
pub mod pivot_rule;
