//! # Number types
//!
//! All computation is done with `f64`. This module collects what is needed to compare those
//! values with a tolerance.
pub mod float;
