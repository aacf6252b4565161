//! # Problems with known intermediate and final tableaus.
//!
//! Convention for function names:
//!
//! * `fn standard_form()`
//! * `fn dense_tableau_form()`
//! * `fn sparse_tableau_form()`
//! * `fn optimal_dense_tableau()`
//!
//! and constants for the pivots taken and the final solution.
pub mod problem_1;
