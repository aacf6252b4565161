//! # Representing linear programs
//!
//! The simplex engine accepts problems in standard form only. The convex form is the input of
//! the dual adapter, which turns it into a standard form problem.
pub mod convex;
pub mod solution;
pub mod standard_form;
