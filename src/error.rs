//! # Errors
//!
//! Misuse of the construction and variable fixing interfaces. Outcomes of the algorithm itself
//! (infeasible, unbounded, out of budget) are not errors, they are reported as a `State`.
use thiserror::Error;

/// Reasons to reject input or a request to change the problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Sizes of the provided vectors and matrices don't agree.
    #[error("inconsistent dimensions: {what} has size {found}, expected {expected}")]
    InconsistentDimensions {
        /// The input that has the wrong size.
        what: &'static str,
        /// Size implied by the rest of the input.
        expected: usize,
        /// Size that was provided.
        found: usize,
    },
    /// Standard form requires `b >= 0`; callers negate rows beforehand.
    #[error("right hand side of row {row} is negative: {value}")]
    NegativeRightHandSide {
        /// Constraint index.
        row: usize,
        /// The offending value.
        value: f64,
    },
    /// A NaN or an infinity in the problem data.
    #[error("{what} contains a value that is not finite at index {index}")]
    NotFinite {
        /// Which input.
        what: &'static str,
        /// Position of the value, row major for matrices.
        index: usize,
    },
    /// More slack columns were declared than there are columns.
    #[error("{nr_slack} slack variables declared, but there are only {nr_columns} columns")]
    TooManySlacks {
        /// Declared number of slacks.
        nr_slack: usize,
        /// Total number of columns.
        nr_columns: usize,
    },
    /// The builder was asked to build without all parts of the problem.
    #[error("missing problem data: {0}")]
    Missing(&'static str),
    /// Variable index doesn't refer to a problem or slack variable.
    #[error("variable index {index} out of range, there are {len} variables")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of variables.
        len: usize,
    },
    /// Variables are nonnegative, so they can't be fixed below zero.
    #[error("can't fix variable {index} at {value}, the value should be a nonnegative number")]
    InvalidFixedValue {
        /// Variable index.
        index: usize,
        /// Rejected value.
        value: f64,
    },
    /// The variable was fixed before, at a different value.
    #[error("variable {index} is already fixed at {value}")]
    AlreadyFixed {
        /// Variable index.
        index: usize,
        /// Value it is fixed at.
        value: f64,
    },
}

/// Result type of the fallible operations of this crate.
pub type SolverResult<T> = Result<T, SolverError>;
