//! # Iteration point
//!
//! The phase the engine is in and the pivot it is working on.
use enum_map::Enum;

/// The two phases of the method.
///
/// In phase one, the sum of the artificial variables is minimized to find a feasible basis. In
/// phase two, the real objective is minimized.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Minimizing the infeasibility.
    One,
    /// Minimizing the objective.
    Two,
}

/// Pivot candidate of the current iteration.
///
/// The row and column are cleared at the start of every iteration and filled in by the column
/// selection and the ratio test, in that order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct IterationPoint {
    /// Current phase.
    pub phase: Phase,
    /// Leaving row, if already selected.
    pub row: Option<usize>,
    /// Entering column, if already selected.
    pub column: Option<usize>,
}

impl IterationPoint {
    /// Start of the algorithm: phase one, nothing selected.
    pub fn new() -> Self {
        Self { phase: Phase::One, row: None, column: None }
    }

    /// Forget the pivot candidate, keep the phase.
    pub fn reset(&mut self) {
        self.row = None;
        self.column = None;
    }

    /// Go back to the start of phase one.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Row and column, if both have been selected.
    pub fn pivot_element(&self) -> Option<(usize, usize)> {
        self.row.zip(self.column)
    }
}

impl Default for IterationPoint {
    fn default() -> Self {
        Self::new()
    }
}
