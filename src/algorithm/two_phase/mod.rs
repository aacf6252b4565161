//! # The two phase simplex method
//!
//! This module contains the iteration logic of the primal simplex method on an explicit tableau.
//! The algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a
//! book by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Phase one minimizes the sum of the artificial variables, starting from the basis that consists
//! of only artificial variables. Once that sum is (close to) zero, phase two minimizes the real
//! objective from the basis that was found. Artificial variables that are still basic at that
//! point are kept at zero level by the ratio test.
use std::time::Instant;

use enum_map::{EnumMap, enum_map};
use log::{debug, trace, warn};

use crate::algorithm::options::Options;
use crate::algorithm::two_phase::iteration_point::{IterationPoint, Phase};
use crate::algorithm::two_phase::strategy::pivot_rule::{Dantzig, PivotRule};
use crate::algorithm::two_phase::tableau::{inconsistent_costs, infeasible_rows, Tableau};
use crate::data::linear_program::solution::{Solution, State};
use crate::data::number_types::float::numerical_precision::{is_relatively_small, is_small};
use crate::error::SolverResult;

pub mod iteration_point;
pub mod strategy;
pub mod tableau;


/// Outcome of a single iteration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    /// A pivot was performed on the row and column of the iteration point.
    Pivot(IterationPoint),
    /// No pivot was performed because the algorithm has terminated.
    Done(State),
}

/// Primal simplex iterations on a tableau.
///
/// The engine owns its tableau. It can be driven one iteration at a time with `step`, or until
/// termination with one of the `solve` methods.
pub struct PrimalSimplex<T, PR = Dantzig> {
    tableau: T,
    rule: PR,
    options: Options,
    point: IterationPoint,
    state: State,
    /// Relative costs should be below these values for a column to enter.
    thresholds: EnumMap<Phase, f64>,
    /// Infeasibility at the start of phase one, the reference for the phase transition.
    reference: f64,
    iterations: usize,
}

impl<T: Tableau, PR: PivotRule> PrimalSimplex<T, PR> {
    /// Start at phase one on a tableau in which all artificial variables are basic.
    pub fn new(tableau: T, options: Options) -> Self {
        let thresholds = enum_map! {
            Phase::One => 0_f64,
            Phase::Two => -options.accuracy.entering,
        };
        let reference = tableau.infeasibility();

        Self {
            tableau,
            rule: PR::new(),
            options,
            point: IterationPoint::new(),
            state: State::Unexplored,
            thresholds,
            reference,
            iterations: 0,
        }
    }

    /// Perform a single iteration.
    ///
    /// In phase one, the engine first checks whether a feasible basis has been found and if so,
    /// moves on to phase two. It then selects a column and a row and pivots.
    ///
    /// # Return value
    ///
    /// The pivot that was performed, or the terminal state if there was nothing left to do.
    pub fn step(&mut self) -> Step {
        if self.state.is_terminal() {
            return Step::Done(self.state);
        }

        self.point.reset();
        if self.point.phase == Phase::One && self.is_feasible() {
            debug!(
                "Feasible after {} iterations, {} artificial variables remain basic, starting phase two",
                self.iterations, self.tableau.basis().nr_artificial(),
            );
            self.point.phase = Phase::Two;
            self.state = State::Feasible;
        }

        let phase = self.point.phase;
        let column = match self.select_column() {
            Some(column) => column,
            None => return self.finish(match phase {
                Phase::One => State::Infeasible,
                Phase::Two => State::Optimal,
            }),
        };
        self.point.column = Some(column);

        let row = match self.select_row(column) {
            Some(row) => row,
            None => return self.finish(match phase {
                Phase::One => State::Infeasible,
                Phase::Two => State::Unbounded,
            }),
        };
        self.point.row = Some(row);

        self.tableau.pivot(row, column, phase);
        self.iterations += 1;
        trace!(
            "Iteration {}: pivot on ({}, {}) in phase {:?}, objective {}, infeasibility {}",
            self.iterations, row, column, phase,
            self.tableau.objective_value(), self.tableau.infeasibility(),
        );
        trace!("{}", self.tableau);
        if self.options.validate {
            self.validate();
        }

        Step::Pivot(self.point)
    }

    /// Iterate until termination or until the configured budget runs out.
    ///
    /// The budget consists of `Options::max_iterations` and `Options::time_limit`, counted from
    /// the start of this call.
    ///
    /// # Return value
    ///
    /// The state in which the algorithm stopped. If the budget ran out, that is `Feasible` when
    /// phase two was reached and `Unexplored` otherwise.
    pub fn solve(&mut self) -> State {
        let max_iterations = self.options.max_iterations;
        // A limit beyond the representable instants is no limit at all
        let deadline = self.options.time_limit.and_then(|limit| Instant::now().checked_add(limit));

        self.solve_with(|iterations| {
            iterations < max_iterations && deadline.is_none_or(|deadline| Instant::now() < deadline)
        })
    }

    /// Iterate until termination or until `keep_iterating` returns false.
    ///
    /// The predicate is called before every iteration with the number of pivots performed during
    /// this call so far.
    pub fn solve_with<F: FnMut(usize) -> bool>(&mut self, mut keep_iterating: F) -> State {
        let mut iterations = 0;
        loop {
            if self.state.is_terminal() {
                break self.state;
            }
            if !keep_iterating(iterations) {
                debug!("Stopped after {} iterations in phase {:?}", iterations, self.point.phase);
                break self.state;
            }

            match self.step() {
                Step::Pivot(_) => iterations += 1,
                Step::Done(state) => break state,
            }
        }
    }

    /// Fix a problem or slack variable at a value and start over at phase one.
    ///
    /// See `Tableau::fix_variable`. The current basis is kept, so solving again is typically
    /// much cheaper than solving from scratch.
    pub fn fix_variable(&mut self, index: usize, value: f64) -> SolverResult<()> {
        self.tableau.fix_variable(index, value)?;

        self.point.restart();
        self.state = State::Unexplored;
        self.reference = self.tableau.infeasibility();
        debug!(
            "Fixed variable {} at {}, restarting with infeasibility {}",
            index, value, self.reference,
        );

        Ok(())
    }

    /// Whether phase one has done its work.
    fn is_feasible(&self) -> bool {
        !self.tableau.basis().has_artificial()
            || is_small(self.reference, self.tableau.infeasibility(), self.options.accuracy.phase_one)
    }

    /// Pricing: select the column to enter the basis, using the pivot rule.
    fn select_column(&mut self) -> Option<usize> {
        let phase = self.point.phase;
        self.rule.select_primal_pivot_column(&self.tableau, phase, self.thresholds[phase])
            .map(|(column, _)| column)
    }

    /// Ratio test: select the row of the variable to leave the basis.
    ///
    /// Of the rows with a positive value in the column, the one with the smallest ratio of right
    /// hand side to that value is selected, the first one in case of a tie. In phase two, rows
    /// with a basic artificial variable are treated separately. If the artificial variable is at
    /// zero level, the row is selected with a tiny ratio, regardless of the sign of the value, so
    /// that it can't become positive. Otherwise only a positive value is accepted, and the row is
    /// selected only if nothing else is available.
    fn select_row(&self, column: usize) -> Option<usize> {
        let epsilon = self.options.accuracy.ratio;
        let phase = self.point.phase;

        let mut smallest: Option<(usize, f64)> = None;
        for row in 0..self.tableau.nr_constraints() {
            let numerator = self.tableau.rhs(row).abs();
            let denominator = self.tableau.get(row, column);

            let ratio = if phase == Phase::Two && self.tableau.basis().entry(row).is_artificial() {
                if denominator.abs() <= epsilon {
                    continue;
                }

                if is_relatively_small(denominator, numerator, epsilon) {
                    f64::EPSILON
                } else if denominator > 0_f64 {
                    f64::MAX
                } else {
                    continue;
                }
            } else if denominator > epsilon {
                numerator / denominator
            } else {
                continue;
            };

            if smallest.is_none_or(|(_, existing)| ratio < existing) {
                smallest = Some((row, ratio));
            }
        }

        smallest.map(|(row, _)| row)
    }

    fn finish(&mut self, state: State) -> Step {
        debug!(
            "{:?} after {} iterations, objective value {}",
            state, self.iterations, self.tableau.objective_value(),
        );
        self.state = state;

        Step::Done(state)
    }

    /// Log what is wrong with the tableau after a pivot.
    fn validate(&self) {
        let tolerance = self.options.accuracy.feasibility;

        let rows = infeasible_rows(&self.tableau, tolerance);
        if !rows.is_empty() {
            warn!("Iteration {}: negative right hand side in rows {:?}", self.iterations, rows);
        }
        if !self.tableau.basis().is_consistent() {
            warn!("Iteration {}: basis and basic columns disagree", self.iterations);
        }
        let columns = inconsistent_costs(&self.tableau, self.point.phase, tolerance);
        if !columns.is_empty() {
            warn!("Iteration {}: basic columns {:?} have a nonzero relative cost", self.iterations, columns);
        }
    }

    /// The tableau in its current state.
    pub fn tableau(&self) -> &T {
        &self.tableau
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.point.phase
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of pivots performed since construction.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Configuration this engine runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Objective value of the current basic solution.
    pub fn objective_value(&self) -> f64 {
        self.tableau.objective_value()
    }

    /// Values of the problem and slack variables in the current basic solution.
    pub fn extract_solution(&self) -> Vec<f64> {
        self.tableau.extract_solution()
    }

    /// Dual values, one per constraint. Only meaningful once optimal.
    pub fn extract_multipliers(&self) -> Vec<f64> {
        self.tableau.extract_multipliers()
    }

    /// Read out the current state and basic solution.
    ///
    /// Multipliers are only included when the solution is optimal.
    pub fn solution(&self) -> Solution {
        let multipliers = self.state.is_optimal().then(|| self.extract_multipliers());
        Solution::new(self.state, self.objective_value(), self.extract_solution(), multipliers)
    }
}
