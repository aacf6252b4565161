//! # Column and row layout of a tableau
//!
//! The indexing is as follows:
//!
//! /                || Problem variables | Slack variables | Artificial variables | b  |
//! =================||===================|=================|======================|====|
//! Constraints      ||         A         |        A        |           I          | b  |
//! -----------------||-------------------|-----------------|----------------------|----|
//! Objective        ||         c         |        c        |           0          | 0  |
//! -----------------||-------------------|-----------------|----------------------|----|
//! Infeasibility    ||      -sum(A)      |     -sum(A)     |           0          | -sum(b) |
//!
//! Artificial column `j` belongs to constraint `j`. Only problem and slack columns can enter the
//! basis.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, EnumMap, enum_map};

/// Column groups, in the order they are stored.
#[derive(Enum, Debug, Clone, Copy, Eq, PartialEq)]
enum ColumnType {
    /// Variables of the problem.
    Problem,
    /// Slack variables, part of the problem but counted separately.
    Slack,
    /// One per constraint, only used to find an initial basis.
    Artificial,
}

/// Dimensions of a tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    nr_constraints: usize,
    column_group_end: EnumMap<ColumnType, usize>,
}

impl Layout {
    /// Lay out a tableau.
    ///
    /// # Arguments
    ///
    /// * `nr_constraints`: Number of equality constraints, also the number of artificial variables.
    /// * `nr_problem_variables`: Number of columns of the problem that aren't slacks.
    /// * `nr_slack_variables`: Number of slack columns.
    pub fn new(nr_constraints: usize, nr_problem_variables: usize, nr_slack_variables: usize) -> Self {
        let cumulative = cumsum_array_owned([
            nr_problem_variables,
            nr_slack_variables,
            nr_constraints,
        ]);
        let column_group_end = enum_map!{
            ColumnType::Problem    => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };

        Self { nr_constraints, column_group_end }
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.nr_constraints
    }

    /// Number of columns that aren't slack or artificial.
    pub fn nr_problem_variables(&self) -> usize {
        self.column_group_end[ColumnType::Problem]
    }

    /// Number of slack columns.
    pub fn nr_slack_variables(&self) -> usize {
        self.column_group_end[ColumnType::Slack] - self.column_group_end[ColumnType::Problem]
    }

    /// Number of problem and slack columns; the columns that can enter the basis.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Problem, slack and artificial columns, not counting the right hand side.
    pub fn nr_variables_totally(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }

    /// Index of the artificial column belonging to a constraint.
    pub fn artificial_column(&self, row: usize) -> usize {
        debug_assert!(row < self.nr_constraints);

        self.column_group_end[ColumnType::Slack] + row
    }

    /// Index of the right hand side column.
    pub fn rhs_column(&self) -> usize {
        self.nr_variables_totally()
    }

    /// Index of the row with the real costs.
    pub fn objective_row(&self) -> usize {
        self.nr_constraints
    }

    /// Index of the row with the artificial costs.
    pub fn infeasibility_row(&self) -> usize {
        self.nr_constraints + 1
    }

    /// Constraint rows and the two objective rows.
    pub fn nr_rows_totally(&self) -> usize {
        self.nr_constraints + 2
    }

    /// Number of cells of a dense representation, including the right hand side column.
    pub fn nr_cells(&self) -> usize {
        self.nr_rows_totally() * (self.nr_variables_totally() + 1)
    }
}
