//! # Basis bookkeeping
//!
//! Which variable is basic in which row, which columns are basic, and which variables have been
//! fixed at a value.
use std::collections::HashSet;

use crate::algorithm::two_phase::tableau::index_selector::IndexSelector;

/// The variable that is basic in a constraint row.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BasisEntry {
    /// A problem or slack column.
    Column(usize),
    /// An artificial variable. Once it leaves the basis, it can't come back.
    Artificial,
}

impl BasisEntry {
    /// Whether this entry is an artificial variable.
    pub fn is_artificial(self) -> bool {
        self == BasisEntry::Artificial
    }
}

/// Basis of a tableau, one entry per constraint row.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    rows: Vec<BasisEntry>,
    selector: IndexSelector,
    fixed: Vec<Option<f64>>,
}

impl Basis {
    /// The initial basis: all rows artificial, no column basic.
    pub fn new(nr_constraints: usize, nr_columns: usize) -> Self {
        Self {
            rows: vec![BasisEntry::Artificial; nr_constraints],
            selector: IndexSelector::new(nr_columns),
            fixed: vec![None; nr_columns],
        }
    }

    /// Basic variable of a row.
    pub fn entry(&self, row: usize) -> BasisEntry {
        self.rows[row]
    }

    /// Basic variables of all rows.
    pub fn entries(&self) -> &[BasisEntry] {
        &self.rows
    }

    /// Basic and non basic columns.
    pub fn selector(&self) -> &IndexSelector {
        &self.selector
    }

    /// Make `column` basic in `row`, replacing the variable that was basic there.
    pub fn update(&mut self, row: usize, column: usize) {
        debug_assert!(!self.selector.is_included(column));
        debug_assert!(self.fixed[column].is_none());

        if let BasisEntry::Column(leaving) = self.rows[row] {
            self.selector.exclude(leaving);
        }
        self.selector.include(column);
        self.rows[row] = BasisEntry::Column(column);
    }

    /// Make a row artificial, the column that was basic there (if any) becomes non basic.
    pub fn release(&mut self, row: usize) {
        if let BasisEntry::Column(leaving) = self.rows[row] {
            self.selector.exclude(leaving);
        }
        self.rows[row] = BasisEntry::Artificial;
    }

    /// Row in which a column is basic.
    pub fn row_of(&self, column: usize) -> Option<usize> {
        if self.selector.is_included(column) {
            self.rows.iter().position(|&entry| entry == BasisEntry::Column(column))
        } else {
            None
        }
    }

    /// Whether any row has an artificial basic variable.
    pub fn has_artificial(&self) -> bool {
        self.rows.iter().any(|entry| entry.is_artificial())
    }

    /// Number of rows with an artificial basic variable.
    pub fn nr_artificial(&self) -> usize {
        self.rows.iter().filter(|entry| entry.is_artificial()).count()
    }

    /// Record that a column is fixed at a value. It should not be basic.
    pub fn fix(&mut self, column: usize, value: f64) {
        debug_assert!(!self.selector.is_included(column));

        self.fixed[column] = Some(value);
    }

    /// Value a column was fixed at.
    pub fn fixed_value(&self, column: usize) -> Option<f64> {
        self.fixed[column]
    }

    /// Whether a column is fixed.
    pub fn is_fixed(&self, column: usize) -> bool {
        self.fixed[column].is_some()
    }

    /// All fixed columns with their values.
    pub fn fixed(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.fixed.iter().enumerate().filter_map(|(j, value)| value.map(|v| (j, v)))
    }

    /// Whether the basic columns listed per row are exactly the included columns of the selector,
    /// with no column basic in two rows.
    pub fn is_consistent(&self) -> bool {
        let in_rows = self.rows.iter()
            .filter_map(|entry| match entry {
                BasisEntry::Column(j) => Some(*j),
                BasisEntry::Artificial => None,
            })
            .collect::<Vec<_>>();
        let unique = in_rows.iter().copied().collect::<HashSet<_>>();
        let included = self.selector.included().iter().copied().collect::<HashSet<_>>();

        unique.len() == in_rows.len()
            && unique == included
            && in_rows.len() + self.nr_artificial() == self.rows.len()
            && in_rows.iter().all(|&j| self.fixed[j].is_none())
    }
}
