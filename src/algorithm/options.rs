//! # Options
//!
//! Configuration of a solver, fixed at construction.
use std::time::Duration;

use crate::data::number_types::float::numerical_precision::Accuracy;

/// Cache size assumed when deciding on a storage format, in bytes.
pub const DEFAULT_CACHE_BUDGET: usize = 4 * 1024 * 1024;

/// Iteration limit of `solve`, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Storage format of the tableau.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Representation {
    /// Dense when the tableau fits in the cache budget, sparse otherwise.
    Automatic,
    /// Always dense.
    Dense,
    /// Always sparse.
    Sparse,
}

/// Solver configuration.
///
/// Start from `Options::default()` and change what is needed with the `with_*` methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Numerical tolerances.
    pub accuracy: Accuracy,
    /// Check the tableau after every pivot and log what is wrong with it.
    ///
    /// Doesn't influence the result.
    pub validate: bool,
    /// Number of iterations after which `solve` gives up.
    pub max_iterations: usize,
    /// Wall clock time after which `solve` gives up.
    pub time_limit: Option<Duration>,
    /// Storage format of the tableau.
    pub representation: Representation,
    /// Size in bytes up to which a dense tableau is used, if the representation is automatic.
    pub cache_budget: usize,
}

impl Options {
    /// Use other numerical tolerances.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: Accuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Enable or disable validation of the tableau after every pivot.
    #[must_use]
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Limit the number of iterations of `solve`.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Limit the running time of `solve`.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Choose a storage format.
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Size in bytes of the cache that a dense tableau should fit in.
    #[must_use]
    pub fn with_cache_budget(mut self, cache_budget: usize) -> Self {
        self.cache_budget = cache_budget;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            accuracy: Accuracy::default(),
            validate: false,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_limit: None,
            representation: Representation::Automatic,
            cache_budget: DEFAULT_CACHE_BUDGET,
        }
    }
}
