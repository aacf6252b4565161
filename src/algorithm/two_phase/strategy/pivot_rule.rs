//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use crate::algorithm::two_phase::iteration_point::Phase;
use crate::algorithm::two_phase::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the ratio
/// test, independent of the rule.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// Only non basic columns that are not fixed are considered, and of those only the ones with a
    /// relative cost below `threshold` in the cost row of `phase`.
    ///
    /// # Return value
    ///
    /// The column index and its relative cost, or `None` if no column improves the objective.
    fn select_primal_pivot_column<T: Tableau + ?Sized>(
        &mut self,
        tableau: &T,
        phase: Phase,
        threshold: f64,
    ) -> Option<(usize, f64)>;
}

/// Columns that may enter the basis.
fn candidates<T: Tableau + ?Sized>(tableau: &T) -> impl Iterator<Item = usize> + '_ {
    let basis = tableau.basis();
    basis.selector().excluded().iter()
        .copied()
        .filter(move |&j| !basis.is_fixed(j))
}

/// Pivot on the column with the most negative relative cost, also known as Dantzig's rule.
///
/// Ties are broken in favor of the lowest column index, such that the path of the algorithm does
/// not depend on the order in which columns left the basis.
pub struct Dantzig;
impl PivotRule for Dantzig {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<T: Tableau + ?Sized>(
        &mut self,
        tableau: &T,
        phase: Phase,
        threshold: f64,
    ) -> Option<(usize, f64)> {
        let mut smallest: Option<(usize, f64)> = None;
        for (j, cost) in candidates(tableau)
            .map(|j| (j, tableau.relative_cost(phase, j)))
            .filter(|&(_, cost)| cost < threshold) {
            match smallest.as_mut() {
                Some((existing_j, existing_cost)) => {
                    if cost < *existing_cost || (cost == *existing_cost && j < *existing_j) {
                        *existing_j = j;
                        *existing_cost = cost;
                    }
                },
                None => smallest = Some((j, cost)),
            }
        }

        smallest
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// This is Bland's rule; combined with the lowest row tie break of the ratio test, it does not
/// cycle.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<T: Tableau + ?Sized>(
        &mut self,
        tableau: &T,
        phase: Phase,
        threshold: f64,
    ) -> Option<(usize, f64)> {
        candidates(tableau)
            .map(|j| (j, tableau.relative_cost(phase, j)))
            .filter(|&(_, cost)| cost < threshold)
            .min_by_key(|&(j, _)| j)
    }
}

/// Small modification w.r.t. the `FirstProfitable` rule; it starts the search from the last
/// column selected.
pub struct FirstProfitableWithMemory {
    last_selected: Option<usize>,
}
impl PivotRule for FirstProfitableWithMemory {
    fn new() -> Self {
        Self { last_selected: None }
    }

    fn select_primal_pivot_column<T: Tableau + ?Sized>(
        &mut self,
        tableau: &T,
        phase: Phase,
        threshold: f64,
    ) -> Option<(usize, f64)> {
        let basis = tableau.basis();
        let find = |mut to_consider: std::ops::Range<usize>| to_consider
            .find(|&j| !basis.selector().is_included(j) && !basis.is_fixed(j)
                && tableau.relative_cost(phase, j) < threshold)
            .map(|j| (j, tableau.relative_cost(phase, j)));

        let nr_columns = tableau.nr_columns();
        let potential = match self.last_selected {
            None => find(0..nr_columns),
            Some(last) => find((last + 1)..nr_columns).or_else(|| find(0..(last + 1))),
        };

        self.last_selected = potential.map(|(j, _)| j);
        potential
    }
}
