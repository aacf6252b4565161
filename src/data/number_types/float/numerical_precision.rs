//! Helper methods for the accuracy of floating point calculations.
use num_traits::Float;

/// Tolerances used by the simplex method.
///
/// The phase transition, the column selection and the ratio test each compare against their own
/// threshold; these are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accuracy {
    /// The phase one objective is considered zero when it is this small relative to the initial
    /// infeasibility.
    pub phase_one: f64,
    /// In phase two, a column only enters when its reduced cost is below minus this value.
    pub entering: f64,
    /// Ratio test threshold.
    ///
    /// Pivot elements should be larger than this, and a right hand side this small relative to
    /// the pivot element is treated as degenerate.
    pub ratio: f64,
    /// How negative a right hand side value may be before it is reported by the validation.
    pub feasibility: f64,
}

impl Accuracy {
    /// Tolerance for the phase one objective.
    #[must_use]
    pub fn with_phase_one(mut self, phase_one: f64) -> Self {
        debug_assert!(phase_one >= 0_f64);

        self.phase_one = phase_one;
        self
    }

    /// Tolerance for the reduced cost of an entering column in phase two.
    #[must_use]
    pub fn with_entering(mut self, entering: f64) -> Self {
        debug_assert!(entering >= 0_f64);

        self.entering = entering;
        self
    }

    /// Tolerance of the ratio test.
    #[must_use]
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        debug_assert!(ratio >= 0_f64);

        self.ratio = ratio;
        self
    }

    /// Tolerance of the feasibility validation.
    #[must_use]
    pub fn with_feasibility(mut self, feasibility: f64) -> Self {
        debug_assert!(feasibility >= 0_f64);

        self.feasibility = feasibility;
        self
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self {
            phase_one: 1e-9,
            entering: 1e-9,
            ratio: 1e-10,
            feasibility: 1e-8,
        }
    }
}

/// Whether `value` is negligible compared to `reference`.
///
/// The reference is clamped from below at one, so for small references this is an absolute
/// comparison with `epsilon`.
pub fn is_small<F: Float>(reference: F, value: F, epsilon: F) -> bool {
    debug_assert!(epsilon >= F::zero());

    value.abs() <= epsilon * reference.abs().max(F::one())
}

/// Whether `value` is negligible relative to `reference`, without clamping.
///
/// Used for the degenerate rows of the ratio test, where the reference is a pivot element that may
/// well be smaller than one.
pub fn is_relatively_small<F: Float>(reference: F, value: F, epsilon: F) -> bool {
    debug_assert!(epsilon >= F::zero());

    value.abs() <= epsilon * reference.abs()
}

#[cfg(test)]
mod test {
    use crate::data::number_types::float::numerical_precision::{Accuracy, is_relatively_small, is_small};

    #[test]
    fn small_relative_to_reference() {
        assert!(is_small(1e6, 1e-4, 1e-9));
        assert!(!is_small(1e6, 1e-2, 1e-9));
        assert!(is_small(0.5, 1e-10, 1e-9));
        assert!(!is_small(0.5, 1e-8, 1e-9));
        assert!(is_small(0_f64, 0_f64, 0_f64));
        assert!(is_small(-1e3, -1e-7, 1e-9));
    }

    #[test]
    fn relatively_small_does_not_clamp() {
        assert!(!is_relatively_small(1e-3, 1e-12, 1e-10));
        assert!(is_relatively_small(1e-3, 1e-14, 1e-10));
        assert!(is_relatively_small(-2_f64, 0_f64, 1e-10));
    }

    #[test]
    fn builder_methods() {
        let accuracy = Accuracy::default().with_entering(1e-6).with_ratio(1e-12);
        assert_relative_eq!(accuracy.entering, 1e-6);
        assert_relative_eq!(accuracy.ratio, 1e-12);
        assert_relative_eq!(accuracy.phase_one, Accuracy::default().phase_one);
        assert_relative_eq!(accuracy.feasibility, Accuracy::default().feasibility);
    }
}
