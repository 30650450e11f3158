//! ULP (Unit in the Last Place) distance between two values of the same
//! precision.
//!
//! Values are mapped onto the ordered integer line from
//! [`Precision::ordered`], where adjacent representable values differ by
//! exactly 1, so the distance is a plain integer difference. Crossing a
//! power-of-two exponent boundary needs no special casing: the bit
//! patterns on either side of the boundary are already adjacent integers.
//!
//! Callers are expected to route NaN, infinities, and zero pairs through
//! [`crate::classify`] first; this module only deals in finite values.

use crate::precision::Precision;

/// Outcome of a ULP comparison.
///
/// Finite nonzero values of opposite sign are reported as
/// [`Distance::OppositeSign`] rather than a (huge) numeric distance: no
/// tolerance may bridge a sign error, so the variant fails every budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Number of representable values between the operands. 0 means the
    /// bit patterns agree (or both operands are zeros).
    Ulps(u64),
    /// Finite nonzero operands on opposite sides of zero.
    OppositeSign,
}

impl Distance {
    /// Whether this distance is acceptable under a ULP budget.
    #[must_use]
    pub fn within(self, max_ulp: u32) -> bool {
        match self {
            Self::Ulps(d) => d <= u64::from(max_ulp),
            Self::OppositeSign => false,
        }
    }
}

/// Compute the rounding-error distance between an expected and an actual
/// value in units of last-place spacing.
///
/// Both operands must be finite (NaN and infinities belong to the
/// special-value classifier). A zero operand is allowed and sits at the
/// origin of the ordered line, so e.g. the distance from `+0.0` to the
/// smallest positive subnormal is 1.
#[must_use]
pub fn ulp_distance<P: Precision>(expected: P, actual: P) -> Distance {
    debug_assert!(expected.is_finite(), "expected operand must be finite");
    debug_assert!(actual.is_finite(), "actual operand must be finite");

    if expected.to_bits_wide() == actual.to_bits_wide() {
        return Distance::Ulps(0);
    }
    if expected.is_sign_negative() != actual.is_sign_negative()
        && !expected.is_zero()
        && !actual.is_zero()
    {
        return Distance::OppositeSign;
    }
    let gap = i128::from(expected.ordered()) - i128::from(actual.ordered());
    Distance::Ulps(u64::try_from(gap.unsigned_abs()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_values_are_zero_apart() {
        assert_eq!(ulp_distance(1.0f64, 1.0), Distance::Ulps(0));
        assert_eq!(ulp_distance(-1.0f32, -1.0), Distance::Ulps(0));
        assert_eq!(ulp_distance(0.0f64, 0.0), Distance::Ulps(0));
    }

    #[test]
    fn signed_zeros_are_zero_apart() {
        assert_eq!(ulp_distance(0.0f64, -0.0), Distance::Ulps(0));
        assert_eq!(ulp_distance(-0.0f32, 0.0), Distance::Ulps(0));
    }

    #[test]
    fn adjacent_values_are_one_apart() {
        let a = 1.0f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_distance(a, b), Distance::Ulps(1));
        let a = 1.0f32;
        let b = f32::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_distance(a, b), Distance::Ulps(1));
    }

    #[test]
    fn distance_spans_exponent_boundaries() {
        // 1.0 sits on a power-of-two boundary; its neighbors below and
        // above have different ULP spacing but are exactly 2 apart.
        let below = f64::from_bits(1.0f64.to_bits() - 1);
        let above = f64::from_bits(1.0f64.to_bits() + 1);
        assert_eq!(ulp_distance(below, above), Distance::Ulps(2));
    }

    #[test]
    fn distance_spans_the_zero_crossing() {
        let pos = f64::from_bits(1);
        let neg = -pos;
        assert_eq!(ulp_distance(pos, 0.0), Distance::Ulps(1));
        assert_eq!(ulp_distance(neg, 0.0), Distance::Ulps(1));
        // The subnormals adjacent to zero are 2 apart through it, but
        // carry opposite signs, which dominates.
        assert_eq!(ulp_distance(pos, neg), Distance::OppositeSign);
    }

    #[test]
    fn opposite_signs_never_pass() {
        assert_eq!(ulp_distance(2.0f64, -2.0), Distance::OppositeSign);
        assert!(!ulp_distance(2.0f64, -2.0).within(u32::MAX));
    }

    #[test]
    fn zero_budget_admits_only_exact_agreement() {
        assert!(Distance::Ulps(0).within(0));
        assert!(!Distance::Ulps(1).within(0));
    }

    proptest! {
        #[test]
        fn prop_distance_to_self_is_zero(bits in any::<u64>()) {
            let x = f64::from_bits(bits);
            prop_assume!(Precision::is_finite(x));
            prop_assert_eq!(ulp_distance(x, x), Distance::Ulps(0));
        }

        #[test]
        fn prop_distance_is_symmetric(a in any::<u64>(), b in any::<u64>()) {
            let a = f64::from_bits(a);
            let b = f64::from_bits(b);
            prop_assume!(Precision::is_finite(a) && Precision::is_finite(b));
            prop_assert_eq!(ulp_distance(a, b), ulp_distance(b, a));
        }

        #[test]
        fn prop_successor_is_one_ulp_away(bits in 0u32..u32::MAX) {
            let x = f32::from_bits(bits);
            let succ = f32::from_bits(bits + 1);
            prop_assume!(Precision::is_finite(x) && Precision::is_finite(succ));
            prop_assume!(!Precision::is_zero(succ));
            prop_assume!(Precision::is_sign_negative(x) == Precision::is_sign_negative(succ));
            prop_assert_eq!(ulp_distance(x, succ), Distance::Ulps(1));
        }

        #[test]
        fn prop_budget_is_monotonic(
            a in any::<u64>(),
            b in any::<u64>(),
            budget in 0u32..64,
        ) {
            let a = f64::from_bits(a);
            let b = f64::from_bits(b);
            prop_assume!(Precision::is_finite(a) && Precision::is_finite(b));
            let d = ulp_distance(a, b);
            if d.within(budget) {
                prop_assert!(d.within(budget + 1));
            }
        }
    }
}
