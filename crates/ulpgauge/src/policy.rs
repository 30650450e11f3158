//! Per-function tolerance policy.
//!
//! Different function families carry different achievable accuracy:
//! bit-manipulation and IEEE-exact operations must agree bit for bit,
//! while table-driven or polynomial transcendentals legitimately differ
//! from a correctly-rounded reference in the last bit or two. The policy
//! records the accepted budget plus the per-function comparison flags
//! the driver consults: signed-zero strictness, whether the integer side
//! output is checked, and whether the table's expected outputs assume
//! the default round-to-nearest environment.

use serde::{Deserialize, Serialize};

use crate::classify::ZeroSign;
use crate::ulp::Distance;

/// Semantic accuracy class of a routine.
///
/// Decides the default ULP budget. Assignments follow the function's
/// contract, not its implementation: anything IEEE specifies exactly
/// (rounding to integer, sign transfer, sqrt, fmod) is `Exact`; simple
/// root/norm operations are `Algebraic`; the trig/exp/log/pow families
/// are `Transcendental`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bit-exact contract: 0 ULP.
    Exact,
    /// Faithfully rounded: 1 ULP.
    Algebraic,
    /// Last-place rounding wiggle across implementations: 2 ULP.
    Transcendental,
}

impl Category {
    /// Default accepted maximum ULP distance for the class.
    #[must_use]
    pub const fn max_ulp(self) -> u32 {
        match self {
            Self::Exact => 0,
            Self::Algebraic => 1,
            Self::Transcendental => 2,
        }
    }
}

/// Comparison policy for one routine's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tolerance {
    /// Accepted maximum ULP distance. 0 demands bit-exact agreement
    /// modulo the special-value equivalence rules.
    pub max_ulp: u32,
    /// Zero-sign strictness for this routine's outputs.
    pub zero_sign: ZeroSign,
    /// Whether an integer side output (exponent, quotient bits) is
    /// compared at all. Implementations are sometimes free to represent
    /// it ambiguously, in which case the whole position is ignored.
    pub check_side_output: bool,
    /// Whether the table's expected outputs are only valid under the
    /// default round-to-nearest environment. The engine never changes
    /// the ambient mode; callers of mode-sensitive tables arrange it.
    pub assumes_nearest: bool,
}

impl Tolerance {
    /// Policy with a category's default budget and the common flags:
    /// loose zeros, checked side outputs, round-to-nearest data.
    #[must_use]
    pub const fn from_category(category: Category) -> Self {
        Self {
            max_ulp: category.max_ulp(),
            zero_sign: ZeroSign::Loose,
            check_side_output: true,
            assumes_nearest: true,
        }
    }

    /// Bit-exact policy, the strictest default.
    #[must_use]
    pub const fn exact() -> Self {
        Self::from_category(Category::Exact)
    }

    #[must_use]
    pub const fn with_max_ulp(mut self, max_ulp: u32) -> Self {
        self.max_ulp = max_ulp;
        self
    }

    #[must_use]
    pub const fn preserving_zero_sign(mut self) -> Self {
        self.zero_sign = ZeroSign::Preserved;
        self
    }

    #[must_use]
    pub const fn ignoring_side_output(mut self) -> Self {
        self.check_side_output = false;
        self
    }

    #[must_use]
    pub const fn any_rounding_mode(mut self) -> Self {
        self.assumes_nearest = false;
        self
    }

    /// Whether a computed distance passes under this policy.
    #[must_use]
    pub fn admits(&self, distance: Distance) -> bool {
        distance.within(self.max_ulp)
    }
}
