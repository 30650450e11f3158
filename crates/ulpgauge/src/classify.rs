//! Special-value equivalence ahead of ULP comparison.
//!
//! NaN, infinities, and zeros are categorical: either the expected and
//! actual values agree as a class, or they disagree outright — a ULP
//! distance between them is meaningless. The classifier decides which,
//! and hands every remaining finite pair to [`crate::ulp`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::precision::Precision;

/// How zeros of opposite sign compare.
///
/// Some routines are specified to propagate the sign of their argument
/// through a zero result (`sqrt(-0) == -0`, `modf` fractional parts);
/// for those, `-0.0` against an expected `+0.0` is a real defect. Most
/// routines carry no such contract and any zero matches any zero. This
/// is a per-function policy flag, not a universal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroSign {
    /// Any zero matches any zero.
    Loose,
    /// The zero's sign bit must agree with the expected one.
    Preserved,
}

/// Categorical disagreement found by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Exactly one of the two values is NaN.
    NanVsNumber,
    /// Both infinite, opposite signs.
    InfinitySign,
    /// Exactly one of the two values is infinite.
    InfinityVsFinite,
    /// Both zero, opposite signs, under [`ZeroSign::Preserved`].
    ZeroSign,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NanVsNumber => "NaN vs number",
            Self::InfinitySign => "infinity of the wrong sign",
            Self::InfinityVsFinite => "infinity vs finite",
            Self::ZeroSign => "zero of the wrong sign",
        };
        write!(f, "{s}")
    }
}

/// Classifier outcome for one expected/actual pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialVerdict {
    /// The pair agrees categorically; no ULP comparison needed.
    Match,
    /// The pair disagrees categorically; no tolerance applies.
    Mismatch(MismatchKind),
    /// Both finite, not a zero pair — decide by ULP distance.
    DeferToUlp,
}

/// Decide special-value equivalence for `expected` against `actual`.
///
/// Rules, in priority order: any NaN pairs with any NaN (payload and
/// signaling bit are not compared); infinities must agree in sign; a
/// zero pair matches unless `zero_sign` demands sign agreement; anything
/// else is deferred to the ULP comparator.
#[must_use]
pub fn classify<P: Precision>(expected: P, actual: P, zero_sign: ZeroSign) -> SpecialVerdict {
    if expected.is_nan() || actual.is_nan() {
        return if expected.is_nan() && actual.is_nan() {
            SpecialVerdict::Match
        } else {
            SpecialVerdict::Mismatch(MismatchKind::NanVsNumber)
        };
    }
    if expected.is_infinite() || actual.is_infinite() {
        if !expected.is_infinite() || !actual.is_infinite() {
            return SpecialVerdict::Mismatch(MismatchKind::InfinityVsFinite);
        }
        return if expected.is_sign_negative() == actual.is_sign_negative() {
            SpecialVerdict::Match
        } else {
            SpecialVerdict::Mismatch(MismatchKind::InfinitySign)
        };
    }
    if expected.is_zero() && actual.is_zero() {
        return match zero_sign {
            ZeroSign::Loose => SpecialVerdict::Match,
            ZeroSign::Preserved => {
                if expected.is_sign_negative() == actual.is_sign_negative() {
                    SpecialVerdict::Match
                } else {
                    SpecialVerdict::Mismatch(MismatchKind::ZeroSign)
                }
            }
        };
    }
    SpecialVerdict::DeferToUlp
}
