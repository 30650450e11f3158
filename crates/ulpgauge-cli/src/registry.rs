//! Routine registry: function name + precision lane to a callable and
//! its default policy.
//!
//! The callables are the Rust standard library's float methods plus
//! small adapters for the shapes std does not expose directly (`frexp`,
//! `modf`, `sincos`). Tolerance defaults come from each function's
//! semantic category; sign-propagating functions additionally pin the
//! sign of zero results.

use ulpgauge::classify::ZeroSign;
use ulpgauge::driver::Routine;
use ulpgauge::policy::{Category, Tolerance};
use ulpgauge::precision::PrecisionKind;

/// One registered routine across its available lanes.
#[derive(Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub category: Category,
    pub zero_sign: ZeroSign,
    pub single: Option<Routine<f32>>,
    pub double: Option<Routine<f64>>,
}

impl Entry {
    /// Default comparison policy for this routine.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        let tolerance = Tolerance::from_category(self.category);
        match self.zero_sign {
            ZeroSign::Preserved => tolerance.preserving_zero_sign(),
            ZeroSign::Loose => tolerance,
        }
    }

    /// The routine for a precision lane, if this function has one
    /// there. The wide lane aliases double on this target.
    #[must_use]
    pub fn lane(&self, precision: PrecisionKind) -> Option<Lane> {
        match precision {
            PrecisionKind::Single => self.single.map(Lane::Single),
            PrecisionKind::Double | PrecisionKind::Wide => self.double.map(Lane::Double),
        }
    }
}

/// A routine pinned to its concrete lane.
#[derive(Clone, Copy)]
pub enum Lane {
    Single(Routine<f32>),
    Double(Routine<f64>),
}

/// Look up a routine by its suite name.
#[must_use]
pub fn find(name: &str) -> Option<Entry> {
    entries().into_iter().find(|entry| entry.name == name)
}

macro_rules! both {
    ($name:literal, $category:expr, $zero:expr, $single:expr, $double:expr) => {
        Entry {
            name: $name,
            category: $category,
            zero_sign: $zero,
            single: Some($single),
            double: Some($double),
        }
    };
}

/// The full routine registry.
///
/// Names follow the C math library; the precision lane comes from the
/// suite, so `sqrt` covers `sqrtf`/`sqrt`/`sqrtl` alike.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn entries() -> Vec<Entry> {
    use Category::{Algebraic, Exact, Transcendental};
    use ZeroSign::{Loose, Preserved};

    vec![
        // Trigonometric
        both!("sin", Transcendental, Preserved, Routine::Unary(f32::sin), Routine::Unary(f64::sin)),
        both!("cos", Transcendental, Loose, Routine::Unary(f32::cos), Routine::Unary(f64::cos)),
        both!("tan", Transcendental, Preserved, Routine::Unary(f32::tan), Routine::Unary(f64::tan)),
        both!("asin", Transcendental, Preserved, Routine::Unary(f32::asin), Routine::Unary(f64::asin)),
        both!("acos", Transcendental, Loose, Routine::Unary(f32::acos), Routine::Unary(f64::acos)),
        both!("atan", Transcendental, Preserved, Routine::Unary(f32::atan), Routine::Unary(f64::atan)),
        both!("atan2", Transcendental, Preserved, Routine::Binary(f32::atan2), Routine::Binary(f64::atan2)),
        both!(
            "sincos",
            Transcendental,
            Preserved,
            Routine::UnaryPair(|x: f32| (x.sin(), x.cos())),
            Routine::UnaryPair(|x: f64| (x.sin(), x.cos()))
        ),
        // Hyperbolic
        both!("sinh", Transcendental, Preserved, Routine::Unary(f32::sinh), Routine::Unary(f64::sinh)),
        both!("cosh", Transcendental, Loose, Routine::Unary(f32::cosh), Routine::Unary(f64::cosh)),
        both!("tanh", Transcendental, Preserved, Routine::Unary(f32::tanh), Routine::Unary(f64::tanh)),
        both!("asinh", Transcendental, Preserved, Routine::Unary(f32::asinh), Routine::Unary(f64::asinh)),
        both!("acosh", Transcendental, Loose, Routine::Unary(f32::acosh), Routine::Unary(f64::acosh)),
        both!("atanh", Transcendental, Preserved, Routine::Unary(f32::atanh), Routine::Unary(f64::atanh)),
        // Exponential and logarithmic
        both!("exp", Transcendental, Loose, Routine::Unary(f32::exp), Routine::Unary(f64::exp)),
        both!("exp2", Transcendental, Loose, Routine::Unary(f32::exp2), Routine::Unary(f64::exp2)),
        both!("expm1", Transcendental, Preserved, Routine::Unary(f32::exp_m1), Routine::Unary(f64::exp_m1)),
        both!("log", Transcendental, Loose, Routine::Unary(f32::ln), Routine::Unary(f64::ln)),
        both!("log2", Transcendental, Loose, Routine::Unary(f32::log2), Routine::Unary(f64::log2)),
        both!("log10", Transcendental, Loose, Routine::Unary(f32::log10), Routine::Unary(f64::log10)),
        both!("log1p", Transcendental, Preserved, Routine::Unary(f32::ln_1p), Routine::Unary(f64::ln_1p)),
        both!("pow", Transcendental, Loose, Routine::Binary(f32::powf), Routine::Binary(f64::powf)),
        // Roots and norms
        both!("sqrt", Exact, Preserved, Routine::Unary(f32::sqrt), Routine::Unary(f64::sqrt)),
        both!("cbrt", Algebraic, Preserved, Routine::Unary(f32::cbrt), Routine::Unary(f64::cbrt)),
        both!("hypot", Algebraic, Loose, Routine::Binary(f32::hypot), Routine::Binary(f64::hypot)),
        // Rounding to integer (mode-independent by contract)
        both!("floor", Exact, Preserved, Routine::Unary(f32::floor), Routine::Unary(f64::floor)),
        both!("ceil", Exact, Preserved, Routine::Unary(f32::ceil), Routine::Unary(f64::ceil)),
        both!("trunc", Exact, Preserved, Routine::Unary(f32::trunc), Routine::Unary(f64::trunc)),
        both!("round", Exact, Preserved, Routine::Unary(f32::round), Routine::Unary(f64::round)),
        // Bit manipulation and remainders
        both!("fabs", Exact, Preserved, Routine::Unary(f32::abs), Routine::Unary(f64::abs)),
        both!(
            "copysign",
            Exact,
            Preserved,
            Routine::Binary(f32::copysign),
            Routine::Binary(f64::copysign)
        ),
        both!("fmod", Exact, Preserved, Routine::Binary(|a: f32, b: f32| a % b), Routine::Binary(|a: f64, b: f64| a % b)),
        both!("fmax", Exact, Loose, Routine::Binary(f32::max), Routine::Binary(f64::max)),
        both!("fmin", Exact, Loose, Routine::Binary(f32::min), Routine::Binary(f64::min)),
        // Decompositions
        both!(
            "modf",
            Exact,
            Preserved,
            Routine::UnaryPair(|x: f32| (x.fract().copysign(x), x.trunc())),
            Routine::UnaryPair(|x: f64| (x.fract().copysign(x), x.trunc()))
        ),
        both!(
            "frexp",
            Exact,
            Preserved,
            Routine::UnaryExp(frexp32),
            Routine::UnaryExp(frexp64)
        ),
    ]
}

/// frexp for binary64: mantissa in [0.5, 1) and the power-of-two
/// exponent. Zeros, NaNs, and infinities pass through with exponent 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn frexp64(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let mut bits = x.to_bits();
    let mut field = ((bits >> 52) & 0x7FF) as i32;
    if field == 0 {
        // Subnormal: renormalize through a 2^54 scale first.
        let scaled = x * f64::from_bits(0x4350_0000_0000_0000);
        bits = scaled.to_bits();
        field = ((bits >> 52) & 0x7FF) as i32 - 54;
    }
    let mantissa = f64::from_bits((bits & 0x800F_FFFF_FFFF_FFFF) | (1022u64 << 52));
    (mantissa, field - 1022)
}

/// frexp for binary32; see [`frexp64`].
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn frexp32(x: f32) -> (f32, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let mut bits = x.to_bits();
    let mut field = ((bits >> 23) & 0xFF) as i32;
    if field == 0 {
        let scaled = x * f32::from_bits(0x4C00_0000); // 2^25
        bits = scaled.to_bits();
        field = ((bits >> 23) & 0xFF) as i32 - 25;
    }
    let mantissa = f32::from_bits((bits & 0x807F_FFFF) | (126 << 23));
    (mantissa, field - 126)
}
