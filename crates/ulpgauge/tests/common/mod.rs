//! Shared helpers for the engine integration tests.

use ulpgauge::driver::{run, Routine};
use ulpgauge::policy::Tolerance;
use ulpgauge::table::{Shape, Table, TestVector};
use ulpgauge::verdict::Verdict;

/// A binary64 value from its exact bit pattern.
pub fn d(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// A binary32 value from its exact bit pattern.
pub fn s(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// The representable neighbor one ULP above `x`.
pub fn one_ulp_up(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1)
}

/// Build a unary binary64 table and run `routine` over it.
pub fn run_unary(
    function: &str,
    vectors: &[(f64, f64)],
    routine: fn(f64) -> f64,
    tolerance: &Tolerance,
) -> Verdict {
    let rows = vectors
        .iter()
        .map(|&(input, expected)| TestVector::unary(input, expected))
        .collect();
    let table = Table::new(function, Shape::Unary, rows).unwrap();
    run(&table, &Routine::Unary(routine), tolerance).unwrap()
}
