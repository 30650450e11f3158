//! # ulpgauge
//!
//! Data-driven conformance checking for libm-style floating-point math
//! routines.
//!
//! Floating-point correctness is not bitwise equality: vectorized,
//! table-based, and polynomial implementations legitimately disagree
//! with a correctly-rounded reference in the last bit or two. ulpgauge
//! runs a routine against a table of pre-computed vectors from a
//! higher-precision oracle and judges each output by ULP distance under
//! a per-function tolerance, with categorical rules for NaN,
//! infinities, and signed zeros — uniformly across the single, double,
//! and wide precision lanes and across unary, binary, and multi-output
//! function shapes.
//!
//! ## Modules
//!
//! - [`precision`] — layout descriptors, classification predicates, and
//!   the monotonic bit-order mapping
//! - [`ulp`] — ULP distance between two values of one precision
//! - [`classify`] — special-value equivalence ahead of ULP comparison
//! - [`policy`] — per-function ULP budgets and comparison flags
//! - [`table`] — immutable test vector tables and routine shapes
//! - [`suite`] — YAML suite format: parse, validate, compile
//! - [`driver`] — run a table against a routine, produce a verdict
//! - [`verdict`] — failures with bit-exact diagnostics, JSON-ready
//! - [`fenv`] — scoped rounding-mode/exception-flag guard
//! - [`error`] — fatal structural errors and validation findings

pub mod classify;
pub mod driver;
pub mod error;
pub mod fenv;
pub mod policy;
pub mod precision;
pub mod suite;
pub mod table;
pub mod ulp;
pub mod verdict;
