//! Data-driven test driver.
//!
//! Pulls each vector from a table in order, invokes the routine under
//! test, and checks every output position: special-value classification
//! first, ULP distance under the tolerance policy otherwise. A failing
//! vector never aborts the run — the point of a table run is the full
//! list of failing inputs — so the only fatal condition is a structural
//! mismatch between the table and the routine.
//!
//! The driver is purely sequential and never touches the floating-point
//! environment; mode-sensitive tables are the caller's business (see
//! [`crate::fenv`]).

use crate::classify::{classify, SpecialVerdict};
use crate::error::EngineError;
use crate::policy::Tolerance;
use crate::precision::Precision;
use crate::table::{Expected, Operands, Shape, SideOutput, Table, TestVector};
use crate::ulp::{ulp_distance, Distance};
use crate::verdict::{Failure, FailureReason, Verdict};

/// A routine under test, tagged by its input/output shape.
///
/// Plain function pointers: every standard math routine (or a thin
/// adapter around one) coerces to one of these, and the tag tells the
/// driver how many comparisons each vector needs.
#[derive(Clone, Copy)]
pub enum Routine<P> {
    Unary(fn(P) -> P),
    Binary(fn(P, P) -> P),
    UnaryPair(fn(P) -> (P, P)),
    UnaryExp(fn(P) -> (P, i32)),
    BinaryQuo(fn(P, P) -> (P, i32)),
}

impl<P> Routine<P> {
    /// The table shape this routine pairs with.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Unary(_) => Shape::Unary,
            Self::Binary(_) => Shape::Binary,
            Self::UnaryPair(_) => Shape::UnaryPair,
            Self::UnaryExp(_) => Shape::UnaryExp,
            Self::BinaryQuo(_) => Shape::BinaryQuo,
        }
    }
}

/// Outputs produced by one invocation.
enum Produced<P> {
    One(P),
    Pair(P, P),
    WithSide(P, i32),
}

/// Run every vector of `table` against `routine` under `tolerance`.
///
/// Vectors are visited in table order so failure output is
/// reproducible. Returns the verdict with every failure recorded, or a
/// fatal [`EngineError`] if the table and routine shapes don't pair.
pub fn run<P: Precision>(
    table: &Table<P>,
    routine: &Routine<P>,
    tolerance: &Tolerance,
) -> Result<Verdict, EngineError> {
    if table.shape() != routine.shape() {
        return Err(EngineError::ShapeMismatch {
            function: table.function().to_string(),
            table: table.shape(),
            routine: routine.shape(),
        });
    }

    let mut verdict = Verdict::new(table.function());
    for (index, vector) in table.iter().enumerate() {
        verdict.count_vector();
        check_vector(index, vector, routine, tolerance, &mut verdict)?;
    }
    Ok(verdict)
}

fn check_vector<P: Precision>(
    index: usize,
    vector: &TestVector<P>,
    routine: &Routine<P>,
    tolerance: &Tolerance,
    verdict: &mut Verdict,
) -> Result<(), EngineError> {
    let produced = match (routine, vector.operands) {
        (Routine::Unary(f), Operands::One(x)) => Produced::One(f(x)),
        (Routine::Binary(f), Operands::Two(a, b)) => Produced::One(f(a, b)),
        (Routine::UnaryPair(f), Operands::One(x)) => {
            let (a, b) = f(x);
            Produced::Pair(a, b)
        }
        (Routine::UnaryExp(f), Operands::One(x)) => {
            let (v, e) = f(x);
            Produced::WithSide(v, e)
        }
        (Routine::BinaryQuo(f), Operands::Two(a, b)) => {
            let (v, q) = f(a, b);
            Produced::WithSide(v, q)
        }
        // Table::new has already vetted every vector against the shape.
        _ => {
            return Err(EngineError::MalformedEntry {
                index,
                shape: routine.shape(),
            })
        }
    };

    let operands = vector.operands.render();
    let mut fail = |output: usize, expected: String, actual: String, reason: FailureReason| {
        verdict.record(Failure {
            vector: index,
            output,
            operands: operands.clone(),
            expected,
            actual,
            reason,
        });
    };

    match (vector.expected, produced) {
        (Expected::One(expected), Produced::One(actual)) => {
            if let Some(reason) = check_output(expected, actual, tolerance) {
                fail(0, expected.render(), actual.render(), reason);
            }
        }
        (Expected::Pair(first, second), Produced::Pair(a, b)) => {
            if let Some(reason) = check_output(first, a, tolerance) {
                fail(0, first.render(), a.render(), reason);
            }
            if let Some(reason) = check_output(second, b, tolerance) {
                fail(1, second.render(), b.render(), reason);
            }
        }
        (Expected::WithSide(expected, side), Produced::WithSide(actual, side_actual)) => {
            if let Some(reason) = check_output(expected, actual, tolerance) {
                fail(0, expected.render(), actual.render(), reason);
            }
            if tolerance.check_side_output {
                if let SideOutput::Checked(side_expected) = side {
                    if side_expected != side_actual {
                        fail(
                            1,
                            side_expected.to_string(),
                            side_actual.to_string(),
                            FailureReason::SideOutputMismatch {
                                expected: side_expected,
                                actual: side_actual,
                            },
                        );
                    }
                }
            }
        }
        _ => {
            return Err(EngineError::MalformedEntry {
                index,
                shape: routine.shape(),
            })
        }
    }
    Ok(())
}

/// Check one float output position: classifier first, ULP second.
fn check_output<P: Precision>(
    expected: P,
    actual: P,
    tolerance: &Tolerance,
) -> Option<FailureReason> {
    match classify(expected, actual, tolerance.zero_sign) {
        SpecialVerdict::Match => None,
        SpecialVerdict::Mismatch(mismatch) => {
            Some(FailureReason::SpecialValueMismatch { mismatch })
        }
        SpecialVerdict::DeferToUlp => match ulp_distance(expected, actual) {
            Distance::OppositeSign => Some(FailureReason::SignMismatch),
            Distance::Ulps(distance) if tolerance.admits(Distance::Ulps(distance)) => None,
            Distance::Ulps(distance) => Some(FailureReason::ToleranceExceeded {
                distance,
                max_ulp: tolerance.max_ulp,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Category;
    use crate::table::SideOutput;

    fn one_ulp_up(x: f64) -> f64 {
        f64::from_bits(x.to_bits() + 1)
    }

    #[test]
    fn exact_routine_passes_exact_table() {
        let table = Table::new("sqrt", Shape::Unary, vec![TestVector::unary(4.0f64, 2.0)])
            .unwrap();
        let verdict = run(&table, &Routine::Unary(f64::sqrt), &Tolerance::exact()).unwrap();
        assert_eq!(verdict.vectors_run, 1);
        assert!(verdict.passed());
    }

    #[test]
    fn one_ulp_error_passes_only_with_budget() {
        let table = Table::new("sqrt", Shape::Unary, vec![TestVector::unary(4.0f64, 2.0)])
            .unwrap();
        let off_by_one: Routine<f64> = Routine::Unary(|x| one_ulp_up(x.sqrt()));

        let strict = run(&table, &off_by_one, &Tolerance::exact()).unwrap();
        assert_eq!(strict.failed_count(), 1);
        assert_eq!(
            strict.failures[0].reason,
            FailureReason::ToleranceExceeded {
                distance: 1,
                max_ulp: 0
            }
        );

        let faithful = run(
            &table,
            &off_by_one,
            &Tolerance::exact().with_max_ulp(1),
        )
        .unwrap();
        assert!(faithful.passed());
    }

    #[test]
    fn shape_mismatch_is_fatal_before_any_comparison() {
        let table = Table::new("atan2", Shape::Binary, vec![TestVector::binary(1.0f64, 1.0, 0.5)])
            .unwrap();
        let err = run(&table, &Routine::Unary(f64::sqrt), &Tolerance::exact()).unwrap_err();
        assert!(matches!(err, EngineError::ShapeMismatch { .. }));
    }

    #[test]
    fn failures_accumulate_without_aborting() {
        let table = Table::new(
            "floor",
            Shape::Unary,
            vec![
                TestVector::unary(1.5f64, 1.0),
                TestVector::unary(2.5f64, 99.0),
                TestVector::unary(-1.5f64, -2.0),
                TestVector::unary(3.5f64, 99.0),
            ],
        )
        .unwrap();
        let verdict = run(&table, &Routine::Unary(f64::floor), &Tolerance::exact()).unwrap();
        assert_eq!(verdict.vectors_run, 4);
        assert_eq!(verdict.failed_count(), 2);
        assert_eq!(verdict.failures[0].vector, 1);
        assert_eq!(verdict.failures[1].vector, 3);
    }

    #[test]
    fn pair_routine_checks_both_outputs() {
        let table = Table::new(
            "sincos",
            Shape::UnaryPair,
            vec![TestVector::unary_pair(0.0f64, 0.0, 2.0)],
        )
        .unwrap();
        let sincos: Routine<f64> = Routine::UnaryPair(|x| (x.sin(), x.cos()));
        let verdict = run(
            &table,
            &sincos,
            &Tolerance::from_category(Category::Transcendental),
        )
        .unwrap();
        // sin(0) == 0 passes; cos(0) == 1 is nowhere near 2.
        assert_eq!(verdict.failed_count(), 1);
        assert_eq!(verdict.failures[0].output, 1);
    }

    #[test]
    fn side_output_is_checked_when_pinned() {
        let frexp_like: Routine<f64> = Routine::UnaryExp(|_| (0.5, 10));
        let table = Table::new(
            "frexp",
            Shape::UnaryExp,
            vec![TestVector::unary_exp(1024.0f64, 0.5, SideOutput::Checked(11))],
        )
        .unwrap();
        let verdict = run(&table, &frexp_like, &Tolerance::exact()).unwrap();
        assert_eq!(verdict.failed_count(), 1);
        assert_eq!(
            verdict.failures[0].reason,
            FailureReason::SideOutputMismatch {
                expected: 11,
                actual: 10
            }
        );
    }

    #[test]
    fn side_output_any_is_ignored() {
        let frexp_like: Routine<f64> = Routine::UnaryExp(|_| (0.5, 10));
        let table = Table::new(
            "frexp",
            Shape::UnaryExp,
            vec![TestVector::unary_exp(1024.0f64, 0.5, SideOutput::Any)],
        )
        .unwrap();
        let verdict = run(&table, &frexp_like, &Tolerance::exact()).unwrap();
        assert!(verdict.passed());
    }

    #[test]
    fn side_output_policy_flag_disables_the_check() {
        let frexp_like: Routine<f64> = Routine::UnaryExp(|_| (0.5, 10));
        let table = Table::new(
            "frexp",
            Shape::UnaryExp,
            vec![TestVector::unary_exp(1024.0f64, 0.5, SideOutput::Checked(11))],
        )
        .unwrap();
        let verdict = run(
            &table,
            &frexp_like,
            &Tolerance::exact().ignoring_side_output(),
        )
        .unwrap();
        assert!(verdict.passed());
    }

    #[test]
    fn binary_quo_routines_run_end_to_end() {
        fn remquo_like(a: f64, b: f64) -> (f64, i32) {
            let q = (a / b).round();
            #[allow(clippy::cast_possible_truncation)]
            let bits = (q as i64 & 0x7) as i32;
            (a - q * b, bits)
        }
        let table = Table::new(
            "remquo",
            Shape::BinaryQuo,
            vec![
                TestVector::binary_quo(13.0f64, 4.0, 1.0, SideOutput::Checked(3)),
                TestVector::binary_quo(12.0f64, 4.0, 0.0, SideOutput::Checked(3)),
                TestVector::binary_quo(10.0f64, 4.0, -2.0, SideOutput::Any),
            ],
        )
        .unwrap();
        let verdict = run(&table, &Routine::BinaryQuo(remquo_like), &Tolerance::exact()).unwrap();
        assert_eq!(verdict.vectors_run, 3);
        assert!(verdict.passed(), "{verdict}");
    }

    #[test]
    fn nan_expectation_accepts_any_nan_payload() {
        let table = Table::new(
            "log",
            Shape::Unary,
            vec![TestVector::unary(-1.0f64, f64::NAN)],
        )
        .unwrap();
        let routine: Routine<f64> = Routine::Unary(|_| f64::from_bits(0x7FF8_0000_DEAD_BEEF));
        let verdict = run(&table, &routine, &Tolerance::exact()).unwrap();
        assert!(verdict.passed());
    }

    #[test]
    fn zero_sign_mismatch_fails_when_preserved() {
        let table = Table::new(
            "modf_frac",
            Shape::Unary,
            vec![TestVector::unary(-3.0f64, -0.0)],
        )
        .unwrap();
        let positive_zero: Routine<f64> = Routine::Unary(|_| 0.0);
        let loose = run(&table, &positive_zero, &Tolerance::exact()).unwrap();
        assert!(loose.passed());
        let strict = run(
            &table,
            &positive_zero,
            &Tolerance::exact().preserving_zero_sign(),
        )
        .unwrap();
        assert_eq!(strict.failed_count(), 1);
    }

    #[test]
    fn opposite_sign_result_fails_every_budget() {
        let table = Table::new("cbrt", Shape::Unary, vec![TestVector::unary(8.0f64, 2.0)])
            .unwrap();
        let negated: Routine<f64> = Routine::Unary(|x| -x.cbrt());
        let generous = Tolerance::exact().with_max_ulp(u32::MAX);
        let verdict = run(&table, &negated, &generous).unwrap();
        assert_eq!(verdict.failed_count(), 1);
        assert_eq!(verdict.failures[0].reason, FailureReason::SignMismatch);
    }

    #[test]
    fn reruns_are_identical() {
        let table = Table::new(
            "sin",
            Shape::Unary,
            vec![
                TestVector::unary(1.0f64, 1.0f64.sin()),
                TestVector::unary(0.5f64, 0.75),
            ],
        )
        .unwrap();
        let routine = Routine::Unary(f64::sin);
        let tolerance = Tolerance::from_category(Category::Transcendental);
        let first = run(&table, &routine, &tolerance).unwrap();
        let second = run(&table, &routine, &tolerance).unwrap();
        assert_eq!(first, second);
    }
}
