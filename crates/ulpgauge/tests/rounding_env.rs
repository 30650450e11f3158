//! Scoped rounding-mode guard behavior.
//!
//! The floating-point environment is process-global per thread; these
//! tests check that every path out of a guarded scope restores what it
//! found, and that an installed mode actually steers arithmetic.

use std::hint::black_box;

use ulpgauge::fenv::{clear_exceptions, current_mode, Exceptions, FenvGuard, RoundingMode};

#[test]
fn default_environment_rounds_to_nearest() {
    assert_eq!(current_mode(), Some(RoundingMode::Nearest));
}

#[test]
fn guard_scopes_a_mode_change() {
    {
        let _guard = FenvGuard::set(RoundingMode::TowardZero).unwrap();
        assert_eq!(current_mode(), Some(RoundingMode::TowardZero));
    }
    assert_eq!(current_mode(), Some(RoundingMode::Nearest));
}

#[test]
fn guard_restores_across_early_returns() {
    fn inner(fail_fast: bool) -> Result<(), &'static str> {
        let _guard = FenvGuard::set(RoundingMode::Upward).map_err(|_| "setround")?;
        if fail_fast {
            return Err("bailed");
        }
        Ok(())
    }
    assert!(inner(true).is_err());
    assert_eq!(current_mode(), Some(RoundingMode::Nearest));
    assert!(inner(false).is_ok());
    assert_eq!(current_mode(), Some(RoundingMode::Nearest));
}

#[test]
fn nested_guards_restore_in_reverse_order() {
    let outer = FenvGuard::set(RoundingMode::Downward).unwrap();
    {
        let _inner = FenvGuard::set(RoundingMode::Upward).unwrap();
        assert_eq!(current_mode(), Some(RoundingMode::Upward));
    }
    assert_eq!(current_mode(), Some(RoundingMode::Downward));
    drop(outer);
    assert_eq!(current_mode(), Some(RoundingMode::Nearest));
}

#[test]
fn directed_modes_steer_inexact_division() {
    // 1/3 is inexact, so the upward and downward quotients must differ
    // by exactly one ULP around the to-nearest result.
    let up = {
        let _guard = FenvGuard::set(RoundingMode::Upward).unwrap();
        black_box(1.0f64) / black_box(3.0f64)
    };
    let down = {
        let _guard = FenvGuard::set(RoundingMode::Downward).unwrap();
        black_box(1.0f64) / black_box(3.0f64)
    };
    assert!(up > down);
    assert_eq!(up.to_bits(), down.to_bits() + 1);

    let nearest = black_box(1.0f64) / black_box(3.0f64);
    assert!(nearest == up || nearest == down);
}

#[test]
fn guard_leaves_exception_flags_clear() {
    {
        let _guard = FenvGuard::set(RoundingMode::Upward).unwrap();
        // Provoke inexact inside the scope.
        let _ = black_box(1.0f64) / black_box(3.0f64);
    }
    assert!(!Exceptions::accrued().inexact());
}

#[test]
fn exception_flags_accrue_until_cleared() {
    clear_exceptions();
    let quotient = black_box(1.0f64) / black_box(3.0f64);
    assert!(quotient > 0.0);
    assert!(Exceptions::accrued().inexact());
    clear_exceptions();
    assert!(!Exceptions::accrued().any());
}
