//! Scoped access to the floating-point environment.
//!
//! The rounding mode and exception-flag register are one process-wide
//! resource. Any test that changes the mode must put it back before the
//! next test runs, on every exit path including panics — so the only
//! way to change it here is through an RAII guard. The comparison
//! engine itself never touches this state; it is a consumer that runs
//! under whatever mode the caller arranged.

// The `libc` crate does not bind the `<fenv.h>` interface, so declare the
// standard C-library functions and exception/rounding constants directly.
// Values are the glibc definitions for x86_64 Linux (the build target).
use libc::c_int;

extern "C" {
    fn feclearexcept(excepts: c_int) -> c_int;
    fn fegetround() -> c_int;
    fn fesetround(round: c_int) -> c_int;
    fn fetestexcept(excepts: c_int) -> c_int;
}

const FE_INVALID: c_int = 0x0001;
const FE_DIVBYZERO: c_int = 0x0004;
const FE_OVERFLOW: c_int = 0x0008;
const FE_UNDERFLOW: c_int = 0x0010;
const FE_INEXACT: c_int = 0x0020;
const FE_ALL_EXCEPT: c_int =
    FE_INEXACT | FE_DIVBYZERO | FE_UNDERFLOW | FE_OVERFLOW | FE_INVALID;

const FE_TONEAREST: c_int = 0x0000;
const FE_DOWNWARD: c_int = 0x0400;
const FE_UPWARD: c_int = 0x0800;
const FE_TOWARDZERO: c_int = 0x0c00;

use std::fmt;

use crate::error::FenvError;

/// IEEE rounding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    Nearest,
    Downward,
    Upward,
    TowardZero,
}

impl RoundingMode {
    const fn to_raw(self) -> libc::c_int {
        match self {
            Self::Nearest => FE_TONEAREST,
            Self::Downward => FE_DOWNWARD,
            Self::Upward => FE_UPWARD,
            Self::TowardZero => FE_TOWARDZERO,
        }
    }

    fn from_raw(raw: libc::c_int) -> Option<Self> {
        match raw {
            x if x == FE_TONEAREST => Some(Self::Nearest),
            x if x == FE_DOWNWARD => Some(Self::Downward),
            x if x == FE_UPWARD => Some(Self::Upward),
            x if x == FE_TOWARDZERO => Some(Self::TowardZero),
            _ => None,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Nearest => "to-nearest",
            Self::Downward => "downward",
            Self::Upward => "upward",
            Self::TowardZero => "toward-zero",
        };
        write!(f, "{s}")
    }
}

/// The ambient rounding mode, if it is one of the four IEEE directions.
#[must_use]
pub fn current_mode() -> Option<RoundingMode> {
    RoundingMode::from_raw(unsafe { fegetround() })
}

/// Clear all accrued floating-point exception flags.
pub fn clear_exceptions() {
    unsafe {
        feclearexcept(FE_ALL_EXCEPT);
    }
}

/// Snapshot of the accrued exception flags.
#[derive(Debug, Clone, Copy)]
pub struct Exceptions(libc::c_int);

impl Exceptions {
    /// Read the currently accrued flags.
    #[must_use]
    pub fn accrued() -> Self {
        Self(unsafe { fetestexcept(FE_ALL_EXCEPT) })
    }

    #[must_use]
    pub const fn inexact(self) -> bool {
        self.0 & FE_INEXACT != 0
    }

    #[must_use]
    pub const fn invalid(self) -> bool {
        self.0 & FE_INVALID != 0
    }

    #[must_use]
    pub const fn overflow(self) -> bool {
        self.0 & FE_OVERFLOW != 0
    }

    #[must_use]
    pub const fn underflow(self) -> bool {
        self.0 & FE_UNDERFLOW != 0
    }

    #[must_use]
    pub const fn divide_by_zero(self) -> bool {
        self.0 & FE_DIVBYZERO != 0
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }
}

/// RAII guard over the rounding mode.
///
/// Construction saves the current mode and installs the requested one;
/// dropping restores the saved mode and clears the exception flags, so
/// a mode change can never leak past the guard's scope.
#[derive(Debug)]
pub struct FenvGuard {
    saved: libc::c_int,
}

impl FenvGuard {
    /// Install `mode` for the lifetime of the guard.
    pub fn set(mode: RoundingMode) -> Result<Self, FenvError> {
        let saved = unsafe { fegetround() };
        if unsafe { fesetround(mode.to_raw()) } != 0 {
            return Err(FenvError::SetRound { mode });
        }
        Ok(Self { saved })
    }
}

impl Drop for FenvGuard {
    fn drop(&mut self) {
        // Nothing useful to do on failure here; the saved value came
        // from fegetround and round-trips on every supported target.
        unsafe {
            fesetround(self.saved);
            feclearexcept(FE_ALL_EXCEPT);
        }
    }
}
