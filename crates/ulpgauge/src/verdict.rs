//! Aggregate result of running one table against one routine.
//!
//! The verdict is owned by the caller and discarded after reporting;
//! the engine never retains it. `Display` renders the human diagnostic
//! (every failing vector with operands, expected, actual, and distance);
//! the serde surface feeds the JSON report of whatever outer harness is
//! in use.

use std::fmt;

use serde::Serialize;

use crate::classify::MismatchKind;

/// Why one output position of one vector failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// ULP distance computed but over budget.
    ToleranceExceeded { distance: u64, max_ulp: u32 },
    /// Categorical disagreement from the special-value classifier.
    SpecialValueMismatch { mismatch: MismatchKind },
    /// Finite nonzero values of opposite sign: infinite effective
    /// distance, fails under every budget.
    SignMismatch,
    /// Integer side output differed and the policy checks it.
    SideOutputMismatch { expected: i32, actual: i32 },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToleranceExceeded { distance, max_ulp } => {
                write!(f, "{distance} ULP apart (max {max_ulp})")
            }
            Self::SpecialValueMismatch { mismatch } => write!(f, "{mismatch}"),
            Self::SignMismatch => write!(f, "opposite signs"),
            Self::SideOutputMismatch { expected, actual } => {
                write!(f, "side output {actual}, expected {expected}")
            }
        }
    }
}

/// One failing output position, with everything needed to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Position of the vector in its table.
    pub vector: usize,
    /// Which output position failed (0 = main, 1 = second/side).
    pub output: usize,
    /// Operands, rendered with exact bit patterns.
    pub operands: Vec<String>,
    pub expected: String,
    pub actual: String,
    pub reason: FailureReason,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector {} output {}: f({}) = {}, expected {}: {}",
            self.vector,
            self.output,
            self.operands.join(", "),
            self.actual,
            self.expected,
            self.reason
        )
    }
}

/// Result of one table run: vectors visited and every failure found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub function: String,
    pub vectors_run: usize,
    pub failures: Vec<Failure>,
}

impl Verdict {
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            vectors_run: 0,
            failures: Vec::new(),
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub(crate) fn count_vector(&mut self) {
        self.vectors_run += 1;
    }

    pub(crate) fn record(&mut self, failure: Failure) {
        self.failures.push(failure);
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vector(s), {} failure(s)",
            self.function,
            self.vectors_run,
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n  {failure}")?;
        }
        Ok(())
    }
}
