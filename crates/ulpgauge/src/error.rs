//! Error taxonomy.
//!
//! Numeric and categorical disagreements are never errors — they are
//! verdict entries, and a run always visits every vector. The types
//! here cover what *is* fatal: structural mismatches between a table
//! and the routine it is paired with, unusable suite files, and
//! floating-point environment calls the platform rejected.

use thiserror::Error;

use crate::fenv::RoundingMode;
use crate::precision::PrecisionKind;
use crate::table::Shape;

/// Fatal pairing/structure errors inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("table `{function}` is {table} but the routine under test is {routine}")]
    ShapeMismatch {
        function: String,
        table: Shape,
        routine: Shape,
    },

    #[error("vector {index} does not match the declared {shape} shape")]
    MalformedEntry { index: usize, shape: Shape },
}

/// Errors loading or compiling a suite file.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read suite file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse suite YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("vector {index}: `{text}` is not a valid {precision} operand")]
    BadOperand {
        index: usize,
        text: String,
        precision: PrecisionKind,
    },

    #[error("suite failed structural validation with {errors} error(s)")]
    Invalid { errors: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Floating-point environment call failure.
#[derive(Debug, Error)]
pub enum FenvError {
    #[error("the platform rejected rounding mode {mode}")]
    SetRound { mode: RoundingMode },
}

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One structural finding from suite validation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        write!(f, "[{prefix}] {}: {}", self.rule, self.message)
    }
}
