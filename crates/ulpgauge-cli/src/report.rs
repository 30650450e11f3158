//! Aggregate run report, serializable to JSON.

use serde::Serialize;

use ulpgauge::precision::PrecisionKind;
use ulpgauge::verdict::Verdict;

pub const SCHEMA_VERSION: &str = "1";

/// Outcome of one suite file.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    pub file: String,
    pub function: String,
    pub precision: PrecisionKind,
    pub max_ulp: u32,
    pub verdict: Verdict,
}

impl SuiteOutcome {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }
}

/// Aggregate totals across a run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Totals {
    pub suites: u32,
    pub passed_suites: u32,
    pub vectors: u32,
    pub failures: u32,
}

/// Full report for a `run-all` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub schema_version: String,
    pub timestamp: String,
    pub suites: Vec<SuiteOutcome>,
    pub totals: Totals,
}

impl RunReport {
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            suites: Vec::new(),
            totals: Totals::default(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn push(&mut self, outcome: SuiteOutcome) {
        self.totals.suites += 1;
        if outcome.passed() {
            self.totals.passed_suites += 1;
        }
        self.totals.vectors += outcome.verdict.vectors_run as u32;
        self.totals.failures += outcome.verdict.failed_count() as u32;
        self.suites.push(outcome);
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.totals.failures == 0 && self.totals.suites == self.totals.passed_suites
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
