use std::path::Path;

use crate::commands::execute_suite;

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = execute_suite(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "{} [{}, max {} ULP]",
            outcome.verdict, outcome.precision, outcome.max_ulp
        );
    }

    if outcome.passed() {
        Ok(())
    } else {
        Err(format!(
            "{}: {} of {} vector(s) failed",
            outcome.function,
            outcome.verdict.failed_count(),
            outcome.verdict.vectors_run
        )
        .into())
    }
}
