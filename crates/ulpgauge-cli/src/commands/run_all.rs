use std::path::{Path, PathBuf};

use crate::commands::execute_suite;
use crate::report::RunReport;

pub fn run(suite_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(suite_dir)
        .map_err(|e| format!("cannot read suite directory {}: {e}", suite_dir.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(format!("no suite files in {}", suite_dir.display()).into());
    }

    let mut report = RunReport::new();
    for path in &paths {
        let outcome = execute_suite(path)?;
        if !json {
            let status = if outcome.passed() { "ok" } else { "FAILED" };
            println!(
                "{status:>6}  {} [{}] {} vector(s), {} failure(s)",
                outcome.function,
                outcome.precision,
                outcome.verdict.vectors_run,
                outcome.verdict.failed_count()
            );
            for failure in &outcome.verdict.failures {
                println!("        {failure}");
            }
        }
        report.push(outcome);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\n{} suite(s), {} passed; {} vector(s), {} failure(s)",
            report.totals.suites,
            report.totals.passed_suites,
            report.totals.vectors,
            report.totals.failures
        );
    }

    if report.all_passed() {
        Ok(())
    } else {
        Err(format!("{} vector failure(s)", report.totals.failures).into())
    }
}
