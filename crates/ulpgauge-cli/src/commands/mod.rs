pub mod list;
pub mod run;
pub mod run_all;
pub mod validate;

use std::error::Error;
use std::path::Path;

use ulpgauge::driver;
use ulpgauge::suite::{parse_suite, CompiledTable};

use crate::registry::{self, Lane};
use crate::report::SuiteOutcome;

/// Load one suite file, pair it with its registered routine, and run it.
pub(crate) fn execute_suite(path: &Path) -> Result<SuiteOutcome, Box<dyn Error>> {
    let suite = parse_suite(path)?;
    let entry = registry::find(&suite.function)
        .ok_or_else(|| format!("no registered routine named `{}`", suite.function))?;
    let lane = entry.lane(suite.precision).ok_or_else(|| {
        format!(
            "routine `{}` has no {} lane",
            suite.function, suite.precision
        )
    })?;
    let tolerance = suite.tolerance(entry.tolerance());
    let compiled = suite.compile()?;

    let verdict = match (&compiled.table, lane) {
        (CompiledTable::Single(table), Lane::Single(routine)) => {
            driver::run(table, &routine, &tolerance)?
        }
        (CompiledTable::Double(table), Lane::Double(routine)) => {
            driver::run(table, &routine, &tolerance)?
        }
        _ => return Err(format!("suite `{}` compiled to the wrong lane", suite.function).into()),
    };

    Ok(SuiteOutcome {
        file: path.display().to_string(),
        function: suite.function.clone(),
        precision: suite.precision,
        max_ulp: tolerance.max_ulp,
        verdict,
    })
}
