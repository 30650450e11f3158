use std::path::Path;

use ulpgauge::error::Severity;
use ulpgauge::suite::{parse_suite, validate_suite};

pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let suite = parse_suite(path)?;
    let violations = validate_suite(&suite);

    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warnings = violations
        .iter()
        .filter(|v| v.severity == Severity::Warning)
        .count();

    for v in &violations {
        println!("{v}");
    }

    println!("\n{errors} error(s), {warnings} warning(s)");

    if errors == 0 {
        println!(
            "Suite is valid: {} {} {} with {} vector(s).",
            suite.function,
            suite.precision,
            suite.shape,
            suite.vectors.len()
        );
        Ok(())
    } else {
        Err(format!("suite has {errors} validation error(s)").into())
    }
}
