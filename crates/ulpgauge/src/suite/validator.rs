use crate::error::{Severity, Violation};
use crate::precision::PrecisionKind;
use crate::suite::parser::parse_operand;
use crate::suite::types::{RawSide, Suite};

/// Structurally validate a parsed suite before anything is compared.
///
/// A vector whose arity or output count does not match the declared
/// shape is a pairing bug between the table and the routine, so every
/// such finding is an error: compilation refuses the suite outright
/// rather than running a partial table.
#[must_use]
pub fn validate_suite(suite: &Suite) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut error = |rule: &str, message: String| {
        violations.push(Violation {
            severity: Severity::Error,
            rule: rule.to_string(),
            message,
        });
    };

    if suite.vectors.is_empty() {
        error("SUITE-001", format!("suite `{}` has no vectors", suite.function));
    }

    for (index, vector) in suite.vectors.iter().enumerate() {
        let operands = suite.shape.operand_count();
        if vector.inputs.len() != operands {
            error(
                "SUITE-002",
                format!(
                    "vector {index}: {} operand(s) where {} expects {operands}",
                    vector.inputs.len(),
                    suite.shape
                ),
            );
        }
        let outputs = suite.shape.output_count();
        if vector.outputs.len() != outputs {
            error(
                "SUITE-003",
                format!(
                    "vector {index}: {} output(s) where {} expects {outputs}",
                    vector.outputs.len(),
                    suite.shape
                ),
            );
        }
        match &vector.side {
            Some(_) if !suite.shape.has_side_output() => {
                error(
                    "SUITE-004",
                    format!("vector {index}: side output on a {} table", suite.shape),
                );
            }
            Some(RawSide::Marker(marker)) if marker != "any" => {
                error(
                    "SUITE-005",
                    format!("vector {index}: side marker `{marker}` (only `any` is meaningful)"),
                );
            }
            _ => {}
        }
        for text in vector.inputs.iter().chain(vector.outputs.iter()) {
            if !operand_parses(suite.precision, text) {
                error(
                    "SUITE-006",
                    format!(
                        "vector {index}: `{text}` is not a valid {} operand",
                        suite.precision
                    ),
                );
            }
        }
    }

    if let Some(max_ulp) = suite.max_ulp {
        if max_ulp > 8 {
            violations.push(Violation {
                severity: Severity::Warning,
                rule: "SUITE-007".to_string(),
                message: format!(
                    "suite `{}` allows {max_ulp} ULP; budgets above 8 rarely catch regressions",
                    suite.function
                ),
            });
        }
    }

    violations
}

fn operand_parses(precision: PrecisionKind, text: &str) -> bool {
    match precision {
        PrecisionKind::Single => parse_operand::<f32>(text).is_some(),
        PrecisionKind::Double | PrecisionKind::Wide => parse_operand::<f64>(text).is_some(),
    }
}
