use std::path::Path;

use crate::error::SuiteError;
use crate::precision::Precision;
use crate::suite::types::Suite;

/// Parse a YAML suite file into a [`Suite`].
///
/// # Errors
///
/// Returns [`SuiteError::Io`] if the file cannot be read, or
/// [`SuiteError::Yaml`] if the YAML is malformed.
pub fn parse_suite(path: &Path) -> Result<Suite, SuiteError> {
    let content = std::fs::read_to_string(path)?;
    parse_suite_str(&content)
}

/// Parse a YAML suite from a string.
pub fn parse_suite_str(yaml: &str) -> Result<Suite, SuiteError> {
    let suite: Suite = serde_yaml::from_str(yaml)?;
    Ok(suite)
}

/// Parse one operand string under precision `P`.
///
/// Accepts an exact bit pattern (`0x…`, at most one hex digit per four
/// bits of the layout) or a decimal literal, including the `nan`, `inf`,
/// and `-inf` spellings the standard float parser understands.
#[must_use]
pub fn parse_operand<P: Precision>(text: &str) -> Option<P> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let width = (P::LAYOUT.total_bits / 4) as usize;
        if hex.is_empty() || hex.len() > width {
            return None;
        }
        let bits = u64::from_str_radix(hex, 16).ok()?;
        return Some(P::from_bits_wide(bits));
    }
    P::parse_literal(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Shape;

    const MINIMAL_SUITE: &str = r#"
function: sqrt
precision: double
shape: unary
vectors:
  - { in: ["0x4010000000000000"], out: ["2.0"] }
  - { in: ["9.0"], out: ["0x4008000000000000"] }
"#;

    #[test]
    fn parse_minimal_suite() {
        let suite = parse_suite_str(MINIMAL_SUITE).unwrap();
        assert_eq!(suite.function, "sqrt");
        assert_eq!(suite.shape, Shape::Unary);
        assert_eq!(suite.vectors.len(), 2);
        assert!(suite.max_ulp.is_none());
    }

    #[test]
    fn parse_suite_with_overrides_and_side() {
        let yaml = r#"
function: frexp
precision: double
shape: unary_exp
max_ulp: 0
zero_sign: preserved
check_side_output: true
vectors:
  - { in: ["1024.0"], out: ["0.5"], side: 11 }
  - { in: ["0.25"], out: ["0.5"], side: any }
"#;
        let suite = parse_suite_str(yaml).unwrap();
        assert_eq!(suite.max_ulp, Some(0));
        assert_eq!(suite.shape, Shape::UnaryExp);
        assert!(suite.vectors[0].side.is_some());
        assert!(suite.vectors[1].side.is_some());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            parse_suite_str("function: [unclosed"),
            Err(SuiteError::Yaml(_))
        ));
    }

    #[test]
    fn operand_bit_patterns_are_exact() {
        let x: f64 = parse_operand("0x3FF0000000000000").unwrap();
        assert_eq!(x, 1.0);
        let x: f64 = parse_operand("0x0000000000000001").unwrap();
        assert_eq!(x.to_bits(), 1);
        let x: f32 = parse_operand("0x3FB504F3").unwrap();
        assert_eq!(x, 2.0f32.sqrt());
    }

    #[test]
    fn operand_decimal_and_special_spellings() {
        let x: f64 = parse_operand("-1.5").unwrap();
        assert_eq!(x, -1.5);
        let x: f64 = parse_operand("inf").unwrap();
        assert!(Precision::is_infinite(x));
        let x: f64 = parse_operand("-inf").unwrap();
        assert!(Precision::is_sign_negative(x));
        let x: f64 = parse_operand("nan").unwrap();
        assert!(Precision::is_nan(x));
    }

    #[test]
    fn operand_width_is_enforced() {
        // Nine hex digits cannot be a binary32 pattern.
        assert!(parse_operand::<f32>("0x3FB504F30").is_none());
        assert!(parse_operand::<f64>("0x3FF00000000000000").is_none());
        assert!(parse_operand::<f64>("0x").is_none());
        assert!(parse_operand::<f64>("0xZZ").is_none());
    }
}
