//! On-disk suite format: parsing, structural validation, compilation.
//!
//! A suite file is the externally-supplied oracle for one routine —
//! YAML with the routine's name, precision lane, shape, optional policy
//! overrides, and the vector list with operands as exact bit patterns
//! or decimal literals. Compilation validates the structure first
//! (malformed suites are refused before any comparison runs) and then
//! produces a typed [`Table`] for the declared lane.

mod parser;
mod types;
mod validator;

pub use parser::{parse_operand, parse_suite, parse_suite_str};
pub use types::{RawSide, RawVector, Suite};
pub use validator::validate_suite;

use crate::error::{Severity, SuiteError};
use crate::policy::Tolerance;
use crate::precision::{Precision, PrecisionKind};
use crate::table::{Expected, Operands, Shape, SideOutput, Table, TestVector};

/// A compiled table in its concrete lane.
///
/// The wide lane compiles to the binary64 table type on targets where
/// extended precision aliases double; the [`PrecisionKind`] on the
/// [`CompiledSuite`] keeps the declared lane for reporting.
#[derive(Debug, Clone)]
pub enum CompiledTable {
    Single(Table<f32>),
    Double(Table<f64>),
}

/// A suite after structural validation and operand parsing.
#[derive(Debug, Clone)]
pub struct CompiledSuite {
    pub precision: PrecisionKind,
    pub table: CompiledTable,
}

impl CompiledSuite {
    #[must_use]
    pub fn function(&self) -> &str {
        match &self.table {
            CompiledTable::Single(t) => t.function(),
            CompiledTable::Double(t) => t.function(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.table {
            CompiledTable::Single(t) => t.len(),
            CompiledTable::Double(t) => t.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        match &self.table {
            CompiledTable::Single(t) => t.shape(),
            CompiledTable::Double(t) => t.shape(),
        }
    }
}

impl Suite {
    /// The policy for this table: the registry's base policy with the
    /// suite's own overrides applied on top.
    #[must_use]
    pub fn tolerance(&self, base: Tolerance) -> Tolerance {
        let mut tolerance = base;
        if let Some(max_ulp) = self.max_ulp {
            tolerance.max_ulp = max_ulp;
        }
        if let Some(zero_sign) = self.zero_sign {
            tolerance.zero_sign = zero_sign;
        }
        if let Some(check) = self.check_side_output {
            tolerance.check_side_output = check;
        }
        tolerance
    }

    /// Validate and compile the suite into a typed table.
    ///
    /// # Errors
    ///
    /// [`SuiteError::Invalid`] if structural validation found errors;
    /// [`SuiteError::BadOperand`] if an operand fails to parse.
    pub fn compile(&self) -> Result<CompiledSuite, SuiteError> {
        let errors = validate_suite(self)
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        if errors > 0 {
            return Err(SuiteError::Invalid { errors });
        }
        let table = match self.precision {
            PrecisionKind::Single => CompiledTable::Single(build_table::<f32>(self)?),
            PrecisionKind::Double | PrecisionKind::Wide => {
                CompiledTable::Double(build_table::<f64>(self)?)
            }
        };
        Ok(CompiledSuite {
            precision: self.precision,
            table,
        })
    }
}

fn build_table<P: Precision>(suite: &Suite) -> Result<Table<P>, SuiteError> {
    let mut vectors = Vec::with_capacity(suite.vectors.len());
    for (index, raw) in suite.vectors.iter().enumerate() {
        let parse = |text: &String| {
            parse_operand::<P>(text).ok_or_else(|| SuiteError::BadOperand {
                index,
                text: text.clone(),
                precision: suite.precision,
            })
        };
        let operands = match raw.inputs.as_slice() {
            [a] => Operands::One(parse(a)?),
            [a, b] => Operands::Two(parse(a)?, parse(b)?),
            _ => return Err(malformed(index, suite.shape)),
        };
        let expected = match (suite.shape, raw.outputs.as_slice()) {
            (Shape::Unary | Shape::Binary, [e]) => Expected::One(parse(e)?),
            (Shape::UnaryPair, [a, b]) => Expected::Pair(parse(a)?, parse(b)?),
            (Shape::UnaryExp | Shape::BinaryQuo, [e]) => {
                let side = match &raw.side {
                    Some(RawSide::Exact(value)) => SideOutput::Checked(*value),
                    Some(RawSide::Marker(_)) | None => SideOutput::Any,
                };
                Expected::WithSide(parse(e)?, side)
            }
            _ => return Err(malformed(index, suite.shape)),
        };
        vectors.push(TestVector { operands, expected });
    }
    Ok(Table::new(suite.function.clone(), suite.shape, vectors)?)
}

fn malformed(index: usize, shape: Shape) -> SuiteError {
    crate::error::EngineError::MalformedEntry { index, shape }.into()
}
