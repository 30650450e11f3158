//! Test vector tables.
//!
//! A table is the immutable, ordered set of fixed cases for one routine:
//! each vector holds the input operand(s) and the expected output(s),
//! and its position in the table is its identity in diagnostics. Tables
//! are built once, validated against their declared shape at
//! construction, and only ever iterated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::precision::Precision;

/// Input/output shape of a routine and of the tables that exercise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// One operand, one output: `sin`, `sqrt`, `floor`, …
    Unary,
    /// Two operands, one output: `atan2`, `pow`, `fmod`, …
    Binary,
    /// One operand, two float outputs: `sincos`, `modf`.
    UnaryPair,
    /// One operand, one float output plus an integer: `frexp`.
    UnaryExp,
    /// Two operands, one float output plus an integer: `remquo`.
    BinaryQuo,
}

impl Shape {
    /// Number of input operands.
    #[must_use]
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Unary | Self::UnaryPair | Self::UnaryExp => 1,
            Self::Binary | Self::BinaryQuo => 2,
        }
    }

    /// Number of float outputs (the integer side output not included).
    #[must_use]
    pub const fn output_count(self) -> usize {
        match self {
            Self::Unary | Self::Binary | Self::UnaryExp | Self::BinaryQuo => 1,
            Self::UnaryPair => 2,
        }
    }

    /// Whether the shape carries an integer side output.
    #[must_use]
    pub const fn has_side_output(self) -> bool {
        matches!(self, Self::UnaryExp | Self::BinaryQuo)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::UnaryPair => "unary_pair",
            Self::UnaryExp => "unary_exp",
            Self::BinaryQuo => "binary_quo",
        };
        write!(f, "{s}")
    }
}

/// Input operands of one vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands<P> {
    One(P),
    Two(P, P),
}

impl<P: Precision> Operands<P> {
    /// Diagnostic rendering of each operand.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        match *self {
            Self::One(a) => vec![a.render()],
            Self::Two(a, b) => vec![a.render(), b.render()],
        }
    }
}

/// Expected integer side output of one vector.
///
/// `Any` marks the position "don't care": the reference data does not
/// pin the value down (e.g. an exponent an implementation may represent
/// ambiguously), so the driver accepts whatever comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideOutput {
    Checked(i32),
    Any,
}

/// Expected outputs of one vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected<P> {
    /// Single float output.
    One(P),
    /// Two float outputs, both checked.
    Pair(P, P),
    /// Float output plus integer side output.
    WithSide(P, SideOutput),
}

/// One row of a table: operands in, expected outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestVector<P> {
    pub operands: Operands<P>,
    pub expected: Expected<P>,
}

impl<P: Precision> TestVector<P> {
    #[must_use]
    pub const fn unary(input: P, expected: P) -> Self {
        Self {
            operands: Operands::One(input),
            expected: Expected::One(expected),
        }
    }

    #[must_use]
    pub const fn binary(a: P, b: P, expected: P) -> Self {
        Self {
            operands: Operands::Two(a, b),
            expected: Expected::One(expected),
        }
    }

    #[must_use]
    pub const fn unary_pair(input: P, first: P, second: P) -> Self {
        Self {
            operands: Operands::One(input),
            expected: Expected::Pair(first, second),
        }
    }

    #[must_use]
    pub const fn unary_exp(input: P, expected: P, side: SideOutput) -> Self {
        Self {
            operands: Operands::One(input),
            expected: Expected::WithSide(expected, side),
        }
    }

    #[must_use]
    pub const fn binary_quo(a: P, b: P, expected: P, side: SideOutput) -> Self {
        Self {
            operands: Operands::Two(a, b),
            expected: Expected::WithSide(expected, side),
        }
    }

    /// Whether this vector's operand and output structure matches a
    /// declared table shape.
    #[must_use]
    pub const fn matches(&self, shape: Shape) -> bool {
        match (&self.operands, &self.expected) {
            (Operands::One(_), Expected::One(_)) => matches!(shape, Shape::Unary),
            (Operands::Two(..), Expected::One(_)) => matches!(shape, Shape::Binary),
            (Operands::One(_), Expected::Pair(..)) => matches!(shape, Shape::UnaryPair),
            (Operands::One(_), Expected::WithSide(..)) => matches!(shape, Shape::UnaryExp),
            (Operands::Two(..), Expected::WithSide(..)) => matches!(shape, Shape::BinaryQuo),
            (Operands::Two(..), Expected::Pair(..)) => false,
        }
    }
}

/// Immutable ordered table of vectors for one routine.
#[derive(Debug, Clone)]
pub struct Table<P> {
    function: String,
    shape: Shape,
    vectors: Vec<TestVector<P>>,
}

impl<P: Precision> Table<P> {
    /// Build a table, validating every vector against the declared
    /// shape. A vector of the wrong structure is a pairing bug between
    /// the table and the routine, not a numeric discrepancy, and fails
    /// fast before any comparison can run.
    pub fn new(
        function: impl Into<String>,
        shape: Shape,
        vectors: Vec<TestVector<P>>,
    ) -> Result<Self, EngineError> {
        for (index, vector) in vectors.iter().enumerate() {
            if !vector.matches(shape) {
                return Err(EngineError::MalformedEntry { index, shape });
            }
        }
        Ok(Self {
            function: function.into(),
            shape,
            vectors,
        })
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Restartable in-order iteration over the vectors.
    pub fn iter(&self) -> std::slice::Iter<'_, TestVector<P>> {
        self.vectors.iter()
    }
}

impl<'a, P: Precision> IntoIterator for &'a Table<P> {
    type Item = &'a TestVector<P>;
    type IntoIter = std::slice::Iter<'a, TestVector<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
