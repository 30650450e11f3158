use serde::Deserialize;

use crate::classify::ZeroSign;
use crate::precision::PrecisionKind;
use crate::table::Shape;

/// A complete YAML vector suite for one routine.
///
/// This is the on-disk form of a test vector table: the routine's name,
/// its precision lane and shape, optional policy overrides, and the
/// vector list. The reference outputs are produced outside this crate
/// (the suite is an oracle, not something the engine generates).
#[derive(Debug, Clone, Deserialize)]
pub struct Suite {
    pub function: String,
    pub precision: PrecisionKind,
    pub shape: Shape,
    /// Override of the registry's default ULP budget for this table.
    #[serde(default)]
    pub max_ulp: Option<u32>,
    /// Override of the routine's zero-sign strictness.
    #[serde(default)]
    pub zero_sign: Option<ZeroSign>,
    /// Override of whether the integer side output is compared.
    #[serde(default)]
    pub check_side_output: Option<bool>,
    #[serde(default)]
    pub vectors: Vec<RawVector>,
}

/// One unparsed vector row.
///
/// Operands are strings so the file can carry exact bit patterns
/// (`"0x3FF0000000000000"`) alongside plain decimal literals and
/// `nan`/`inf` spellings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVector {
    #[serde(rename = "in")]
    pub inputs: Vec<String>,
    #[serde(rename = "out")]
    pub outputs: Vec<String>,
    /// Expected integer side output; absent means "don't care".
    #[serde(default)]
    pub side: Option<RawSide>,
}

/// Side-output expectation as written in the file: a pinned integer or
/// the literal marker `any`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSide {
    Exact(i32),
    Marker(String),
}
