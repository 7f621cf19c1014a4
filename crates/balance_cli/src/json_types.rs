//! JSON output types for the non-interactive subcommands.

use balance_ast::{Difficulty, Term};
use balance_formatter::PanView;
use balance_session::SessionSnapshot;
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
pub struct PansJson {
    pub left: PanView,
    pub right: PanView,
}

impl PansJson {
    pub fn new(left: &Term, right: &Term) -> Self {
        Self {
            left: PanView::from(left),
            right: PanView::from(right),
        }
    }
}

/// Output of `generate`.
#[derive(Serialize, Debug)]
pub struct GenerateJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub equation: String,
    pub left: Term,
    pub right: Term,
    pub solution: i64,
    pub pans: PansJson,
}

/// A step that did not change the scale.
#[derive(Serialize, Debug, Clone)]
pub struct RejectionJson {
    /// Position in the `--step` list, from 0.
    pub index: usize,
    pub command: String,
    /// `parse`, `zero_operand`, `non_integer_division`, `overflow` or `already_solved`.
    pub kind: &'static str,
    pub reason: String,
}

/// Output of `script`.
#[derive(Serialize, Debug)]
pub struct ScriptJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub start_equation: String,
    #[serde(flatten)]
    pub session: SessionSnapshot,
    pub pans: PansJson,
    pub rejections: Vec<RejectionJson>,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            error: error.into(),
            input: None,
        }
    }

    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::new(error)
        }
    }
}
