//! Error types for balance_ast crate.

use thiserror::Error;

/// Why an operation was refused. The equation is left untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Multiply or divide by 0.
    #[error("zero operand not allowed for multiply/divide")]
    ZeroOperand,

    /// Division would leave a fractional coefficient or constant.
    #[error("non-integer result")]
    NonIntegerDivision,

    /// A coefficient or constant would leave the i64 range.
    #[error("result out of range")]
    Overflow,
}

/// Unknown difficulty name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

/// Unknown operation name or symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid operation '{0}' (expected add, sub, mul or div)")]
pub struct ParseOperationError(pub String);

/// A typed-in equation that cannot be played as a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Both sides carry the same x coefficient, so x cancels out.
    #[error("x cancels out: both sides have coefficient {0}")]
    DegenerateEquation(i64),

    /// The root exists but is not an integer.
    #[error("solution {numerator}/{denominator} is not an integer")]
    NonIntegerSolution { numerator: i64, denominator: i64 },

    /// The root does not fit in an i64.
    #[error("solution out of range")]
    SolutionOutOfRange,
}
