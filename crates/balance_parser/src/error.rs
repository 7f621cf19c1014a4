use balance_ast::ParseOperationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parse error: unexpected input at '{0}'")]
    Unexpected(String),
    #[error("Parse error: unexpected end of input")]
    EndOfInput,
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Number out of range")]
    Overflow,
    #[error(transparent)]
    Operation(#[from] ParseOperationError),
}
