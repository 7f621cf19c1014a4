//! Core value types for balance-scale linear equations.
//!
//! An equation is a pair of [`Term`]s (the two pans of the scale) plus the
//! integer value of `x` that balances them. Everything here is plain data;
//! generation and transformation live in `balance_solver_core`.

pub mod difficulty;
pub mod error;
pub mod operation;
pub mod puzzle;
pub mod term;

pub use difficulty::Difficulty;
pub use error::{ParseDifficultyError, ParseOperationError, PuzzleError, RejectionReason};
pub use operation::Operation;
pub use puzzle::{Puzzle, Side};
pub use term::Term;
