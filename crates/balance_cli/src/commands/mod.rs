//! Non-interactive subcommands. Each prints exactly one JSON document.

pub mod generate_json;
pub mod script_json;

use balance_ast::{Difficulty, RejectionReason};
use balance_session::SessionError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

pub(crate) fn print_pretty_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Command-line difficulty, falling back to the configured one.
pub(crate) fn resolve_difficulty(
    arg: Option<&str>,
    fallback: Difficulty,
) -> anyhow::Result<Difficulty> {
    match arg {
        Some(s) => Ok(s.parse::<Difficulty>()?),
        None => Ok(fallback),
    }
}

pub(crate) fn rejection_kind(err: &SessionError) -> &'static str {
    match err {
        SessionError::AlreadySolved => "already_solved",
        SessionError::Rejected(RejectionReason::ZeroOperand) => "zero_operand",
        SessionError::Rejected(RejectionReason::NonIntegerDivision) => "non_integer_division",
        SessionError::Rejected(RejectionReason::Overflow) => "overflow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_difficulty_prefers_argument() {
        assert_eq!(
            resolve_difficulty(Some("hard"), Difficulty::Easy).unwrap(),
            Difficulty::Hard
        );
        assert_eq!(
            resolve_difficulty(None, Difficulty::Medium).unwrap(),
            Difficulty::Medium
        );
        assert!(resolve_difficulty(Some("extreme"), Difficulty::Easy).is_err());
    }

    #[test]
    fn rejection_kinds_are_snake_case() {
        assert_eq!(rejection_kind(&SessionError::AlreadySolved), "already_solved");
        assert_eq!(
            rejection_kind(&SessionError::Rejected(RejectionReason::NonIntegerDivision)),
            "non_integer_division"
        );
    }
}
