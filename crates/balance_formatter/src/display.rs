use balance_ast::{Puzzle, Term};
use std::fmt;

/// Renders a term as `3x - 2`, `-x`, `7` or `0`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayTerm(pub Term);

impl fmt::Display for DisplayTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_zero() {
            return write!(f, "0");
        }
        let Term { coeff, constant } = self.0;

        match coeff {
            0 => {}
            1 => write!(f, "x")?,
            -1 => write!(f, "-x")?,
            c => write!(f, "{}x", c)?,
        }

        match (coeff, constant) {
            (0, c) => write!(f, "{}", c),
            (_, 0) => Ok(()),
            (_, c) if c > 0 => write!(f, " + {}", c),
            (_, c) => write!(f, " - {}", c.unsigned_abs()),
        }
    }
}

/// Renders `left = right`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayEquation {
    pub left: Term,
    pub right: Term,
}

impl From<&Puzzle> for DisplayEquation {
    fn from(p: &Puzzle) -> Self {
        Self {
            left: p.left,
            right: p.right,
        }
    }
}

impl fmt::Display for DisplayEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", DisplayTerm(self.left), DisplayTerm(self.right))
    }
}

pub fn format_term(term: &Term) -> String {
    DisplayTerm(*term).to_string()
}
