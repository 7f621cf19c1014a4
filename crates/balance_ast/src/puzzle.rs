use crate::error::PuzzleError;
use crate::term::Term;
use serde::{Deserialize, Serialize};

/// One pan of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One equation instance: `left = right`, balanced at `x = solution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub left: Term,
    pub right: Term,
    pub solution: i64,
}

impl Puzzle {
    pub fn new(left: Term, right: Term, solution: i64) -> Self {
        Self {
            left,
            right,
            solution,
        }
    }

    /// Build a puzzle from a typed equation, solving it for `x`.
    ///
    /// Only equations with exactly one integer root are playable.
    pub fn from_sides(left: Term, right: Term) -> Result<Self, PuzzleError> {
        // (a - c) x = d - b
        let denominator = left.coeff as i128 - right.coeff as i128;
        let numerator = right.constant as i128 - left.constant as i128;
        if denominator == 0 {
            return Err(PuzzleError::DegenerateEquation(left.coeff));
        }
        if numerator % denominator != 0 {
            let (n, d) = reduce(numerator, denominator);
            return Err(PuzzleError::NonIntegerSolution {
                numerator: n,
                denominator: d,
            });
        }
        let solution = i64::try_from(numerator / denominator)
            .map_err(|_| PuzzleError::SolutionOutOfRange)?;
        Ok(Self::new(left, right, solution))
    }

    /// Pan weights at `x`.
    pub fn balance_at(&self, x: i64) -> (i128, i128) {
        (self.left.eval_at(x), self.right.eval_at(x))
    }

    /// Both pans weigh the same at the stored solution.
    pub fn is_balanced(&self) -> bool {
        let (l, r) = self.balance_at(self.solution);
        l == r
    }

    /// Same equation with the pans exchanged.
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            solution: self.solution,
        }
    }
}

/// Reduce a fraction to lowest terms with a positive denominator,
/// saturating into i64 for display.
fn reduce(numerator: i128, denominator: i128) -> (i64, i64) {
    let mut a = numerator.abs();
    let mut b = denominator.abs();
    while b != 0 {
        (a, b) = (b, a % b);
    }
    let g = a.max(1);
    let sign = if denominator < 0 { -1 } else { 1 };
    let n = (sign * numerator / g).clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    let d = (denominator.abs() / g).min(i64::MAX as i128) as i64;
    (n, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sides_solves_for_x() {
        let p = Puzzle::from_sides(Term::new(3, 2), Term::new(1, 14)).unwrap();
        assert_eq!(p.solution, 6);
        assert!(p.is_balanced());
    }

    #[test]
    fn from_sides_handles_negative_root() {
        let p = Puzzle::from_sides(Term::new(-2, 1), Term::new(3, 11)).unwrap();
        assert_eq!(p.solution, -2);
    }

    #[test]
    fn from_sides_rejects_cancelling_x() {
        let err = Puzzle::from_sides(Term::new(2, 1), Term::new(2, 5)).unwrap_err();
        assert_eq!(err, PuzzleError::DegenerateEquation(2));
    }

    #[test]
    fn from_sides_rejects_fractional_root() {
        // 4x = 6  ->  x = 3/2
        let err = Puzzle::from_sides(Term::new(4, 0), Term::constant(6)).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::NonIntegerSolution {
                numerator: 3,
                denominator: 2
            }
        );
    }

    #[test]
    fn swapped_keeps_balance() {
        let p = Puzzle::new(Term::new(1, 5), Term::constant(12), 7);
        let s = p.swapped();
        assert_eq!(s.left, p.right);
        assert_eq!(s.right, p.left);
        assert!(s.is_balanced());
    }
}
