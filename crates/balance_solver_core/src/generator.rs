//! Random puzzle generation.
//!
//! Every tier builds `left = {a, b}` first and derives the last constant
//! from the drawn solution, so the scale balances by construction. The pans
//! are then swapped on a coin flip so that `x` is not always on the left.

use crate::error::RangeError;
use crate::random_source::UniformSource;
use crate::tier_ranges::{IntRange, TierRanges};
use balance_ast::{Difficulty, Puzzle, Term};
use tracing::debug;

/// Draws allowed when resampling a hard-tier coefficient before falling back
/// to a deterministic scan of the range.
pub const MAX_RESAMPLES: usize = 64;

/// Puzzle generator over a validated set of tier ranges.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    ranges: TierRanges,
}

impl Generator {
    /// Generator with the default classroom ranges.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranges(ranges: TierRanges) -> Result<Self, RangeError> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &TierRanges {
        &self.ranges
    }

    pub fn generate<R>(&self, difficulty: Difficulty, rng: &mut R) -> Puzzle
    where
        R: UniformSource + ?Sized,
    {
        let puzzle = match difficulty {
            Difficulty::Easy => self.easy(rng),
            Difficulty::Medium => self.medium(rng),
            Difficulty::Hard => self.hard(rng),
        };
        let puzzle = if rng.coin() { puzzle.swapped() } else { puzzle };

        debug_assert!(puzzle.is_balanced());
        debug!(
            %difficulty,
            left = ?puzzle.left,
            right = ?puzzle.right,
            solution = puzzle.solution,
            "generated puzzle"
        );
        puzzle
    }

    fn easy<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let r = &self.ranges.easy;
        let solution = draw(rng, r.solution);
        let a = draw(rng, r.a);
        let b = draw(rng, r.b);
        let c = a * solution + b;
        Puzzle::new(Term::new(a, b), Term::constant(c), solution)
    }

    fn medium<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let r = &self.ranges.medium;
        let solution = draw(rng, r.solution);
        let a = draw(rng, r.a);
        let b = draw(rng, r.b);
        // c < a keeps x on both pans with different weights.
        let c = rng.int_in(1, a - 1);
        let d = (a - c) * solution + b;
        Puzzle::new(Term::new(a, b), Term::new(c, d), solution)
    }

    fn hard<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Puzzle {
        let r = &self.ranges.hard;
        let solution = draw(rng, r.solution);
        let a = draw_nonzero(rng, r.coeff, None);
        let c = draw_nonzero(rng, r.coeff, Some(a));
        let b = draw(rng, r.b);
        let d = (a - c) * solution + b;
        Puzzle::new(Term::new(a, b), Term::new(c, d), solution)
    }
}

/// Draw a puzzle from the default ranges.
pub fn generate<R>(difficulty: Difficulty, rng: &mut R) -> Puzzle
where
    R: UniformSource + ?Sized,
{
    Generator::new().generate(difficulty, rng)
}

fn draw<R: UniformSource + ?Sized>(rng: &mut R, range: IntRange) -> i64 {
    rng.int_in(range.lo, range.hi)
}

/// Draw a nonzero value, optionally different from `exclude`.
///
/// Resampling is bounded by [`MAX_RESAMPLES`]; past that the first
/// acceptable value in the range is taken. Validated ranges always hold
/// two nonzero values, so an acceptable value exists.
fn draw_nonzero<R: UniformSource + ?Sized>(
    rng: &mut R,
    range: IntRange,
    exclude: Option<i64>,
) -> i64 {
    let acceptable = |v: i64| v != 0 && Some(v) != exclude;

    for _ in 0..MAX_RESAMPLES {
        let v = draw(rng, range);
        if acceptable(v) {
            return v;
        }
    }

    debug!(?range, ?exclude, "resample budget spent, scanning range");
    (range.lo..=range.hi).find(|&v| acceptable(v)).unwrap_or(range.hi)
}
