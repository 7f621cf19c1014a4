//! Inclusive integer ranges the generator draws from, per difficulty tier.
//!
//! Defaults reproduce the classic classroom tiers. Hosts may override them
//! (the CLI reads them from its config file), so every override goes through
//! [`TierRanges::validate`] before a [`crate::Generator`] accepts it.

use crate::error::RangeError;
use serde::{Deserialize, Serialize};

/// Upper bound on the magnitude of any configured value.
///
/// Keeps `(a - c) * solution + b` comfortably inside i64.
pub const VALUE_LIMIT: i64 = 1_000_000;

/// Inclusive range `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub lo: i64,
    pub hi: i64,
}

impl IntRange {
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }

    pub fn contains_zero(&self) -> bool {
        self.contains(0)
    }

    /// Number of nonzero values in the range.
    pub fn nonzero_count(&self) -> u64 {
        if self.lo > self.hi {
            return 0;
        }
        let width = (self.hi as i128 - self.lo as i128 + 1) as u64;
        if self.contains_zero() {
            width - 1
        } else {
            width
        }
    }

    fn check(&self, field: &'static str) -> Result<(), RangeError> {
        if self.lo > self.hi {
            return Err(RangeError::Empty {
                field,
                lo: self.lo,
                hi: self.hi,
            });
        }
        if self.lo < -VALUE_LIMIT || self.hi > VALUE_LIMIT {
            return Err(RangeError::TooWide {
                field,
                limit: VALUE_LIMIT,
            });
        }
        Ok(())
    }
}

/// `a·x + b = c`, with `c` derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasyRanges {
    pub solution: IntRange,
    pub a: IntRange,
    pub b: IntRange,
}

/// `a·x + b = c·x + d`, `c` drawn from `1..=a-1`, `d` derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumRanges {
    pub solution: IntRange,
    pub a: IntRange,
    pub b: IntRange,
}

/// `a·x + b = c·x + d`, `a` and `c` nonzero and distinct, `d` derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardRanges {
    pub solution: IntRange,
    /// Shared by `a` and `c`.
    pub coeff: IntRange,
    pub b: IntRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRanges {
    pub easy: EasyRanges,
    pub medium: MediumRanges,
    pub hard: HardRanges,
}

impl Default for TierRanges {
    fn default() -> Self {
        Self {
            easy: EasyRanges {
                solution: IntRange::new(1, 10),
                a: IntRange::new(1, 5),
                b: IntRange::new(0, 20),
            },
            medium: MediumRanges {
                solution: IntRange::new(-5, 10),
                a: IntRange::new(2, 10),
                b: IntRange::new(-10, 10),
            },
            hard: HardRanges {
                solution: IntRange::new(-10, 10),
                coeff: IntRange::new(-5, 10),
                b: IntRange::new(-20, 20),
            },
        }
    }
}

impl TierRanges {
    /// Check that every tier can always produce a puzzle where x survives.
    pub fn validate(&self) -> Result<(), RangeError> {
        let e = &self.easy;
        e.solution.check("easy.solution")?;
        e.a.check("easy.a")?;
        e.b.check("easy.b")?;
        if e.a.contains_zero() {
            return Err(RangeError::ContainsZero { field: "easy.a" });
        }

        let m = &self.medium;
        m.solution.check("medium.solution")?;
        m.a.check("medium.a")?;
        m.b.check("medium.b")?;
        if m.a.lo < 2 {
            return Err(RangeError::BelowMinimum {
                field: "medium.a",
                min: 2,
            });
        }

        let h = &self.hard;
        h.solution.check("hard.solution")?;
        h.coeff.check("hard.coeff")?;
        h.b.check("hard.b")?;
        if h.coeff.nonzero_count() < 2 {
            return Err(RangeError::TooFewNonZero {
                field: "hard.coeff",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TierRanges::default().validate(), Ok(()));
    }

    #[test]
    fn nonzero_count_skips_zero() {
        assert_eq!(IntRange::new(-5, 10).nonzero_count(), 15);
        assert_eq!(IntRange::new(1, 5).nonzero_count(), 5);
        assert_eq!(IntRange::new(0, 0).nonzero_count(), 0);
        assert_eq!(IntRange::new(3, 1).nonzero_count(), 0);
    }

    #[test]
    fn rejects_empty_range() {
        let mut r = TierRanges::default();
        r.easy.b = IntRange::new(5, 1);
        assert_eq!(
            r.validate(),
            Err(RangeError::Empty {
                field: "easy.b",
                lo: 5,
                hi: 1
            })
        );
    }

    #[test]
    fn rejects_zero_easy_coefficient() {
        let mut r = TierRanges::default();
        r.easy.a = IntRange::new(0, 3);
        assert_eq!(r.validate(), Err(RangeError::ContainsZero { field: "easy.a" }));
    }

    #[test]
    fn rejects_medium_coefficient_below_two() {
        let mut r = TierRanges::default();
        r.medium.a = IntRange::new(1, 4);
        assert!(matches!(
            r.validate(),
            Err(RangeError::BelowMinimum { field: "medium.a", .. })
        ));
    }

    #[test]
    fn rejects_hard_range_with_single_nonzero() {
        let mut r = TierRanges::default();
        r.hard.coeff = IntRange::new(0, 1);
        assert_eq!(
            r.validate(),
            Err(RangeError::TooFewNonZero {
                field: "hard.coeff"
            })
        );
    }

    #[test]
    fn rejects_huge_values() {
        let mut r = TierRanges::default();
        r.hard.b = IntRange::new(-VALUE_LIMIT - 1, 0);
        assert!(matches!(r.validate(), Err(RangeError::TooWide { .. })));
    }
}
