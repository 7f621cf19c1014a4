use serde::{Deserialize, Serialize};

/// A linear expression `coeff * x + constant` sitting on one pan of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Term {
    pub coeff: i64,
    pub constant: i64,
}

impl Term {
    /// The isolated unknown, `x`.
    pub const X: Term = Term {
        coeff: 1,
        constant: 0,
    };

    pub const ZERO: Term = Term {
        coeff: 0,
        constant: 0,
    };

    pub const fn new(coeff: i64, constant: i64) -> Self {
        Self { coeff, constant }
    }

    /// A term without an `x` part.
    pub const fn constant(value: i64) -> Self {
        Self {
            coeff: 0,
            constant: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff == 0 && self.constant == 0
    }

    pub fn has_x(&self) -> bool {
        self.coeff != 0
    }

    /// Weight of the pan when `x = value`.
    ///
    /// Widened to i128 so that evaluating any pair of i64 fields never wraps.
    pub fn eval_at(&self, value: i64) -> i128 {
        self.coeff as i128 * value as i128 + self.constant as i128
    }

    /// Shift the constant part, `None` on overflow.
    pub fn checked_offset(&self, delta: i64) -> Option<Term> {
        Some(Term {
            coeff: self.coeff,
            constant: self.constant.checked_add(delta)?,
        })
    }

    /// Lower the constant part, `None` on overflow.
    ///
    /// Not `checked_offset(-delta)`: `delta = i64::MIN` has no negation but
    /// can still leave a representable constant.
    pub fn checked_offset_neg(&self, delta: i64) -> Option<Term> {
        Some(Term {
            coeff: self.coeff,
            constant: self.constant.checked_sub(delta)?,
        })
    }

    /// Scale both parts, `None` on overflow.
    pub fn checked_scale(&self, factor: i64) -> Option<Term> {
        Some(Term {
            coeff: self.coeff.checked_mul(factor)?,
            constant: self.constant.checked_mul(factor)?,
        })
    }

    /// Whether both parts are multiples of `divisor`. False for a zero divisor.
    pub fn divisible_by(&self, divisor: i64) -> bool {
        // wrapping_rem: `i64::MIN % -1` is 0, the quotient overflow is
        // reported by `checked_div_exact` instead.
        divisor != 0
            && self.coeff.wrapping_rem(divisor) == 0
            && self.constant.wrapping_rem(divisor) == 0
    }

    /// Exact division of both parts, `None` when a remainder is left
    /// (or on `i64::MIN / -1`).
    pub fn checked_div_exact(&self, divisor: i64) -> Option<Term> {
        if !self.divisible_by(divisor) {
            return None;
        }
        Some(Term {
            coeff: self.coeff.checked_div(divisor)?,
            constant: self.constant.checked_div(divisor)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_at_substitutes_x() {
        assert_eq!(Term::new(3, 2).eval_at(6), 20);
        assert_eq!(Term::new(-1, 4).eval_at(-2), 6);
        assert_eq!(Term::constant(9).eval_at(100), 9);
    }

    #[test]
    fn eval_at_does_not_wrap() {
        let t = Term::new(i64::MAX, i64::MAX);
        assert_eq!(t.eval_at(2), 3 * i64::MAX as i128);
    }

    #[test]
    fn is_zero_only_for_empty_pan() {
        assert!(Term::ZERO.is_zero());
        assert!(!Term::X.is_zero());
        assert!(!Term::constant(-1).is_zero());
    }

    #[test]
    fn divisible_by_checks_both_parts() {
        assert!(Term::new(4, -8).divisible_by(4));
        assert!(!Term::new(4, 6).divisible_by(4));
        assert!(Term::ZERO.divisible_by(7));
        assert!(!Term::new(4, 8).divisible_by(0));
    }

    #[test]
    fn checked_ops_report_overflow() {
        assert_eq!(Term::new(1, i64::MAX).checked_offset(1), None);
        assert_eq!(Term::new(1, 0).checked_offset_neg(i64::MIN), None);
        assert_eq!(
            Term::new(1, -1).checked_offset_neg(i64::MIN),
            Some(Term::new(1, i64::MAX))
        );
        assert_eq!(Term::new(i64::MAX, 0).checked_scale(2), None);
        assert_eq!(Term::new(i64::MIN, 0).checked_div_exact(-1), None);
        assert_eq!(Term::new(6, -9).checked_div_exact(-3), Some(Term::new(-2, 3)));
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_string(&Term::new(2, -3)).unwrap();
        assert_eq!(json, r#"{"coeff":2,"constant":-3}"#);
    }
}
