//! Apply one arithmetic operation to both pans.

use crate::narration::both_sides_message;
use balance_ast::{Operation, RejectionReason, Term};
use tracing::{debug, trace};

/// Outcome of an accepted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub left: Term,
    pub right: Term,
    /// Step-log line, e.g. `Applied (- 5) to both sides.`
    pub description: String,
}

/// Apply `op value` to both sides.
///
/// All checks run before anything is computed into the result, so a
/// rejection never yields partially updated terms.
pub fn apply(
    left: Term,
    right: Term,
    op: Operation,
    value: i64,
) -> Result<Transformed, RejectionReason> {
    match transform_pair(left, right, op, value) {
        Ok((new_left, new_right)) => {
            trace!(%op, value, ?new_left, ?new_right, "applied operation");
            Ok(Transformed {
                left: new_left,
                right: new_right,
                description: both_sides_message(op, value),
            })
        }
        Err(reason) => {
            debug!(%op, value, ?left, ?right, %reason, "rejected operation");
            Err(reason)
        }
    }
}

fn transform_pair(
    left: Term,
    right: Term,
    op: Operation,
    value: i64,
) -> Result<(Term, Term), RejectionReason> {
    if op.rejects_zero() && value == 0 {
        return Err(RejectionReason::ZeroOperand);
    }
    if op == Operation::Divide && !(left.divisible_by(value) && right.divisible_by(value)) {
        return Err(RejectionReason::NonIntegerDivision);
    }

    let step = |t: Term| -> Option<Term> {
        match op {
            Operation::Add => t.checked_offset(value),
            Operation::Subtract => t.checked_offset_neg(value),
            Operation::Multiply => t.checked_scale(value),
            Operation::Divide => t.checked_div_exact(value),
        }
    };

    match (step(left), step(right)) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(RejectionReason::Overflow),
    }
}
