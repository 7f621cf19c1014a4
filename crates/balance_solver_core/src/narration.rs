use balance_ast::{Operation, RejectionReason};

/// Step-log line for an accepted operation.
pub fn both_sides_message(op: Operation, value: i64) -> String {
    format!("Applied ({} {}) to both sides.", op.symbol(), value)
}

/// Learner-facing hint for a refused operation.
pub fn rejection_hint(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::ZeroOperand => "You cannot multiply or divide by zero!",
        RejectionReason::NonIntegerDivision => "Try a division that leaves whole numbers!",
        RejectionReason::Overflow => "Those numbers are too big for the scale.",
    }
}

/// Celebration line once `x` is isolated.
pub fn solved_message(solution: i64) -> String {
    format!("Well done! x = {}.", solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_message_uses_symbol() {
        assert_eq!(
            both_sides_message(Operation::Subtract, 5),
            "Applied (- 5) to both sides."
        );
        assert_eq!(
            both_sides_message(Operation::Divide, 3),
            "Applied (÷ 3) to both sides."
        );
    }

    #[test]
    fn both_sides_message_keeps_negative_operand() {
        assert_eq!(
            both_sides_message(Operation::Add, -3),
            "Applied (+ -3) to both sides."
        );
        assert_eq!(
            both_sides_message(Operation::Multiply, -1),
            "Applied (× -1) to both sides."
        );
    }

    #[test]
    fn solved_message_names_value() {
        assert_eq!(solved_message(-4), "Well done! x = -4.");
    }
}
