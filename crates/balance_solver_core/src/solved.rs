use balance_ast::{Side, Term};

/// The pan holding the bare `x`, if the equation reads `x = solution`
/// (in either order).
pub fn solved_side(left: Term, right: Term, solution: i64) -> Option<Side> {
    let answer = Term::constant(solution);
    if left == Term::X && right == answer {
        Some(Side::Left)
    } else if right == Term::X && left == answer {
        Some(Side::Right)
    } else {
        None
    }
}

pub fn is_solved(left: Term, right: Term, solution: i64) -> bool {
    solved_side(left, right, solution).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_on_either_side() {
        assert_eq!(
            solved_side(Term::X, Term::constant(7), 7),
            Some(Side::Left)
        );
        assert_eq!(
            solved_side(Term::constant(-3), Term::X, -3),
            Some(Side::Right)
        );
    }

    #[test]
    fn wrong_value_is_not_solved() {
        assert!(!is_solved(Term::X, Term::constant(6), 7));
    }

    #[test]
    fn scaled_x_is_not_solved() {
        assert!(!is_solved(Term::new(2, 0), Term::constant(14), 7));
        assert!(!is_solved(Term::new(-1, 0), Term::constant(-7), 7));
    }

    #[test]
    fn x_with_leftover_constant_is_not_solved() {
        assert!(!is_solved(Term::new(1, 2), Term::constant(9), 7));
    }

    #[test]
    fn zero_solution() {
        assert!(is_solved(Term::X, Term::ZERO, 0));
        // `0 = 0` is balanced but x is gone.
        assert!(!is_solved(Term::ZERO, Term::ZERO, 0));
    }
}
