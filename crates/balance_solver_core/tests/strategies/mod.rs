use balance_ast::{Difficulty, Operation, Puzzle, Term};
use balance_solver_core::generate;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

pub fn arb_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

pub fn arb_term() -> impl Strategy<Value = Term> {
    (-12i64..=12, -40i64..=40).prop_map(|(coeff, constant)| Term::new(coeff, constant))
}

/// Generated puzzle, optionally already a few random steps in.
pub fn arb_puzzle() -> impl Strategy<Value = Puzzle> {
    (
        arb_difficulty(),
        any::<u64>(),
        prop::collection::vec((arb_operation(), -6i64..=6), 0..4),
    )
        .prop_map(|(difficulty, seed, ops)| {
            let mut p = generate(difficulty, &mut StdRng::seed_from_u64(seed));
            for (op, value) in ops {
                if let Ok(out) = balance_solver_core::apply(p.left, p.right, op, value) {
                    p = Puzzle::new(out.left, out.right, p.solution);
                }
            }
            p
        })
}
