use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::drill_engine::{
    models::{BatchRequest, Difficulty, Operator, OperatorSelector, Problem},
    operations,
};

/// Pick the operator for one problem. `All` draws a fresh one every time.
fn pick_operator<R: Rng>(rng: &mut R, selector: OperatorSelector) -> Operator {
    match selector {
        OperatorSelector::Single(op) => op,
        OperatorSelector::All => Operator::ALL[rng.gen_range(0..Operator::ALL.len())],
    }
}

/// Core dispatch: routes one problem to the rule for its operator.
pub fn generate_problem<R: Rng>(rng: &mut R, difficulty: Difficulty, operator: Operator) -> Problem {
    match operator {
        Operator::Add =>
            operations::additive::generate_add(rng, difficulty),

        Operator::Subtract =>
            operations::additive::generate_subtract(rng, difficulty),

        Operator::Multiply =>
            operations::multiplicative::generate_multiply(rng, difficulty),

        Operator::Divide =>
            operations::multiplicative::generate_divide(rng, difficulty),
    }
}

/// Generate `count` problems from a caller-supplied RNG.
///
/// Order is insertion order and duplicates are allowed.
pub fn generate_batch_with<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    selector: OperatorSelector,
    count: usize,
) -> Vec<Problem> {
    (0..count)
        .map(|_| {
            let op = pick_operator(rng, selector);
            generate_problem(rng, difficulty, op)
        })
        .collect()
}

/// Generate a batch for `request`, seeding from `rng_seed` when present.
pub fn generate_batch(request: &BatchRequest) -> Vec<Problem> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    debug!(
        difficulty = %request.difficulty,
        selector = %request.selector,
        count = request.count,
        seeded = request.rng_seed.is_some(),
        "generating math batch"
    );

    generate_batch_with(&mut rng, request.difficulty, request.selector, request.count)
}
