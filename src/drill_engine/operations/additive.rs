use rand::Rng;
use crate::drill_engine::{
    helpers::{problem, random_int},
    models::{Difficulty, Operator, Problem},
};

/// Both operands uniform over the tier range.
pub fn generate_add<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let range = difficulty.range();
    let a = random_int(rng, range.min, range.max);
    let b = random_int(rng, range.min, range.max);
    problem(a, Operator::Add, b, a + b)
}

/// First operand from `[min + 5, max]`, second from `[min, first - 1]`,
/// so the difference is always positive.
pub fn generate_subtract<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let range = difficulty.range();
    let a = random_int(rng, range.min + 5, range.max);
    let b = random_int(rng, range.min, a - 1);
    problem(a, Operator::Subtract, b, a - b)
}
