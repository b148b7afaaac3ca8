use rand::Rng;
use crate::drill_engine::{
    helpers::{problem, random_int},
    models::{Difficulty, Operator, Problem},
};

/// Quotients never exceed this, whatever the tier.
pub const MAX_QUOTIENT: i64 = 20;

/// Smallest divisor; dividing by one is not a useful drill.
pub const MIN_DIVISOR: i64 = 2;

/// Operands from `[min, cap]` where `cap = min(max, 5 | 10 | 15)`.
/// Master stays at 15 so products top out at 225.
pub fn generate_multiply<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let range = difficulty.range();
    let cap = range.max.min(difficulty.multiply_cap());
    let a = random_int(rng, range.min, cap);
    let b = random_int(rng, range.min, cap);
    problem(a, Operator::Multiply, b, a * b)
}

/// Draw the answer first, then the divisor; the dividend is their product,
/// so every quotient is whole.
pub fn generate_divide<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem {
    let range = difficulty.range();
    let quotient = random_int(rng, range.min, range.max.min(MAX_QUOTIENT));
    let divisor = random_int(rng, MIN_DIVISOR, difficulty.max_divisor());
    problem(quotient * divisor, Operator::Divide, divisor, quotient)
}
