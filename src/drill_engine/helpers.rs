//! Shared builders used by every operator rule.
//!
//! Each rule draws its operands, then hands them to [`problem`] so the
//! answer is computed in one place.
//!
//! ## RNG ordering
//!
//! Rules draw values in a fixed order (first operand, then second; for
//! division the quotient, then the divisor). Changing that order changes
//! every seeded batch and breaks the determinism tests.

use rand::Rng;
use crate::drill_engine::models::{Operator, Problem};

/// Uniform integer in the closed range `[min, max]`.
///
/// A range with `max < min` collapses to `min`; no tier produces one, but
/// the guard keeps `gen_range` from panicking on a bad custom bound.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Build a problem whose `result` is the exact evaluation of its operands.
///
/// Used by add, subtract and multiply where the answer follows from the
/// operands. Division builds its dividend from the answer instead.
pub fn problem(first_operand: i64, operator: Operator, second_operand: i64, result: i64) -> Problem {
    Problem { first_operand, operator, second_operand, result }
}
