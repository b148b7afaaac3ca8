//! Per-operator problem rules, grouped by operator family.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn generate_<op><R: Rng>(rng: &mut R, difficulty: Difficulty) -> Problem
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// `+` and `-`: operands drawn from the full tier range.
pub mod additive;
/// `×` and `÷`: capped ranges so products and dividends stay readable.
pub mod multiplicative;
