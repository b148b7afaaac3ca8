//! # math_drill_gen
//!
//! Offline arithmetic drill generator for a children's learning app.
//!
//! The library produces batches of addition, subtraction, multiplication and
//! division problems whose answers are always exact, tracks which ones a
//! child has already revealed, and turns problems into spoken text for
//! whatever speech engine the host provides.
//!
//! ## How it works
//!
//! 1. Build a [`BatchRequest`] with a difficulty tier, an operator (or
//!    [`OperatorSelector::All`]), a count and an optional RNG seed.
//! 2. Call [`generate_batch`]. Each problem picks its operator, then applies
//!    that operator's rule: full tier range for `+`, a guaranteed positive
//!    difference for `-`, capped operands for `×`, and answer-first
//!    construction for `÷` so quotients are whole.
//! 3. Feed the batch to a [`DrillSession`] / [`SolvedTracker`] for the
//!    reveal-then-regenerate flow, and to a [`Narrator`] to read answers aloud.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_batch, BatchRequest, Difficulty, Operator, OperatorSelector};
//!
//! // Ten easy additions from entropy:
//! let batch = generate_batch(&BatchRequest::new(Operator::Add));
//! assert_eq!(batch.len(), 10);
//!
//! // Reproducible mixed batch:
//! let batch = generate_batch(&BatchRequest {
//!     difficulty: Difficulty::Hard,
//!     selector: OperatorSelector::All,
//!     count: 5,
//!     rng_seed: Some(42),
//! });
//! for p in &batch {
//!     assert!(p.is_consistent());
//!     println!("{}  (key {})", p, p.key());
//! }
//! ```

pub mod assets;
pub mod drill_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate_batch`
// directly without reaching into `drill_engine::`.
pub use assets::{extract_country_flags, extract_road_signs, metadata_json, ImageEntry};
pub use drill_engine::{
    generate_batch, generate_batch_with, random_time, random_time_seeded, time_text,
    times_table, BatchRequest, ClockTime, Difficulty, DrillError,
    DrillSession, DrillSettings, KeyValueStore, MemoryStore, Narrator, NoopSpeaker, Operator,
    OperatorSelector, Preferences, Problem, ProblemKey, RecordingSpeaker, Result, SolveOutcome,
    SolvedTracker, Speaker, TimesTableProgress, Utterance, Voice, VoicePreference,
};

#[cfg(test)]
mod tests;
