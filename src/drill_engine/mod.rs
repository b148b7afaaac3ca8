//! Core drill engine: problem generation, progress tracking, and speech.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: tiers, operators, problems, request structs |
//! | `error`       | `DrillError` and the crate `Result` alias |
//! | `helpers`     | Inclusive random draws and the problem builder |
//! | `operations`  | Per-operator generation rules |
//! | `generator`   | Entry points `generate_batch()` / `generate_batch_with()` |
//! | `progress`    | Solved-key tracking and the `DrillSession` solve flow |
//! | `times_table` | Times tables 1–9 and row progress |
//! | `clock`       | Random clock times and their spoken form |
//! | `preferences` | Voice preference loaded from a key-value store or TOML |
//! | `speech`      | Spoken text, voice selection, `Speaker` capability |

pub mod clock;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod operations;
pub mod preferences;
pub mod progress;
pub mod speech;
pub mod times_table;

pub use clock::{random_time, random_time_seeded, time_text, ClockTime};
pub use error::{DrillError, Result};
pub use generator::{generate_batch, generate_batch_with, generate_problem};
pub use models::{
    BatchRequest, Difficulty, DrillSettings, OperandRange, Operator, OperatorSelector,
    Problem, ProblemKey, DEFAULT_BATCH_SIZE,
};
pub use preferences::{KeyValueStore, MemoryStore, Preferences, VoicePreference};
pub use progress::{DrillSession, SolveOutcome, SolvedTracker};
pub use speech::{Narrator, NoopSpeaker, RecordingSpeaker, Speaker, Utterance, Voice};
pub use times_table::{times_table, TimesTableProgress};
