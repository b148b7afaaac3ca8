//! Error types for the drill engine.
//!
//! Generation itself never fails; errors come from the text boundary
//! (parsing operators, tiers, config, clock times) and from serialising output.

/// A specialized `Result` type for drill engine operations.
pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Debug, thiserror::Error)]
pub enum DrillError {
    /// Operator outside `+ - × ÷` (or `all` where a selector is accepted).
    #[error("Unsupported operator: '{0}'")]
    UnsupportedOperator(String),

    #[error("Unknown difficulty: '{0}' (expected easy, normal, hard or master)")]
    UnknownDifficulty(String),

    #[error("Times table base {0} is out of range (expected 1..=9)")]
    TimesTableOutOfRange(i64),

    #[error("Problem index {index} is out of range for a batch of {len}")]
    ProblemIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Clock time {hours}:{minutes:02} is out of range (expected 0..=11 hours, 0..=59 minutes)")]
    ClockTimeOutOfRange { hours: u8, minutes: u8 },
}
