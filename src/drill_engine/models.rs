use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

/// Number of problems the math screen shows at once.
pub const DEFAULT_BATCH_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    /// Closed operand range `[min, max]` for this tier.
    pub fn range(self) -> OperandRange {
        match self {
            Difficulty::Easy   => OperandRange { min: 1, max: 10 },
            Difficulty::Normal => OperandRange { min: 1, max: 25 },
            Difficulty::Hard   => OperandRange { min: 1, max: 50 },
            Difficulty::Master => OperandRange { min: 1, max: 100 },
        }
    }

    /// Upper bound for multiplication operands before clamping to `max`.
    pub fn multiply_cap(self) -> i64 {
        match self {
            Difficulty::Easy   => 5,
            Difficulty::Normal => 10,
            _                  => 15,
        }
    }

    /// Largest divisor used for division problems.
    pub fn max_divisor(self) -> i64 {
        match self {
            Difficulty::Easy   => 5,
            Difficulty::Normal => 8,
            _                  => 12,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy   => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard   => "Hard",
            Difficulty::Master => "Master",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Difficulty {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard"   => Ok(Difficulty::Hard),
            "master" => Ok(Difficulty::Master),
            _ => Err(DrillError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Inclusive operand bounds for a difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRange {
    pub min: i64,
    pub max: i64,
}

impl OperandRange {
    pub fn contains(self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the card and used in problem keys.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add      => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide   => "÷",
        }
    }

    /// Word used when reading a problem aloud.
    pub fn spoken(self) -> &'static str {
        match self {
            Operator::Add      => "plus",
            Operator::Subtract => "minus",
            Operator::Multiply => "times",
            Operator::Divide   => "divided by",
        }
    }

    /// Exact evaluation. Returns `None` for a non-exact or zero-divisor quotient.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operator::Add      => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide   => match lhs.checked_rem(rhs)? {
                0 => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add"                   => Ok(Operator::Add),
            "-" | "subtract"              => Ok(Operator::Subtract),
            "×" | "x" | "*" | "multiply"  => Ok(Operator::Multiply),
            "÷" | "/" | "divide"          => Ok(Operator::Divide),
            _ => Err(DrillError::UnsupportedOperator(s.to_string())),
        }
    }
}

/// Either a fixed operator or a fresh uniform pick for every problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorSelector {
    Single(Operator),
    All,
}

impl From<Operator> for OperatorSelector {
    fn from(op: Operator) -> Self {
        OperatorSelector::Single(op)
    }
}

impl fmt::Display for OperatorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorSelector::Single(op) => write!(f, "{}", op),
            OperatorSelector::All        => write!(f, "all"),
        }
    }
}

impl FromStr for OperatorSelector {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(OperatorSelector::All);
        }
        s.parse::<Operator>().map(OperatorSelector::Single)
    }
}

// ---------------------------------------------------------------------------
// Problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub first_operand: i64,
    pub operator: Operator,
    pub second_operand: i64,
    pub result: i64,
}

impl Problem {
    /// Key used for "already solved" bookkeeping. Not unique per batch entry.
    pub fn key(&self) -> ProblemKey {
        ProblemKey {
            first_operand: self.first_operand,
            operator: self.operator,
            second_operand: self.second_operand,
        }
    }

    /// True when `result` is the exact evaluation of the operands.
    pub fn is_consistent(&self) -> bool {
        self.operator.apply(self.first_operand, self.second_operand) == Some(self.result)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first_operand, self.operator, self.second_operand, self.result
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemKey {
    pub first_operand: i64,
    pub operator: Operator,
    pub second_operand: i64,
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.first_operand, self.operator, self.second_operand)
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub difficulty: Difficulty,
    pub selector: OperatorSelector,
    pub count: usize,
    /// `Some(seed)` reproduces the exact same batch; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl BatchRequest {
    /// Easy tier, default batch size, entropy seed.
    pub fn new(selector: impl Into<OperatorSelector>) -> Self {
        BatchRequest {
            difficulty: Difficulty::Easy,
            selector: selector.into(),
            count: DEFAULT_BATCH_SIZE,
            rng_seed: None,
        }
    }
}

/// User-facing settings that drive regeneration on the math screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSettings {
    pub difficulty: Difficulty,
    pub selector: OperatorSelector,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for DrillSettings {
    fn default() -> Self {
        DrillSettings {
            difficulty: Difficulty::Easy,
            selector: OperatorSelector::Single(Operator::Add),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl DrillSettings {
    pub fn to_request(self, rng_seed: Option<u64>) -> BatchRequest {
        BatchRequest {
            difficulty: self.difficulty,
            selector: self.selector,
            count: self.batch_size,
            rng_seed,
        }
    }
}
