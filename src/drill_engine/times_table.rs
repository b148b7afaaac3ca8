//! Times tables for bases 1 to 9, ten rows each.

use std::collections::BTreeSet;

use crate::drill_engine::{
    error::{DrillError, Result},
    helpers::problem,
    models::{Operator, Problem},
};

pub const MIN_BASE: i64 = 1;
pub const MAX_BASE: i64 = 9;
pub const ROWS: i64 = 10;

/// Rows `base × 1` through `base × 10`.
pub fn times_table(base: i64) -> Result<Vec<Problem>> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DrillError::TimesTableOutOfRange(base));
    }
    Ok((1..=ROWS)
        .map(|m| problem(base, Operator::Multiply, m, base * m))
        .collect())
}

/// Tracks which rows of the current table have been read aloud.
#[derive(Debug, Clone)]
pub struct TimesTableProgress {
    base: i64,
    spoken: BTreeSet<i64>,
}

impl Default for TimesTableProgress {
    fn default() -> Self {
        TimesTableProgress { base: MIN_BASE, spoken: BTreeSet::new() }
    }
}

impl TimesTableProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> i64 {
        self.base
    }

    pub fn select(&mut self, base: i64) -> Result<()> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(DrillError::TimesTableOutOfRange(base));
        }
        self.base = base;
        self.spoken.clear();
        Ok(())
    }

    /// Mark a row spoken and return it. Multipliers outside 1..=10 are ignored.
    pub fn speak_row(&mut self, multiplier: i64) -> Option<Problem> {
        if !(1..=ROWS).contains(&multiplier) {
            return None;
        }
        self.spoken.insert(multiplier);
        Some(problem(self.base, Operator::Multiply, multiplier, self.base * multiplier))
    }

    pub fn is_row_spoken(&self, multiplier: i64) -> bool {
        self.spoken.contains(&multiplier)
    }

    pub fn is_complete(&self) -> bool {
        self.spoken.len() as i64 == ROWS
    }

    /// Move to the next base (9 wraps to 1) once every row is spoken.
    /// Returns the new base, or `None` if the table is not finished.
    pub fn advance(&mut self) -> Option<i64> {
        if !self.is_complete() {
            return None;
        }
        self.base = if self.base == MAX_BASE { MIN_BASE } else { self.base + 1 };
        self.spoken.clear();
        Some(self.base)
    }
}
