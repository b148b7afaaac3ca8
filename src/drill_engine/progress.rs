//! Solved-problem bookkeeping for the math screen.
//!
//! Problems are tracked by [`ProblemKey`], so two batch entries with the same
//! operands and operator are revealed together and count once towards
//! completion.

use std::collections::HashSet;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::drill_engine::{
    error::{DrillError, Result},
    generator::generate_batch_with,
    models::{Difficulty, DrillSettings, OperatorSelector, Problem, ProblemKey},
};

/// What the caller should do after the child taps "solve".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// First solve for this key: show and speak the answer.
    Revealed,
    /// Key was already solved: the screen asks for a fresh batch.
    RequestNewBatch,
}

#[derive(Debug, Clone, Default)]
pub struct SolvedTracker {
    solved: HashSet<ProblemKey>,
}

impl SolvedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_solved(&mut self, problem: &Problem) -> SolveOutcome {
        if self.solved.insert(problem.key()) {
            SolveOutcome::Revealed
        } else {
            SolveOutcome::RequestNewBatch
        }
    }

    pub fn is_solved(&self, problem: &Problem) -> bool {
        self.solved.contains(&problem.key())
    }

    /// Distinct keys solved so far.
    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// Every distinct key in `batch` has been solved.
    pub fn is_complete(&self, batch: &[Problem]) -> bool {
        !batch.is_empty() && batch.iter().all(|p| self.is_solved(p))
    }

    pub fn reset(&mut self) {
        self.solved.clear();
    }
}

/// Current settings, batch and solved set for one learner.
///
/// Changing difficulty or operator regenerates the batch and clears the
/// solved set, like the math screen does.
pub struct DrillSession {
    settings: DrillSettings,
    rng: StdRng,
    problems: Vec<Problem>,
    tracker: SolvedTracker,
}

impl DrillSession {
    pub fn new(settings: DrillSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic session, mainly for tests and demos.
    pub fn seeded(settings: DrillSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: DrillSettings, rng: StdRng) -> Self {
        let mut session = DrillSession {
            settings,
            rng,
            problems: Vec::new(),
            tracker: SolvedTracker::new(),
        };
        session.new_batch();
        session
    }

    pub fn settings(&self) -> DrillSettings {
        self.settings
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn tracker(&self) -> &SolvedTracker {
        &self.tracker
    }

    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete(&self.problems)
    }

    /// Replace the batch and clear the solved set.
    pub fn new_batch(&mut self) {
        self.problems = generate_batch_with(
            &mut self.rng,
            self.settings.difficulty,
            self.settings.selector,
            self.settings.batch_size,
        );
        self.tracker.reset();
        debug!(count = self.problems.len(), "new drill batch");
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.new_batch();
    }

    pub fn set_selector(&mut self, selector: OperatorSelector) {
        self.settings.selector = selector;
        self.new_batch();
    }

    /// Apply the solve flow to the problem at `index`.
    ///
    /// Returns the problem that was solved together with the outcome. On
    /// [`SolveOutcome::RequestNewBatch`] the batch has already been replaced.
    pub fn solve(&mut self, index: usize) -> Result<(Problem, SolveOutcome)> {
        let problem = *self.problems.get(index).ok_or(DrillError::ProblemIndexOutOfRange {
            index,
            len: self.problems.len(),
        })?;

        let outcome = self.tracker.mark_solved(&problem);
        if outcome == SolveOutcome::RequestNewBatch {
            self.new_batch();
        }
        Ok((problem, outcome))
    }
}
