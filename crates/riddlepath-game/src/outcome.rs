use riddlepath_core::{PuzzleDefinition, StageId};

/// Number of solved stages out of the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Solved stage count.
    pub solved: usize,
    /// Catalog size (N).
    pub total: usize,
}

impl Progress {
    /// Returns `solved / total` in `[0, 1]`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total as f64
    }

    /// Returns `true` once every stage is solved.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.solved == self.total
    }
}

/// View of the stage currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSnapshot<'a> {
    /// The riddle to display.
    pub puzzle: &'a PuzzleDefinition,
    /// Whether the stage is already solved; the view presents it read-only.
    pub is_solved: bool,
    /// Progress of the play-through.
    pub progress: Progress,
}

/// Data returned when an answer solves the current stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSolved {
    /// The stage just solved.
    pub stage_id: StageId,
    /// The fragment just awarded.
    pub fragment: String,
    /// All collected fragments in catalog order.
    pub sequence: Vec<String>,
    /// Number of solved stages after this one.
    pub solved_count: usize,
    /// Whether every stage is now solved.
    pub is_complete: bool,
    /// Stage the view may move to next; `None` once complete or on the last stage.
    pub suggested_next: Option<StageId>,
}

/// Result of [`Game::submit_answer`](crate::Game::submit_answer).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The answer matched and the stage is now solved.
    Success(StageSolved),
    /// The answer did not match; nothing changed.
    Mismatch,
    /// The current stage was solved before; nothing changed.
    AlreadySolved,
}

impl SubmitOutcome {
    /// Returns the solved-stage data of a [`SubmitOutcome::Success`].
    #[must_use]
    pub fn as_success(&self) -> Option<&StageSolved> {
        match self {
            Self::Success(solved) => Some(solved),
            Self::Mismatch | Self::AlreadySolved => None,
        }
    }
}

/// Result of [`Game::advance_to_next`](crate::Game::advance_to_next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Advance {
    /// Moved to the given stage.
    Moved(StageId),
    /// On the last stage with every stage solved; the view shows completion.
    Completion,
    /// On the last stage with unsolved stages left; nothing changed.
    Stay,
}
