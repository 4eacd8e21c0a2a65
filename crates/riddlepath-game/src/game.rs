use riddlepath_core::{Answer, Catalog, PuzzleDefinition, StageId};

use crate::{
    Advance, GameError, GamePhase, GameState, Progress, StageSnapshot, StageSolved, StageStatus,
    SubmitOutcome,
};

/// A riddle play-through.
///
/// Owns the catalog and the single [`GameState`] of the current play-through.
/// Any stage can be selected at any time; answers are checked against the
/// current stage only. Solving the last unsolved stage moves the game to
/// [`GamePhase::Complete`], which only [`Game::restart`] leaves.
///
/// # Example
///
/// ```
/// use riddlepath_core::{Catalog, PuzzleDefinition, StageId};
/// use riddlepath_game::{Game, StageStatus};
///
/// let catalog = Catalog::new(vec![
///     PuzzleDefinition::new(StageId::new(1), "a", "1", "..."),
///     PuzzleDefinition::new(StageId::new(2), "b", "2", "..."),
/// ])?;
/// let mut game = Game::new(catalog);
///
/// game.select_stage(StageId::new(2))?;
/// assert!(game.submit_answer("B").is_success());
/// assert_eq!(game.stage_status(StageId::new(1)), Some(StageStatus::Unsolved));
/// assert_eq!(game.collected_sequence(), ["b"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    catalog: Catalog,
    state: GameState,
}

impl Game {
    /// Creates a game on the first stage with nothing solved.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: GameState::default(),
        }
    }

    /// Returns the catalog this game plays through.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current play-through state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the stage currently presented.
    #[must_use]
    pub fn current_stage_id(&self) -> StageId {
        self.state.current_stage_id()
    }

    /// Returns the riddle of the current stage.
    #[must_use]
    pub fn current_puzzle(&self) -> &PuzzleDefinition {
        self.puzzle(self.state.current_stage_id())
    }

    fn puzzle(&self, id: StageId) -> &PuzzleDefinition {
        self.catalog
            .get(id)
            .unwrap_or_else(|| unreachable!("stage {id} is always a catalog id"))
    }

    /// Returns a snapshot of the current stage.
    #[must_use]
    pub fn snapshot(&self) -> StageSnapshot<'_> {
        let id = self.state.current_stage_id();
        StageSnapshot {
            puzzle: self.puzzle(id),
            is_solved: self.state.is_solved(id),
            progress: self.progress(),
        }
    }

    /// Presents the stage `id`.
    ///
    /// Any catalog stage can be selected, solved or not, adjacent or not.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStage`] if `id` is outside the catalog.
    pub fn select_stage(&mut self, id: StageId) -> Result<StageSnapshot<'_>, GameError> {
        if !self.catalog.contains(id) {
            return Err(GameError::InvalidStage {
                id,
                len: self.catalog.len(),
            });
        }
        self.state.set_current_stage_id(id);
        Ok(self.snapshot())
    }

    /// Checks `raw` against the current stage.
    ///
    /// Comparison ignores case and every whitespace character. A stage that is
    /// already solved yields [`SubmitOutcome::AlreadySolved`] and is never
    /// recorded twice.
    pub fn submit_answer(&mut self, raw: impl Into<Answer>) -> SubmitOutcome {
        let stage_id = self.state.current_stage_id();
        if self.state.is_solved(stage_id) {
            return SubmitOutcome::AlreadySolved;
        }

        let puzzle = self.puzzle(stage_id);
        if !puzzle.accepts(&raw.into()) {
            return SubmitOutcome::Mismatch;
        }

        let fragment = puzzle.answer_fragment().to_owned();
        let recorded = self.state.record_solved(stage_id, &fragment);
        debug_assert!(recorded, "unsolved stage must be recorded");

        let is_complete = self.is_complete();
        let suggested_next = Some(stage_id.next())
            .filter(|next| !is_complete && self.catalog.contains(*next));

        SubmitOutcome::Success(StageSolved {
            stage_id,
            fragment,
            sequence: self
                .collected_sequence()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            solved_count: self.state.solved_count(),
            is_complete,
            suggested_next,
        })
    }

    /// Moves to the stage after the current one.
    ///
    /// On the last stage nothing moves: [`Advance::Completion`] is returned if
    /// every stage is solved, [`Advance::Stay`] otherwise.
    pub fn advance_to_next(&mut self) -> Advance {
        let next = self.state.current_stage_id().next();
        if self.catalog.contains(next) {
            self.state.set_current_stage_id(next);
            Advance::Moved(next)
        } else if self.is_complete() {
            Advance::Completion
        } else {
            Advance::Stay
        }
    }

    /// Discards all progress and starts a new play-through on the first stage.
    pub fn restart(&mut self) -> StageSnapshot<'_> {
        self.state = GameState::default();
        self.snapshot()
    }

    /// Returns collected fragments in catalog order, regardless of solve order.
    #[must_use]
    pub fn collected_sequence(&self) -> Vec<&str> {
        self.state
            .collected_fragments()
            .map(|(_, fragment)| fragment)
            .collect()
    }

    /// Returns the collected fragments joined in catalog order.
    #[must_use]
    pub fn collected_word(&self) -> String {
        self.collected_sequence().concat()
    }

    /// Returns solved and total stage counts.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            solved: self.state.solved_count(),
            total: self.catalog.len(),
        }
    }

    /// Returns the solved fraction in `[0, 1]`.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.progress().ratio()
    }

    /// Returns the number of solved stages.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.state.solved_count()
    }

    /// Returns `true` if `id` has been solved.
    #[must_use]
    pub fn is_solved(&self, id: StageId) -> bool {
        self.state.is_solved(id)
    }

    /// Classifies stage `id`, or returns `None` if it is outside the catalog.
    #[must_use]
    pub fn stage_status(&self, id: StageId) -> Option<StageStatus> {
        if !self.catalog.contains(id) {
            return None;
        }
        let status = if id == self.state.current_stage_id() {
            StageStatus::Current
        } else if self.state.is_solved(id) {
            StageStatus::Solved
        } else {
            StageStatus::Unsolved
        };
        Some(status)
    }

    /// Returns the status of every stage in catalog order.
    pub fn stage_statuses(&self) -> impl Iterator<Item = (StageId, StageStatus)> + '_ {
        self.catalog.ids().filter_map(|id| Some((id, self.stage_status(id)?)))
    }

    /// Returns `true` once every stage is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// Returns the phase of the play-through.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_complete() {
            GamePhase::Complete
        } else {
            GamePhase::InProgress
        }
    }
}
