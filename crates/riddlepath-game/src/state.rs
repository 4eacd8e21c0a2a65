use std::collections::BTreeMap;

use riddlepath_core::StageId;

/// Mutable state of one play-through.
///
/// Solved stages and their collected fragments are stored together, keyed by
/// stage id, so every solved stage has exactly one fragment and iteration is
/// always in ascending stage order. Entries are only ever added; the state is
/// replaced as a whole on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_stage_id: StageId,
    collected: BTreeMap<StageId, String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_stage_id: StageId::FIRST,
            collected: BTreeMap::new(),
        }
    }
}

impl GameState {
    /// Returns the stage currently presented.
    #[must_use]
    pub fn current_stage_id(&self) -> StageId {
        self.current_stage_id
    }

    /// Returns `true` if `id` has been solved.
    #[must_use]
    pub fn is_solved(&self, id: StageId) -> bool {
        self.collected.contains_key(&id)
    }

    /// Returns the number of solved stages.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.collected.len()
    }

    /// Returns `(stage id, fragment)` pairs in ascending stage order.
    pub fn collected_fragments(&self) -> impl DoubleEndedIterator<Item = (StageId, &str)> + '_ {
        self.collected.iter().map(|(&id, fragment)| (id, fragment.as_str()))
    }

    pub(crate) fn set_current_stage_id(&mut self, id: StageId) {
        self.current_stage_id = id;
    }

    /// Records `fragment` for `id`. Returns `false` without changes if already solved.
    pub(crate) fn record_solved(&mut self, id: StageId, fragment: &str) -> bool {
        if self.collected.contains_key(&id) {
            return false;
        }
        self.collected.insert(id, fragment.to_owned());
        true
    }
}
