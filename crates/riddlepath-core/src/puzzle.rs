//! Riddle definitions.

use crate::{Answer, StageId};

/// A single riddle of a catalog.
///
/// The answer fragment is both the value checked against player input and the
/// letters awarded when the stage is solved. Title and prompt are display text
/// and carry no meaning for progression.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PuzzleDefinition {
    id: StageId,
    #[serde(alias = "answer", alias = "letters")]
    answer_fragment: String,
    title: String,
    #[serde(alias = "question")]
    prompt: String,
}

impl PuzzleDefinition {
    /// Creates a riddle definition.
    #[must_use]
    pub fn new(
        id: StageId,
        answer_fragment: impl Into<String>,
        title: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            id,
            answer_fragment: answer_fragment.into(),
            title: title.into(),
            prompt: prompt.into(),
        }
    }

    /// Returns the stage id.
    #[must_use]
    pub fn id(&self) -> StageId {
        self.id
    }

    /// Returns the fragment awarded for solving this stage.
    #[must_use]
    pub fn answer_fragment(&self) -> &str {
        &self.answer_fragment
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the riddle text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns `true` if `answer` is accepted for this riddle.
    #[must_use]
    pub fn accepts(&self, answer: &Answer) -> bool {
        answer.matches(&self.answer_fragment)
    }
}
