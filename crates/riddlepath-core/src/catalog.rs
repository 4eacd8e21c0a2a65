//! The ordered riddle catalog.

use crate::{PuzzleDefinition, StageId, StageIds, normalize_answer};

/// Errors returned when building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The catalog has no riddles.
    #[display("catalog contains no puzzles")]
    Empty,
    /// A riddle id breaks the `1..=N` sequence.
    #[display("expected puzzle id {expected}, found {found}")]
    UnexpectedId {
        /// The id required at this position.
        expected: StageId,
        /// The id actually present.
        found: StageId,
    },
    /// A fragment is empty after normalization and would match empty input.
    #[display("puzzle {id} has a blank answer fragment")]
    BlankFragment {
        /// The offending stage.
        id: StageId,
    },
    /// The catalog is larger than stage ids can address.
    #[display("catalog has too many puzzles: {len}")]
    TooLarge {
        /// Number of riddles supplied.
        len: usize,
    },
}

/// A validated, ordered sequence of riddles.
///
/// A catalog holds `N >= 1` riddles whose ids are exactly `1..=N` in order.
/// It is immutable once built.
///
/// # Examples
///
/// ```
/// use riddlepath_core::{Catalog, PuzzleDefinition, StageId};
///
/// let catalog = Catalog::new(vec![
///     PuzzleDefinition::new(StageId::new(1), "yo", "Stage 1", "..."),
/// ])?;
///
/// assert_eq!(catalog.get(StageId::new(1)).map(|p| p.answer_fragment()), Some("yo"));
/// assert!(catalog.get(StageId::new(2)).is_none());
/// # Ok::<(), riddlepath_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Catalog {
    puzzles: Vec<PuzzleDefinition>,
}

impl Catalog {
    /// Builds a catalog from riddles listed in stage order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] if `puzzles` is empty,
    /// [`CatalogError::UnexpectedId`] if the ids are not `1..=N` in order,
    /// [`CatalogError::BlankFragment`] if a fragment normalizes to the empty string,
    /// and [`CatalogError::TooLarge`] if N does not fit a stage id.
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        let len = u32::try_from(puzzles.len())
            .map_err(|_| CatalogError::TooLarge { len: puzzles.len() })?;

        for (expected, puzzle) in StageIds::up_to(len).zip(&puzzles) {
            if puzzle.id() != expected {
                return Err(CatalogError::UnexpectedId {
                    expected,
                    found: puzzle.id(),
                });
            }
            if normalize_answer(puzzle.answer_fragment()).is_empty() {
                return Err(CatalogError::BlankFragment { id: expected });
            }
        }

        Ok(Self { puzzles })
    }

    /// Returns the riddle with the given id, or `None` outside `1..=N`.
    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&PuzzleDefinition> {
        let index = usize::try_from(id.get().checked_sub(1)?).ok()?;
        self.puzzles.get(index)
    }

    /// Returns the number of riddles (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always `false`; a catalog holds at least one riddle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns `true` if `id` lies in `1..=N`.
    #[must_use]
    pub fn contains(&self, id: StageId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the ordered stage ids `1..=N`.
    #[must_use]
    pub fn ids(&self) -> StageIds {
        // Length was checked against u32 on construction.
        #[expect(clippy::cast_possible_truncation)]
        let len = self.puzzles.len() as u32;
        StageIds::up_to(len)
    }

    /// Returns the riddles in stage order.
    pub fn iter(&self) -> std::slice::Iter<'_, PuzzleDefinition> {
        self.puzzles.iter()
    }

    /// Returns the id of the last stage.
    #[must_use]
    pub fn last_id(&self) -> StageId {
        self.puzzles
            .last()
            .map_or(StageId::FIRST, PuzzleDefinition::id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PuzzleDefinition;
    type IntoIter = std::slice::Iter<'a, PuzzleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawCatalog {
            puzzles: Vec<PuzzleDefinition>,
        }

        let raw = RawCatalog::deserialize(deserializer)?;
        Catalog::new(raw.puzzles).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(id: u32, fragment: &str) -> PuzzleDefinition {
        PuzzleDefinition::new(StageId::new(id), fragment, format!("Stage {id}"), "riddle")
    }

    #[test]
    fn test_new_accepts_sequential_ids() {
        let catalog = Catalog::new(vec![puzzle(1, "יו"), puzzle(2, "סי"), puzzle(3, "בי")])
            .expect("valid catalog");
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.last_id(), StageId::new(3));
        assert_eq!(
            catalog.iter().map(PuzzleDefinition::answer_fragment).collect::<Vec<_>>(),
            ["יו", "סי", "בי"]
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_new_rejects_gaps_and_misordering() {
        assert_eq!(
            Catalog::new(vec![puzzle(1, "a"), puzzle(3, "c")]),
            Err(CatalogError::UnexpectedId {
                expected: StageId::new(2),
                found: StageId::new(3),
            })
        );
        assert_eq!(
            Catalog::new(vec![puzzle(2, "b"), puzzle(1, "a")]),
            Err(CatalogError::UnexpectedId {
                expected: StageId::new(1),
                found: StageId::new(2),
            })
        );
        assert!(matches!(
            Catalog::new(vec![puzzle(1, "a"), puzzle(1, "a")]),
            Err(CatalogError::UnexpectedId { .. })
        ));
    }

    #[test]
    fn test_new_rejects_blank_fragment() {
        assert_eq!(
            Catalog::new(vec![puzzle(1, "a"), puzzle(2, " \t")]),
            Err(CatalogError::BlankFragment {
                id: StageId::new(2)
            })
        );
    }

    #[test]
    fn test_get_outside_range_is_none() {
        let catalog = Catalog::new(vec![puzzle(1, "a"), puzzle(2, "b")]).expect("valid catalog");
        assert!(catalog.get(StageId::new(0)).is_none());
        assert!(catalog.get(StageId::new(3)).is_none());
        assert!(catalog.get(StageId::new(u32::MAX)).is_none());
        assert_eq!(
            catalog.get(StageId::new(2)).map(PuzzleDefinition::id),
            Some(StageId::new(2))
        );
    }

    #[test]
    fn test_ids_match_catalog() {
        let catalog = Catalog::new(vec![puzzle(1, "a"), puzzle(2, "b")]).expect("valid catalog");
        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, [StageId::new(1), StageId::new(2)]);
        assert!(ids.iter().all(|&id| catalog.contains(id)));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"puzzles": [
            {"id": 1, "answer_fragment": "יו", "title": "שלב 1", "prompt": "?"},
            {"id": 2, "letters": "סי", "title": "שלב 2", "question": "?"}
        ]}"#;
        let catalog: Catalog = serde_json::from_str(json).expect("valid catalog json");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(StageId::new(2)).map(PuzzleDefinition::answer_fragment),
            Some("סי")
        );

        let gap = r#"{"puzzles": [{"id": 2, "answer": "x", "title": "t", "prompt": "p"}]}"#;
        let err = serde_json::from_str::<Catalog>(gap).expect_err("id 1 is missing");
        assert!(err.to_string().contains("expected puzzle id 1, found 2"));
    }
}
