//! Stage identifiers.

use std::{iter::FusedIterator, ops::RangeInclusive};

/// A 1-based stage identifier.
///
/// Stage ids define the canonical order of a catalog. Any value can be
/// constructed; whether an id refers to an existing stage is decided by the
/// [`Catalog`](crate::Catalog) it is used with.
///
/// # Examples
///
/// ```
/// use riddlepath_core::StageId;
///
/// let id = StageId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.next(), StageId::new(4));
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct StageId(u32);

impl StageId {
    /// The first stage of every catalog.
    pub const FIRST: Self = Self(1);

    /// Creates a stage id from its 1-based value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the 1-based value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one in catalog order.
    ///
    /// The result may lie outside the catalog; callers check it with
    /// [`Catalog::contains`](crate::Catalog::contains).
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Ordered iterator over the stage ids `1..=N` of a catalog.
///
/// Created by [`Catalog::ids`](crate::Catalog::ids). The iterator is cheap to
/// clone, so a clone restarts the sequence.
#[derive(Debug, Clone)]
pub struct StageIds {
    range: RangeInclusive<u32>,
}

impl StageIds {
    /// Creates an iterator over `1..=len`.
    ///
    /// An empty iterator is returned for `len == 0`.
    #[must_use]
    pub fn up_to(len: u32) -> Self {
        Self { range: 1..=len }
    }
}

impl Iterator for StageIds {
    type Item = StageId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(StageId)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for StageIds {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(StageId)
    }
}

impl ExactSizeIterator for StageIds {}

impl FusedIterator for StageIds {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ids_are_ordered_and_restartable() {
        let ids = StageIds::up_to(4);
        let first: Vec<_> = ids.clone().map(StageId::get).collect();
        let second: Vec<_> = ids.map(StageId::get).collect();
        assert_eq!(first, [1, 2, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stage_ids_len_and_reverse() {
        let ids = StageIds::up_to(3);
        assert_eq!(ids.len(), 3);
        assert_eq!(
            ids.rev().collect::<Vec<_>>(),
            [StageId::new(3), StageId::new(2), StageId::new(1)]
        );
    }

    #[test]
    fn test_stage_ids_empty() {
        assert_eq!(StageIds::up_to(0).next(), None);
    }

    #[test]
    fn test_next_saturates() {
        assert_eq!(StageId::new(u32::MAX).next(), StageId::new(u32::MAX));
    }
}
