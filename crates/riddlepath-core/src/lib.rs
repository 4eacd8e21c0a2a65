//! Core data structures for riddle progression games.
//!
//! This crate provides the static side of a play-through: the ordered catalog of
//! riddles and the rules for comparing a player's answer with a riddle's fragment.
//! Game state and progression rules live in `riddlepath-game`.
//!
//! # Overview
//!
//! - [`stage_id`]: 1-based stage identifiers and the ordered [`StageIds`] iterator
//! - [`puzzle`]: a single riddle definition
//! - [`catalog`]: the validated, ordered sequence of riddles
//! - [`answer`]: free-form player input and its normalization
//!
//! # Examples
//!
//! ```
//! use riddlepath_core::{Catalog, PuzzleDefinition, StageId, normalize_answer};
//!
//! let catalog = Catalog::new(vec![
//!     PuzzleDefinition::new(StageId::new(1), "yo", "Stage 1", "Say it twice for a toy."),
//!     PuzzleDefinition::new(StageId::new(2), "see", "Stage 2", "What eyes do."),
//! ])?;
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.ids().map(StageId::get).collect::<Vec<_>>(), [1, 2]);
//! assert_eq!(normalize_answer(" Y o "), "yo");
//! # Ok::<(), riddlepath_core::CatalogError>(())
//! ```

pub mod answer;
pub mod catalog;
pub mod puzzle;
pub mod stage_id;

pub use self::{
    answer::{Answer, is_answer_whitespace, normalize_answer},
    catalog::{Catalog, CatalogError},
    puzzle::PuzzleDefinition,
    stage_id::{StageId, StageIds},
};
