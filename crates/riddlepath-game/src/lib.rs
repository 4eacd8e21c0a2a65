//! Progression engine for riddle play-throughs.
//!
//! A [`Game`] owns a [`Catalog`](riddlepath_core::Catalog) and a single
//! [`GameState`]. Callers navigate between stages, submit answers and read
//! derived views; every mutation goes through [`Game`] methods.
//!
//! The engine has no timers and performs no I/O. When a stage is solved the
//! suggested follow-up stage is returned as data ([`StageSolved::suggested_next`]),
//! and scheduling the transition is left to the caller.
//!
//! # Example
//!
//! ```
//! use riddlepath_core::{Catalog, PuzzleDefinition, StageId};
//! use riddlepath_game::{Game, SubmitOutcome};
//!
//! let catalog = Catalog::new(vec![
//!     PuzzleDefinition::new(StageId::new(1), "yo", "Stage 1", "..."),
//!     PuzzleDefinition::new(StageId::new(2), "see", "Stage 2", "..."),
//! ])?;
//! let mut game = Game::new(catalog);
//!
//! let SubmitOutcome::Success(solved) = game.submit_answer(" Y o ") else {
//!     panic!("expected a match");
//! };
//! assert_eq!(solved.suggested_next, Some(StageId::new(2)));
//! assert!(!solved.is_complete);
//! # Ok::<(), riddlepath_core::CatalogError>(())
//! ```

mod error;
mod game;
mod outcome;
mod state;
mod status;

pub use self::{
    error::GameError,
    game::Game,
    outcome::{Advance, Progress, StageSnapshot, StageSolved, SubmitOutcome},
    state::GameState,
    status::{GamePhase, StageStatus},
};
