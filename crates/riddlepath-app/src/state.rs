use riddlepath_core::StageId;
use riddlepath_game::Game;

use crate::{scheduler::TransitionScheduler, settings::Settings};

#[derive(Debug)]
pub struct AppState {
    pub game: Game,
    pub settings: Settings,
}

impl AppState {
    #[must_use]
    pub fn new(game: Game, settings: Settings) -> Self {
        Self { game, settings }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Screen {
    Welcome,
    Main,
    Completion,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Feedback {
    Success,
    Mismatch,
    AlreadySolved,
    Notice(String),
}

#[derive(Debug)]
pub struct UiState {
    pub screen: Screen,
    pub feedback: Option<Feedback>,
    /// Stage whose fragment was collected by the latest answer.
    pub just_added: Option<StageId>,
    pub scheduler: TransitionScheduler,
    pub quit_requested: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Welcome,
            feedback: None,
            just_added: None,
            scheduler: TransitionScheduler::default(),
            quit_requested: false,
        }
    }
}

impl UiState {
    /// Clears per-stage presentation when another stage is shown.
    pub fn reset_stage_view(&mut self) {
        self.feedback = None;
        self.just_added = None;
    }
}
