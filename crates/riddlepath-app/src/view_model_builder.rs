use riddlepath_game::{Game, StageStatus};

use crate::{
    state::{AppState, Screen, UiState},
    ui::{
        collected_letters::{CollectedLetter, CollectedLettersViewModel},
        completion_screen::CompletionScreenViewModel,
        main_screen::MainScreenViewModel,
        progress_bar::ProgressBarViewModel,
        puzzle_card::PuzzleCardViewModel,
        stage_bar::{StageButton, StageMark, StageBarViewModel},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenViewModel {
    Welcome,
    Main(MainScreenViewModel),
    Completion(CompletionScreenViewModel),
}

#[must_use]
pub fn build_screen_vm(app_state: &AppState, ui_state: &UiState) -> ScreenViewModel {
    match ui_state.screen {
        Screen::Welcome => ScreenViewModel::Welcome,
        Screen::Main => ScreenViewModel::Main(build_main_screen_vm(&app_state.game, ui_state)),
        Screen::Completion => ScreenViewModel::Completion(CompletionScreenViewModel {
            word: app_state.game.collected_word(),
        }),
    }
}

#[must_use]
pub fn build_main_screen_vm(game: &Game, ui_state: &UiState) -> MainScreenViewModel {
    MainScreenViewModel {
        stage_bar: build_stage_bar_vm(game),
        progress: build_progress_bar_vm(game),
        puzzle: build_puzzle_card_vm(game, ui_state),
        collected: build_collected_letters_vm(game, ui_state),
    }
}

/// A stage that is neither current nor solved is shown as skipped once any
/// stage has been solved.
#[must_use]
pub fn build_stage_bar_vm(game: &Game) -> StageBarViewModel {
    let has_progress = game.solved_count() > 0;
    let stages = game
        .stage_statuses()
        .map(|(id, status)| {
            let mark = if game.is_solved(id) {
                StageMark::Solved
            } else if has_progress {
                StageMark::Skipped
            } else {
                StageMark::None
            };
            StageButton {
                id,
                is_current: status == StageStatus::Current,
                mark,
            }
        })
        .collect();
    StageBarViewModel { stages }
}

#[must_use]
pub fn build_progress_bar_vm(game: &Game) -> ProgressBarViewModel {
    let progress = game.progress();
    ProgressBarViewModel {
        solved: progress.solved,
        total: progress.total,
    }
}

#[must_use]
pub fn build_puzzle_card_vm(game: &Game, ui_state: &UiState) -> PuzzleCardViewModel {
    let snapshot = game.snapshot();
    PuzzleCardViewModel {
        title: snapshot.puzzle.title().to_owned(),
        prompt: snapshot.puzzle.prompt().to_owned(),
        read_only: snapshot.is_solved,
        feedback: ui_state.feedback.clone(),
    }
}

#[must_use]
pub fn build_collected_letters_vm(game: &Game, ui_state: &UiState) -> CollectedLettersViewModel {
    let letters = game
        .state()
        .collected_fragments()
        .map(|(stage_id, text)| CollectedLetter {
            stage_id,
            text: text.to_owned(),
            just_added: ui_state.just_added == Some(stage_id),
        })
        .collect();
    CollectedLettersViewModel { letters }
}

#[cfg(test)]
mod tests {
    use riddlepath_core::StageId;

    use super::*;
    use crate::catalog_source::builtin_catalog;

    fn new_game() -> Game {
        Game::new(builtin_catalog().expect("bundled catalog is valid"))
    }

    #[test]
    fn stage_bar_without_progress_has_no_marks() {
        let game = new_game();
        let vm = build_stage_bar_vm(&game);
        assert_eq!(vm.stages.len(), 4);
        assert!(vm.stages[0].is_current);
        assert!(vm.stages.iter().all(|stage| stage.mark.is_none()));
    }

    #[test]
    fn stage_bar_marks_skipped_stages_once_progress_exists() {
        let mut game = new_game();
        game.select_stage(StageId::new(3)).expect("valid stage");
        assert!(game.submit_answer("בי").is_success());

        let vm = build_stage_bar_vm(&game);
        let marks: Vec<_> = vm.stages.iter().map(|stage| stage.mark).collect();
        assert_eq!(
            marks,
            [
                StageMark::Skipped,
                StageMark::Skipped,
                StageMark::Solved,
                StageMark::Skipped
            ]
        );
        assert!(vm.stages[2].is_current);
        assert!(vm.stages[2].mark.is_solved());
        assert_eq!(marks.iter().filter(|mark| mark.is_skipped()).count(), 3);
    }

    #[test]
    fn collected_letters_follow_catalog_order() {
        let mut game = new_game();
        let mut ui_state = UiState::default();
        for (stage, fragment) in [(4, "טון"), (1, "יו")] {
            game.select_stage(StageId::new(stage)).expect("valid stage");
            assert!(game.submit_answer(fragment).is_success());
        }
        ui_state.just_added = Some(StageId::new(1));

        let vm = build_collected_letters_vm(&game, &ui_state);
        let texts: Vec<_> = vm.letters.iter().map(|letter| letter.text.as_str()).collect();
        assert_eq!(texts, ["יו", "טון"]);
        assert!(vm.letters[0].just_added);
        assert!(!vm.letters[1].just_added);
    }

    #[test]
    fn puzzle_card_is_read_only_when_solved() {
        let mut game = new_game();
        let ui_state = UiState::default();
        assert!(!build_puzzle_card_vm(&game, &ui_state).read_only);
        assert!(game.submit_answer("יו").is_success());
        let vm = build_puzzle_card_vm(&game, &ui_state);
        assert!(vm.read_only);
        assert_eq!(vm.title, "שלב 1");
    }

    #[test]
    fn progress_bar_percent() {
        let mut game = new_game();
        assert_eq!(build_progress_bar_vm(&game).percent(), 0);
        assert!(game.submit_answer("יו").is_success());
        assert_eq!(build_progress_bar_vm(&game).percent(), 25);
    }
}
