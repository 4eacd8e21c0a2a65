use std::time::Instant;

use riddlepath_game::{Advance, StageSolved, SubmitOutcome};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, Feedback, Screen, UiState},
};

pub fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
}

pub fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action, now: Instant) {
    log::debug!("handling action: {action:?}");
    match action {
        Action::StartGame => {
            log::info!("play-through started");
            ui_state.screen = Screen::Main;
            ui_state.reset_stage_view();
        }
        Action::SelectStage(id) => match app_state.game.select_stage(id) {
            Ok(_) => ui_state.reset_stage_view(),
            Err(err) => {
                log::warn!("stage selection rejected: {err}");
                ui_state.feedback = Some(Feedback::Notice(err.to_string()));
            }
        },
        Action::SubmitAnswer(text) => match app_state.game.submit_answer(text) {
            SubmitOutcome::Success(solved) => {
                on_stage_solved(app_state, ui_state, &solved, now);
            }
            SubmitOutcome::Mismatch => {
                ui_state.feedback = Some(Feedback::Mismatch);
            }
            SubmitOutcome::AlreadySolved => {
                ui_state.feedback = Some(Feedback::AlreadySolved);
            }
        },
        Action::NextStage => match app_state.game.advance_to_next() {
            Advance::Moved(id) => {
                log::debug!("advanced to stage {id}");
                ui_state.reset_stage_view();
            }
            Advance::Completion => {
                ui_state.screen = Screen::Completion;
            }
            Advance::Stay => {
                log::debug!("already on the last stage with unsolved stages left");
            }
        },
        Action::ShowCompletion => {
            if app_state.game.is_complete() {
                ui_state.screen = Screen::Completion;
            }
        }
        Action::ContinueAfterCompletion => {
            ui_state.screen = Screen::Main;
            ui_state.reset_stage_view();
        }
        Action::Restart => {
            log::info!("play-through restarted");
            app_state.game.restart();
            ui_state.scheduler.clear();
            ui_state.screen = Screen::Main;
            ui_state.reset_stage_view();
        }
        Action::Quit => {
            ui_state.quit_requested = true;
        }
    }
}

fn on_stage_solved(
    app_state: &AppState,
    ui_state: &mut UiState,
    solved: &StageSolved,
    now: Instant,
) {
    log::info!(
        "stage {} solved ({}/{})",
        solved.stage_id,
        solved.solved_count,
        app_state.game.catalog().len()
    );
    ui_state.feedback = Some(Feedback::Success);
    ui_state.just_added = Some(solved.stage_id);

    let transitions = &app_state.settings.transitions;
    if solved.is_complete {
        log::info!("play-through complete: {}", solved.sequence.concat());
        ui_state
            .scheduler
            .schedule(now, transitions.completion_delay, Action::ShowCompletion);
    } else if let Some(next) = solved.suggested_next
        && transitions.auto_advance
    {
        ui_state
            .scheduler
            .schedule(now, transitions.advance_delay, Action::SelectStage(next));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use riddlepath_core::StageId;
    use riddlepath_game::Game;

    use super::*;
    use crate::{
        catalog_source::builtin_catalog,
        settings::{Settings, TransitionSettings},
    };

    fn setup() -> (AppState, UiState) {
        let game = Game::new(builtin_catalog().expect("bundled catalog is valid"));
        let mut app_state = AppState::new(game, Settings::default());
        let mut ui_state = UiState::default();
        handle(&mut app_state, &mut ui_state, Action::StartGame, Instant::now());
        (app_state, ui_state)
    }

    fn submit(app_state: &mut AppState, ui_state: &mut UiState, text: &str, now: Instant) {
        handle(app_state, ui_state, Action::SubmitAnswer(text.to_owned()), now);
    }

    #[test]
    fn start_game_shows_main_screen() {
        let (_, ui_state) = setup();
        assert!(ui_state.screen.is_main());
    }

    #[test]
    fn success_schedules_auto_advance() {
        let (mut app_state, mut ui_state) = setup();
        let now = Instant::now();
        submit(&mut app_state, &mut ui_state, "יו", now);

        assert_eq!(ui_state.feedback, Some(Feedback::Success));
        assert_eq!(ui_state.just_added, Some(StageId::new(1)));
        assert_eq!(app_state.game.current_stage_id(), StageId::new(1));

        let due = ui_state.scheduler.take_due(now + Duration::from_millis(1199));
        assert!(due.is_empty());
        let due = ui_state.scheduler.take_due(now + Duration::from_millis(1200));
        assert_eq!(due, [Action::SelectStage(StageId::new(2))]);

        let mut queue = ActionRequestQueue::default();
        queue.extend(due);
        handle_all(&mut app_state, &mut ui_state, &mut queue, now);
        assert_eq!(app_state.game.current_stage_id(), StageId::new(2));
        assert_eq!(ui_state.feedback, None);
    }

    #[test]
    fn auto_advance_can_be_disabled() {
        let (mut app_state, mut ui_state) = setup();
        app_state.settings.transitions.auto_advance = false;
        submit(&mut app_state, &mut ui_state, "יו", Instant::now());
        assert!(ui_state.scheduler.is_empty());
    }

    #[test]
    fn mismatch_and_already_solved_feedback() {
        let (mut app_state, mut ui_state) = setup();
        let now = Instant::now();
        submit(&mut app_state, &mut ui_state, "סי", now);
        assert_eq!(ui_state.feedback, Some(Feedback::Mismatch));

        submit(&mut app_state, &mut ui_state, "י ו", now);
        submit(&mut app_state, &mut ui_state, "יו", now);
        assert_eq!(ui_state.feedback, Some(Feedback::AlreadySolved));
        assert_eq!(app_state.game.solved_count(), 1);
    }

    #[test]
    fn invalid_stage_becomes_notice() {
        let (mut app_state, mut ui_state) = setup();
        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectStage(StageId::new(7)),
            Instant::now(),
        );
        assert!(ui_state.feedback.as_ref().is_some_and(Feedback::is_notice));
        assert_eq!(app_state.game.current_stage_id(), StageId::new(1));
    }

    #[test]
    fn completing_schedules_completion_screen() {
        let (mut app_state, mut ui_state) = setup();
        app_state.settings.transitions = TransitionSettings::immediate();
        let now = Instant::now();
        for (stage, fragment) in (1..).zip(["יו", "סי", "בי", "טון"]) {
            handle(
                &mut app_state,
                &mut ui_state,
                Action::SelectStage(StageId::new(stage)),
                now,
            );
            submit(&mut app_state, &mut ui_state, fragment, now);
        }
        let due = ui_state.scheduler.take_due(now);
        assert_eq!(due.last(), Some(&Action::ShowCompletion));
        for action in due {
            handle(&mut app_state, &mut ui_state, action, now);
        }
        assert!(ui_state.screen.is_completion());

        handle(
            &mut app_state,
            &mut ui_state,
            Action::ContinueAfterCompletion,
            now,
        );
        assert!(ui_state.screen.is_main());
        assert!(app_state.game.is_complete());
    }

    #[test]
    fn next_stage_on_last_stage() {
        let (mut app_state, mut ui_state) = setup();
        let now = Instant::now();
        handle(
            &mut app_state,
            &mut ui_state,
            Action::SelectStage(StageId::new(4)),
            now,
        );
        handle(&mut app_state, &mut ui_state, Action::NextStage, now);
        assert!(ui_state.screen.is_main());
        assert_eq!(app_state.game.current_stage_id(), StageId::new(4));
    }

    #[test]
    fn show_completion_requires_complete_game() {
        let (mut app_state, mut ui_state) = setup();
        handle(
            &mut app_state,
            &mut ui_state,
            Action::ShowCompletion,
            Instant::now(),
        );
        assert!(ui_state.screen.is_main());
    }

    #[test]
    fn restart_drops_pending_transitions() {
        let (mut app_state, mut ui_state) = setup();
        let now = Instant::now();
        submit(&mut app_state, &mut ui_state, "יו", now);
        assert!(!ui_state.scheduler.is_empty());

        handle(&mut app_state, &mut ui_state, Action::Restart, now);
        assert!(ui_state.scheduler.is_empty());
        assert_eq!(app_state.game.solved_count(), 0);
        assert_eq!(ui_state.feedback, None);
        assert!(ui_state.screen.is_main());
    }
}
