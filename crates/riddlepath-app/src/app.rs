//! Console play loop.
//!
//! Reads one line at a time, turns it into an [`Action`](crate::action::Action), applies it and
//! redraws the screen. Transitions scheduled by the action handler are
//! waited for before the next line is read, so feedback stays visible for the
//! configured delay.

use std::{
    io::{self, BufRead, Write},
    mem,
    thread,
    time::Instant,
};

use riddlepath_game::Game;

use crate::{
    action::ActionRequestQueue,
    action_handler, command,
    settings::Settings,
    state::{AppState, Feedback, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct RiddlepathApp {
    app_state: AppState,
    ui_state: UiState,
}

impl RiddlepathApp {
    #[must_use]
    pub fn new(game: Game, settings: Settings) -> Self {
        Self {
            app_state: AppState::new(game, settings),
            ui_state: UiState::default(),
        }
    }

    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    #[must_use]
    pub fn ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        self.render(out)?;
        let mut buf = Vec::new();
        while !self.ui_state.quit_requested {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("input closed");
                break;
            }
            // Input that is not UTF-8 counts as an empty answer.
            let line = String::from_utf8(mem::take(&mut buf)).unwrap_or_else(|err| {
                log::warn!("discarding non UTF-8 input: {err}");
                String::new()
            });
            self.process_line(&line, Instant::now());
            self.render(out)?;
            self.wait_for_transitions(out)?;
        }
        Ok(())
    }

    pub fn process_line(&mut self, line: &str, now: Instant) {
        match command::parse_line(line, self.ui_state.screen) {
            Ok(action) => {
                let mut queue = ActionRequestQueue::default();
                queue.request(action);
                action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut queue, now);
            }
            Err(err) => {
                log::warn!("rejected input: {err}");
                self.ui_state.feedback = Some(Feedback::Notice(err.to_string()));
            }
        }
    }

    /// Applies transitions that are due at `now` and returns how many ran.
    pub fn apply_due_transitions(&mut self, now: Instant) -> usize {
        let due = self.ui_state.scheduler.take_due(now);
        let count = due.len();
        let mut queue = ActionRequestQueue::default();
        queue.extend(due);
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut queue, now);
        count
    }

    fn wait_for_transitions<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while let Some(due) = self.ui_state.scheduler.next_due() {
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
            if self.apply_due_transitions(Instant::now()) > 0 {
                self.render(out)?;
            }
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let vm = view_model_builder::build_screen_vm(&self.app_state, &self.ui_state);
        writeln!(out)?;
        ui::show(out, &vm)
    }
}
