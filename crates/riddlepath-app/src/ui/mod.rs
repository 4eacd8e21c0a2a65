//! Plain-text rendering of view models.

use std::io::{self, Write};

use crate::view_model_builder::ScreenViewModel;

pub mod collected_letters;
pub mod completion_screen;
pub mod main_screen;
pub mod progress_bar;
pub mod puzzle_card;
pub mod stage_bar;
pub mod welcome_screen;

pub fn show<W: Write>(out: &mut W, vm: &ScreenViewModel) -> io::Result<()> {
    match vm {
        ScreenViewModel::Welcome => welcome_screen::show(out),
        ScreenViewModel::Main(vm) => main_screen::show(out, vm),
        ScreenViewModel::Completion(vm) => completion_screen::show(out, vm),
    }?;
    out.flush()
}
