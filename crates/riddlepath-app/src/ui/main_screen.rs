use std::io::{self, Write};

use super::{
    collected_letters::{self, CollectedLettersViewModel},
    progress_bar::{self, ProgressBarViewModel},
    puzzle_card::{self, PuzzleCardViewModel},
    stage_bar::{self, StageBarViewModel},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MainScreenViewModel {
    pub stage_bar: StageBarViewModel,
    pub progress: ProgressBarViewModel,
    pub puzzle: PuzzleCardViewModel,
    pub collected: CollectedLettersViewModel,
}

pub fn show<W: Write>(out: &mut W, vm: &MainScreenViewModel) -> io::Result<()> {
    stage_bar::show(out, &vm.stage_bar)?;
    progress_bar::show(out, &vm.progress)?;
    puzzle_card::show(out, &vm.puzzle)?;
    collected_letters::show(out, &vm.collected)
}
