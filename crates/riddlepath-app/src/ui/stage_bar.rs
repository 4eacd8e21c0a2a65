use std::io::{self, Write};

use riddlepath_core::StageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StageMark {
    Solved,
    Skipped,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageButton {
    pub id: StageId,
    pub is_current: bool,
    pub mark: StageMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBarViewModel {
    pub stages: Vec<StageButton>,
}

pub fn show<W: Write>(out: &mut W, vm: &StageBarViewModel) -> io::Result<()> {
    let buttons: Vec<String> = vm.stages.iter().map(button_label).collect();
    writeln!(out, "{}", buttons.join(" "))
}

fn button_label(button: &StageButton) -> String {
    let mark = match button.mark {
        StageMark::Solved => "✓",
        StageMark::Skipped => "-",
        StageMark::None => "",
    };
    if button.is_current {
        format!("[{}{mark}]", button.id)
    } else {
        format!(" {}{mark} ", button.id)
    }
}
