use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBarViewModel {
    pub solved: usize,
    pub total: usize,
}

impl ProgressBarViewModel {
    #[must_use]
    pub fn percent(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.solved * 100 / self.total
    }

    fn filled_width(self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.solved * BAR_WIDTH / self.total
    }
}

pub fn show<W: Write>(out: &mut W, vm: &ProgressBarViewModel) -> io::Result<()> {
    let filled = vm.filled_width();
    writeln!(
        out,
        "[{}{}] {}/{}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        vm.solved,
        vm.total
    )
}
