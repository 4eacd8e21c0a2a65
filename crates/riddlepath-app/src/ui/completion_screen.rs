use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionScreenViewModel {
    pub word: String,
}

pub fn show<W: Write>(out: &mut W, vm: &CompletionScreenViewModel) -> io::Result<()> {
    writeln!(out, "All riddles solved!")?;
    writeln!(out, "The word is: {}", vm.word)?;
    writeln!(out, ":restart to play again, :continue to review the riddles.")
}
