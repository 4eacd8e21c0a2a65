use std::io::{self, Write};

use crate::state::Feedback;

const SUCCESS_TEXT: &str = "כל הכבוד! האותיות נוספו.";
const MISMATCH_TEXT: &str = "עדיין לא. נסה שוב.";
const ALREADY_SOLVED_TEXT: &str = "השלב הזה כבר נפתר.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCardViewModel {
    pub title: String,
    pub prompt: String,
    pub read_only: bool,
    pub feedback: Option<Feedback>,
}

pub fn show<W: Write>(out: &mut W, vm: &PuzzleCardViewModel) -> io::Result<()> {
    writeln!(out, "{}", vm.title)?;
    writeln!(out, "{}", vm.prompt)?;
    if let Some(feedback) = &vm.feedback {
        let text = match feedback {
            Feedback::Success => SUCCESS_TEXT,
            Feedback::Mismatch => MISMATCH_TEXT,
            Feedback::AlreadySolved => ALREADY_SOLVED_TEXT,
            Feedback::Notice(notice) => notice.as_str(),
        };
        writeln!(out, "> {text}")?;
    }
    if vm.read_only {
        writeln!(out, "(solved; :next or :stage N to move on)")?;
    }
    Ok(())
}
