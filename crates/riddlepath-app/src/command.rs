//! Translation of input lines into actions.
//!
//! Lines starting with `:` are commands; on the main screen anything else is
//! an answer to the current riddle.

use riddlepath_core::{StageId, is_answer_whitespace};

use crate::{action::Action, state::Screen};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("unknown command: {name}")]
    Unknown { name: String },
    #[display("not a stage number: {value}")]
    InvalidStageNumber { value: String },
    #[display("{name} is not available here")]
    Unavailable { name: String },
}

pub fn parse_line(line: &str, screen: Screen) -> Result<Action, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_matches(is_answer_whitespace);
    let Some(command) = trimmed.strip_prefix(':') else {
        return match screen {
            Screen::Welcome if trimmed.is_empty() => Ok(Action::StartGame),
            Screen::Main => Ok(Action::SubmitAnswer(line.to_owned())),
            Screen::Welcome | Screen::Completion => Err(CommandError::Unavailable {
                name: "answering".to_owned(),
            }),
        };
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let action = match name {
        "quit" | "q" => return Ok(Action::Quit),
        "start" => Action::StartGame,
        "stage" | "s" => {
            let value = words.next().unwrap_or_default();
            let id = value
                .parse::<u32>()
                .map_err(|_| CommandError::InvalidStageNumber {
                    value: value.to_owned(),
                })?;
            Action::SelectStage(StageId::new(id))
        }
        "next" | "n" => Action::NextStage,
        "restart" => Action::Restart,
        "continue" => Action::ContinueAfterCompletion,
        _ => {
            return Err(CommandError::Unknown {
                name: name.to_owned(),
            });
        }
    };

    if is_available(&action, screen) {
        Ok(action)
    } else {
        Err(CommandError::Unavailable {
            name: format!(":{name}"),
        })
    }
}

fn is_available(action: &Action, screen: Screen) -> bool {
    match screen {
        Screen::Welcome => matches!(action, Action::StartGame),
        Screen::Main => matches!(
            action,
            Action::SelectStage(_) | Action::NextStage | Action::Restart
        ),
        Screen::Completion => matches!(
            action,
            Action::Restart | Action::ContinueAfterCompletion
        ),
    }
}
