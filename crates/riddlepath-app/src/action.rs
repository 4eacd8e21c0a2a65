use std::mem;

use riddlepath_core::StageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    StartGame,
    SelectStage(StageId),
    SubmitAnswer(String),
    NextStage,
    ShowCompletion,
    ContinueAfterCompletion,
    Restart,
    Quit,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn extend(&mut self, actions: impl IntoIterator<Item = Action>) {
        self.actions.extend(actions);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::StartGame);
        queue.request(Action::NextStage);

        let drained = queue.take_all();
        assert_eq!(drained, [Action::StartGame, Action::NextStage]);
        assert!(queue.is_empty());

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
