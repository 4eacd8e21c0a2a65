use std::time::{Duration, Instant};

use crate::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledAction {
    due: Instant,
    action: Action,
}

/// Delayed actions waiting for their due time.
///
/// Entries with equal due times fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TransitionScheduler {
    pending: Vec<ScheduledAction>,
}

impl TransitionScheduler {
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: Action) {
        let due = now + delay;
        let index = self.pending.partition_point(|entry| entry.due <= due);
        self.pending.insert(index, ScheduledAction { due, action });
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.first().map(|entry| entry.due)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn take_due(&mut self, now: Instant) -> Vec<Action> {
        let split = self.pending.partition_point(|entry| entry.due <= now);
        self.pending
            .drain(..split)
            .map(|entry| entry.action)
            .collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
