use std::time::Duration;

pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1200);
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1400);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub transitions: TransitionSettings,
}

/// Timing of the view changes that follow a solved stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionSettings {
    /// Move to the suggested next stage after a success.
    pub auto_advance: bool,
    /// Delay before moving to the suggested next stage.
    pub advance_delay: Duration,
    /// Delay before the completion screen is shown.
    pub completion_delay: Duration,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            advance_delay: DEFAULT_ADVANCE_DELAY,
            completion_delay: DEFAULT_COMPLETION_DELAY,
        }
    }
}

impl TransitionSettings {
    /// Settings with every delay set to zero.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            auto_advance: true,
            advance_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }
}
