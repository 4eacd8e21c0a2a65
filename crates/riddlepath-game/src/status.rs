/// Per-stage classification used for stage indicators.
///
/// `Current` takes precedence over `Solved`. A "skipped" look is a
/// presentation choice derived from `Unsolved` plus the existence of other
/// progress, not a state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum StageStatus {
    /// The stage currently presented.
    Current,
    /// A solved stage that is not currently presented.
    Solved,
    /// An unsolved stage that is not currently presented.
    Unsolved,
}

/// Phase of the whole play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GamePhase {
    /// At least one stage is still unsolved.
    InProgress,
    /// Every stage is solved. Only a restart leaves this phase.
    Complete,
}
