use riddlepath_core::StageId;

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The stage id lies outside the catalog range `1..=len`.
    #[display("stage {id} is outside the catalog range 1..={len}")]
    InvalidStage {
        /// The rejected id.
        id: StageId,
        /// Number of stages in the catalog.
        len: usize,
    },
}
