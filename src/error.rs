use thiserror::Error;

/// Engine-level failures.
///
/// Failures are always scoped to a single computation for a single symbol;
/// batch callers log and skip rather than abort.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Empty or malformed input series, or a nonsensical parameter
    /// (zero window, zero period). Fatal to the computation that saw it.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The warm-up window of a required indicator has not elapsed yet.
    /// Recoverable: the caller skips signal generation for this asset
    /// until enough history has accumulated.
    #[error("insufficient history: {0}")]
    InsufficientHistory(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
