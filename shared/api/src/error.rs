use std::time::Duration;

/// Errors raised while setting up a debug API or collecting an action result.
///
/// Failures reported by the game logic itself are never errors: they come back
/// as `false` or as a sentinel value and are logged as warnings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log directory or log file could not be created.
    #[error("log sink error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker pool for asynchronous actions could not be started.
    #[error("failed to start action workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The action task ended without producing a result, either because it
    /// panicked or because its result was already taken.
    #[error("action task aborted before producing a result")]
    TaskAborted,

    /// No result arrived within the given time.
    #[error("action did not complete within {0:?}")]
    Timeout(Duration),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
