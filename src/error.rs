//! Error types.
//!
//! Construction is the only fallible step: once a [`Rotator`](crate::Rotator)
//! exists, segmenting, staggering and advancing are total.

use thiserror::Error;

/// Invalid construction or update parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No phrases to rotate through.
    #[error("phrase list must be non-empty")]
    EmptyPhraseList,

    /// A stagger origin that is neither a keyword nor an integer.
    #[error("invalid stagger origin {0:?}: expected \"first\", \"last\", \"center\" or an integer")]
    InvalidStaggerFrom(String),

    /// Automatic rotation with a zero interval.
    #[error("rotation interval must be non-zero when auto rotation is enabled")]
    ZeroInterval,

    /// Stagger duration that is negative, NaN or infinite.
    #[error("stagger duration must be a finite, non-negative number of seconds (got {0})")]
    InvalidStaggerDuration(String),

    /// Custom split delimiter that is empty.
    #[error("custom split delimiter must be non-empty")]
    EmptyDelimiter,
}

/// Errors surfaced by the rotator.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The OS refused to spawn the rotation timer thread.
    #[error("failed to start rotation timer: {0}")]
    Timer(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
