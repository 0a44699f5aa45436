//! Error types for the tracker_core library.

use crate::duration::ParseDurationError;
use std::io;
use std::num::ParseIntError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
///
/// Record validation failures are unit variants so callers match on the
/// kind of failure rather than on a particular value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record has the wrong number of comma-separated fields
    #[error("неверное количество параметров")]
    IncorrectArgCount,

    /// Steps are zero or negative
    #[error("количество шагов должно быть больше нуля")]
    InvalidStepsNumber,

    /// Height is zero or negative
    #[error("неверный рост")]
    InvalidHeight,

    /// Weight is zero or negative
    #[error("неверный вес")]
    InvalidWeight,

    /// Duration is zero, negative or unreadable
    #[error("неверная длительность")]
    InvalidDuration,

    /// Activity label is neither running nor walking
    #[error("неизвестный тип тренировки")]
    UnknownActivity,

    /// Steps field is not an integer
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// Duration field is not a duration expression
    #[error(transparent)]
    ParseDuration(#[from] ParseDurationError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
