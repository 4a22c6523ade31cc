use almanac_core::DateTimeError;
use thiserror::Error;

/// Errors raised while building a clock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    #[error("Invalid clock configuration: {0}")]
    Config(String),
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;
