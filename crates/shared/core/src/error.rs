use thiserror::Error;

/// Errors raised while constructing date and time values
///
/// Construction either succeeds with a valid value or fails with one of
/// these; nothing is clamped or wrapped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid zone offset: {0}")]
    InvalidOffset(String),

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error("Invalid zone id: {0}")]
    InvalidZoneId(String),

    #[error("Instant out of supported range: {0}")]
    InstantOutOfRange(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type DateTimeResult<T> = std::result::Result<T, DateTimeError>;
