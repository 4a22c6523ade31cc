//! Almanac Core Domain
//!
//! Pure date and time value types for Almanac.
//! This crate contains no clock reads, no async and no I/O, and is 100% unit testable.
//! Reading "now" is the job of a `Clock`, defined in `almanac-ports`.

pub mod civil;
pub mod error;
pub mod instant;
pub mod zone;

// Re-export commonly used types at crate root
pub use civil::{CivilDate, CivilDateTime, CivilTime, Month, OffsetTime};
pub use error::{DateTimeError, DateTimeResult};
pub use instant::Instant;
pub use zone::{OffsetPrefix, ZoneId, ZoneOffset, ZonedDateTime};
