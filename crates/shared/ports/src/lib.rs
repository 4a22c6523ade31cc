//! Almanac Ports
//!
//! Port definitions (traits) for Almanac.
//! These define the boundary between pure date-time values and time sources.

mod clock;
mod error;

pub use clock::{Clock, FromClock};
pub use error::{ClockError, ClockResult};
