//! Almanac Clock Infrastructure
//!
//! Provides time sources for tests and production:
//!
//! ## Clocks
//!
//! ```text
//! FixedClock    (one instant + zone, forever)
//!     │
//!     └── OffsetClock (shift: ±X from the base clock)
//!
//! SystemClock   (wall clock, production only)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use almanac_clock::{FixedClock, FromClock};
//! use almanac_core::{CivilDate, CivilTime};
//!
//! let clock = FixedClock::parse("1997-08-29T07:14:30Z", "GMT-5")?;
//!
//! let today = CivilDate::now(&clock); // 1997-08-29
//! let time = CivilTime::now(&clock);  // 02:14:30
//! ```

mod config;
mod fixed;
mod offset;
mod system;

pub use config::{ClockConfig, DEFAULT_INSTANT, DEFAULT_ZONE};
pub use fixed::FixedClock;
pub use offset::OffsetClock;
pub use system::SystemClock;

// Re-export the ports for convenience
pub use almanac_ports::{Clock, ClockError, ClockResult, FromClock};
