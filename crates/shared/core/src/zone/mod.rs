//! Offsets, zones and zoned date-times

mod id;
mod offset;
mod zoned;

pub use id::{OffsetPrefix, ZoneId};
pub use offset::ZoneOffset;
pub use zoned::ZonedDateTime;
