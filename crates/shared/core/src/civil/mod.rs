//! Zone-less calendar and clock values

mod date;
mod datetime;
mod month;
mod offset_time;
mod time;

pub use date::{CivilDate, YEAR_MAX, YEAR_MIN};
pub use datetime::CivilDateTime;
pub use month::Month;
pub use offset_time::OffsetTime;
pub use time::CivilTime;

pub(crate) use time::write_fraction;
