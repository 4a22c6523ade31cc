use serde::{Deserialize, Serialize};
use std::fmt;

use super::CivilTime;
use crate::zone::ZoneOffset;

/// A time of day paired with a UTC offset
///
/// Attaching an offset never changes the time fields: `02:14` at `-05:00`
/// is still hour 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetTime {
    time: CivilTime,
    offset: ZoneOffset,
}

impl OffsetTime {
    pub fn new(time: CivilTime, offset: ZoneOffset) -> Self {
        Self { time, offset }
    }

    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn second(&self) -> u8 {
        self.time.second()
    }

    pub fn nano(&self) -> u32 {
        self.time.nano()
    }

    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn to_civil_time(&self) -> CivilTime {
        self.time
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}
