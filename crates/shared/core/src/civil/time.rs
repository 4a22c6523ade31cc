use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::OffsetTime;
use crate::error::{DateTimeError, DateTimeResult};
use crate::zone::ZoneOffset;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A time of day (hour, minute, second, nanosecond) with no date or zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveTime", into = "NaiveTime")]
pub struct CivilTime(NaiveTime);

impl CivilTime {
    pub const MIDNIGHT: CivilTime = hms_nano(0, 0, 0, 0);
    pub const NOON: CivilTime = hms_nano(12, 0, 0, 0);
    pub const MIN: CivilTime = Self::MIDNIGHT;
    pub const MAX: CivilTime = hms_nano(23, 59, 59, 999_999_999);

    /// Create a time from an hour and minute
    pub fn of(hour: u8, minute: u8) -> DateTimeResult<Self> {
        Self::of_hms_nano(hour, minute, 0, 0)
    }

    pub fn of_hms(hour: u8, minute: u8, second: u8) -> DateTimeResult<Self> {
        Self::of_hms_nano(hour, minute, second, 0)
    }

    /// Create a time from all fields
    ///
    /// Fails with `InvalidTime` if any field is out of range. Leap seconds
    /// are not representable.
    pub fn of_hms_nano(hour: u8, minute: u8, second: u8, nano: u32) -> DateTimeResult<Self> {
        if hour > 23 {
            return Err(invalid("hour", u32::from(hour), 23));
        }
        if minute > 59 {
            return Err(invalid("minute", u32::from(minute), 59));
        }
        if second > 59 {
            return Err(invalid("second", u32::from(second), 59));
        }
        if nano >= NANOS_PER_SECOND {
            return Err(invalid("nanosecond", nano, NANOS_PER_SECOND - 1));
        }
        NaiveTime::from_hms_nano_opt(
            u32::from(hour),
            u32::from(minute),
            u32::from(second),
            nano,
        )
        .map(Self)
        .ok_or_else(|| DateTimeError::InvalidTime(format!("{hour}:{minute}:{second}.{nano}")))
    }

    pub(crate) fn from_naive(time: NaiveTime) -> Self {
        Self(time)
    }

    pub(crate) fn naive(self) -> NaiveTime {
        self.0
    }

    pub fn hour(self) -> u8 {
        self.0.hour() as u8
    }

    pub fn minute(self) -> u8 {
        self.0.minute() as u8
    }

    pub fn second(self) -> u8 {
        self.0.second() as u8
    }

    pub fn nano(self) -> u32 {
        self.0.nanosecond()
    }

    /// Seconds elapsed since midnight
    pub fn to_second_of_day(self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Attach an offset without changing any field
    pub fn at_offset(self, offset: ZoneOffset) -> OffsetTime {
        OffsetTime::new(self, offset)
    }
}

const fn hms_nano(hour: u32, minute: u32, second: u32, nano: u32) -> CivilTime {
    match NaiveTime::from_hms_nano_opt(hour, minute, second, nano) {
        Some(time) => CivilTime(time),
        None => panic!("invalid time constant"),
    }
}

fn invalid(field: &str, value: u32, max: u32) -> DateTimeError {
    DateTimeError::InvalidTime(format!("{field} {value} is not in range 0..={max}"))
}

/// Writes a non-zero nanosecond fraction as 3, 6 or 9 digits
pub(crate) fn write_fraction(f: &mut fmt::Formatter<'_>, nano: u32) -> fmt::Result {
    if nano == 0 {
        Ok(())
    } else if nano % 1_000_000 == 0 {
        write!(f, ".{:03}", nano / 1_000_000)
    } else if nano % 1_000 == 0 {
        write!(f, ".{:06}", nano / 1_000)
    } else {
        write!(f, ".{nano:09}")
    }
}

impl TryFrom<NaiveTime> for CivilTime {
    type Error = DateTimeError;

    fn try_from(time: NaiveTime) -> DateTimeResult<Self> {
        if time.nanosecond() >= NANOS_PER_SECOND {
            return Err(DateTimeError::InvalidTime(format!("leap second {time}")));
        }
        Ok(Self(time))
    }
}

impl From<CivilTime> for NaiveTime {
    fn from(time: CivilTime) -> Self {
        time.0
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.second() > 0 || self.nano() > 0 {
            write!(f, ":{:02}", self.second())?;
            write_fraction(f, self.nano())?;
        }
        Ok(())
    }
}

impl FromStr for CivilTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        let format = if s.len() == 5 { "%H:%M" } else { "%H:%M:%S%.f" };
        let time = NaiveTime::parse_from_str(s, format)
            .map_err(|e| DateTimeError::Parse(format!("{s:?} is not an HH:MM[:SS] time: {e}")))?;
        Self::try_from(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_minute_display() {
        let time = CivilTime::of(7, 52).unwrap();
        assert_eq!(time.to_string(), "07:52");
    }

    #[test]
    fn test_seconds_shown_only_when_set() {
        assert_eq!(CivilTime::of_hms(2, 14, 30).unwrap().to_string(), "02:14:30");
        assert_eq!(CivilTime::of_hms(2, 14, 0).unwrap().to_string(), "02:14");
        assert_eq!(
            CivilTime::of_hms_nano(2, 14, 0, 500_000_000).unwrap().to_string(),
            "02:14:00.500"
        );
        assert_eq!(
            CivilTime::of_hms_nano(5, 5, 5, 555).unwrap().to_string(),
            "05:05:05.000000555"
        );
        assert_eq!(
            CivilTime::of_hms_nano(5, 5, 5, 1_000).unwrap().to_string(),
            "05:05:05.000001"
        );
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        assert!(matches!(CivilTime::of(24, 0), Err(DateTimeError::InvalidTime(_))));
        assert!(matches!(CivilTime::of(0, 60), Err(DateTimeError::InvalidTime(_))));
        assert!(matches!(CivilTime::of_hms(0, 0, 60), Err(DateTimeError::InvalidTime(_))));
        assert!(matches!(
            CivilTime::of_hms_nano(23, 59, 59, 1_000_000_000),
            Err(DateTimeError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_constants() {
        assert_eq!(CivilTime::MIDNIGHT.to_string(), "00:00");
        assert_eq!(CivilTime::NOON.to_string(), "12:00");
        assert_eq!(CivilTime::MAX.to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_parse() {
        assert_eq!("07:52".parse::<CivilTime>().unwrap(), CivilTime::of(7, 52).unwrap());
        assert_eq!(
            "02:14:30".parse::<CivilTime>().unwrap(),
            CivilTime::of_hms(2, 14, 30).unwrap()
        );
        assert!("25:00".parse::<CivilTime>().is_err());
    }
}
