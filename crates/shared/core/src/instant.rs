use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::civil::{CivilDate, write_fraction};
use crate::error::{DateTimeError, DateTimeResult};
use crate::zone::{ZoneId, ZonedDateTime};

/// An absolute point on the UTC time line
///
/// The range is the civil range shrunk by 18 hours on each side, so every
/// instant can be projected into every zone without leaving the civil range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// `1970-01-01T00:00:00Z`
    pub const EPOCH: Instant = utc(1970, 1, 1, 0, 0, 0, 0);

    /// `-9999-01-01T18:00:00Z`
    pub const MIN: Instant = utc(-9999, 1, 1, 18, 0, 0, 0);

    /// `9999-12-31T05:59:59.999999999Z`
    pub const MAX: Instant = utc(9999, 12, 31, 5, 59, 59, 999_999_999);

    pub fn of_epoch_second(epoch_second: i64) -> DateTimeResult<Self> {
        Self::of_epoch_second_nano(epoch_second, 0)
    }

    pub fn of_epoch_second_nano(epoch_second: i64, nano: u32) -> DateTimeResult<Self> {
        if nano >= 1_000_000_000 {
            return Err(DateTimeError::InstantOutOfRange(format!(
                "nanosecond {nano} is not below one second"
            )));
        }
        DateTime::from_timestamp(epoch_second, nano)
            .ok_or_else(|| {
                DateTimeError::InstantOutOfRange(format!("epoch second {epoch_second}"))
            })
            .and_then(Self::try_from)
    }

    /// Parse an RFC 3339 timestamp such as `1997-08-29T07:14:30Z`
    ///
    /// Any offset is accepted and normalized to UTC.
    pub fn parse(s: &str) -> DateTimeResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|e| DateTimeError::Parse(format!("{s:?} is not an RFC 3339 instant: {e}")))?;
        Self::try_from(parsed.with_timezone(&Utc))
    }

    pub(crate) fn from_naive_utc(naive: NaiveDateTime) -> DateTimeResult<Self> {
        Self::try_from(naive.and_utc())
    }

    pub(crate) fn naive_utc(self) -> NaiveDateTime {
        self.0.naive_utc()
    }

    /// Seconds since the Unix epoch
    pub fn epoch_second(&self) -> i64 {
        self.0.timestamp()
    }

    /// Nanoseconds within the second, always below one second
    pub fn nano(&self) -> u32 {
        self.0.timestamp_subsec_nanos()
    }

    pub fn checked_add(&self, duration: Duration) -> Option<Self> {
        self.0
            .checked_add_signed(duration)
            .and_then(|dt| Self::try_from(dt).ok())
    }

    /// Add a duration, clamping at `Instant::MIN` and `Instant::MAX`
    pub fn saturating_add(&self, duration: Duration) -> Self {
        self.checked_add(duration).unwrap_or(if duration < Duration::zero() {
            Self::MIN
        } else {
            Self::MAX
        })
    }

    /// Project this instant into a zone
    pub fn at_zone(&self, zone: ZoneId) -> ZonedDateTime {
        ZonedDateTime::of_instant(*self, zone)
    }
}

#[allow(clippy::too_many_arguments)]
const fn utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nano: u32,
) -> Instant {
    let date = match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid instant constant"),
    };
    let time = match NaiveTime::from_hms_nano_opt(hour, minute, second, nano) {
        Some(time) => time,
        None => panic!("invalid instant constant"),
    };
    Instant(DateTime::from_naive_utc_and_offset(NaiveDateTime::new(date, time), Utc))
}

impl TryFrom<DateTime<Utc>> for Instant {
    type Error = DateTimeError;

    fn try_from(dt: DateTime<Utc>) -> DateTimeResult<Self> {
        if dt < Self::MIN.0 || dt > Self::MAX.0 {
            return Err(DateTimeError::InstantOutOfRange(format!(
                "{} is outside {}..={}",
                dt.to_rfc3339(),
                Self::MIN,
                Self::MAX
            )));
        }
        if dt.nanosecond() >= 1_000_000_000 {
            return Err(DateTimeError::InstantOutOfRange(format!(
                "leap second {}",
                dt.to_rfc3339()
            )));
        }
        Ok(Self(dt))
    }
}

impl From<Instant> for DateTime<Utc> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let naive = self.naive_utc();
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            CivilDate::from_naive(naive.date()),
            naive.hour(),
            naive.minute(),
            naive.second()
        )?;
        write_fraction(f, naive.nanosecond())?;
        f.write_str("Z")
    }
}

impl FromStr for Instant {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let instant = Instant::parse("1997-08-29T07:14:30Z").unwrap();
        assert_eq!(instant.epoch_second(), 872_838_870);
        assert_eq!(instant.nano(), 0);
        assert_eq!(instant.to_string(), "1997-08-29T07:14:30Z");
    }

    #[test]
    fn test_parse_normalizes_offset() {
        let with_offset = Instant::parse("1997-08-29T02:14:30-05:00").unwrap();
        assert_eq!(with_offset, Instant::parse("1997-08-29T07:14:30Z").unwrap());
        assert!(Instant::parse("1997-08-29 07:14").is_err());
    }

    #[test]
    fn test_epoch_seconds() {
        assert_eq!(Instant::of_epoch_second(0).unwrap(), Instant::EPOCH);
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");
        let with_nanos = Instant::of_epoch_second_nano(0, 5_000_000).unwrap();
        assert_eq!(with_nanos.to_string(), "1970-01-01T00:00:00.005Z");
        assert!(Instant::of_epoch_second_nano(0, 1_000_000_000).is_err());
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(Instant::MIN.epoch_second(), -377_705_052_000);
        assert_eq!(Instant::MAX.epoch_second(), 253_402_235_999);
        assert!(Instant::of_epoch_second(-377_705_052_000).is_ok());
        assert!(Instant::of_epoch_second(-377_705_052_001).is_err());
        assert!(Instant::of_epoch_second(253_402_235_999).is_ok());
        assert!(Instant::of_epoch_second(253_402_236_000).is_err());
    }

    #[test]
    fn test_ordering() {
        let earlier = Instant::parse("1997-08-29T07:14:29Z").unwrap();
        let later = Instant::parse("1997-08-29T07:14:30Z").unwrap();
        assert!(earlier < later);
        assert!(Instant::MIN < Instant::EPOCH && Instant::EPOCH < Instant::MAX);
    }

    #[test]
    fn test_add() {
        let instant = Instant::EPOCH;
        assert_eq!(
            instant.checked_add(Duration::hours(1)).unwrap().epoch_second(),
            3_600
        );
        assert_eq!(Instant::MAX.checked_add(Duration::seconds(1)), None);
        assert_eq!(Instant::MAX.saturating_add(Duration::days(1)), Instant::MAX);
        assert_eq!(Instant::MIN.saturating_add(Duration::days(-1)), Instant::MIN);
    }
}
