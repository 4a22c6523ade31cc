use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CivilDate, CivilTime, Month};
use crate::error::{DateTimeError, DateTimeResult};
use crate::instant::Instant;
use crate::zone::{ZoneId, ZoneOffset, ZonedDateTime};

/// A date and a time of day with no zone attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    date: CivilDate,
    time: CivilTime,
}

impl CivilDateTime {
    pub fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Create a date-time from integer fields
    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> DateTimeResult<Self> {
        Self::of_nano(year, month, day, hour, minute, second, 0)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn of_nano(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nano: u32,
    ) -> DateTimeResult<Self> {
        let date = CivilDate::of(year, month, day)?;
        let time = CivilTime::of_hms_nano(hour, minute, second, nano)?;
        Ok(Self::new(date, time))
    }

    pub(crate) fn from_naive(naive: NaiveDateTime) -> Self {
        Self {
            date: CivilDate::from_naive(naive.date()),
            time: CivilTime::from_naive(naive.time()),
        }
    }

    pub(crate) fn naive(self) -> NaiveDateTime {
        NaiveDateTime::new(self.date.naive(), self.time.naive())
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn time(&self) -> CivilTime {
        self.time
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn month_value(&self) -> u8 {
        self.date.month_value()
    }

    pub fn day_of_month(&self) -> u8 {
        self.date.day_of_month()
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

    /// The instant these local fields denote when `offset` applies
    ///
    /// Fails with `InstantOutOfRange` only at the extreme edges of the
    /// civil range, where the result would fall outside `Instant::MIN..=Instant::MAX`.
    pub fn to_instant(&self, offset: ZoneOffset) -> DateTimeResult<Instant> {
        let utc = self.naive() - Duration::seconds(i64::from(offset.total_seconds()));
        Instant::from_naive_utc(utc).map_err(|_| {
            DateTimeError::InstantOutOfRange(format!("{self} at offset {offset}"))
        })
    }

    /// Seconds since the Unix epoch when `offset` applies
    pub fn to_epoch_second(&self, offset: ZoneOffset) -> DateTimeResult<i64> {
        self.to_instant(offset).map(|instant| instant.epoch_second())
    }

    /// Resolve these local fields in a zone
    pub fn at_zone(&self, zone: ZoneId) -> DateTimeResult<ZonedDateTime> {
        ZonedDateTime::of_local(*self, zone)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for CivilDateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| DateTimeError::Parse(format!("{s:?} has no 'T' separator")))?;
        Ok(Self::new(date.parse()?, time.parse()?))
    }
}
