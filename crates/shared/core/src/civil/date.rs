use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::month::{month_of, month_of_date};
use super::{CivilDateTime, CivilTime, Month};
use crate::error::{DateTimeError, DateTimeResult};

/// Smallest supported civil year
pub const YEAR_MIN: i32 = -9999;

/// Largest supported civil year
pub const YEAR_MAX: i32 = 9999;

/// A calendar date (year, month, day) in the proleptic Gregorian calendar
///
/// Both constructors normalize to the same representation, so a date built
/// from `Month::March` and one built from the integer `3` are equal in every
/// accessor and in their string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Create a date from integer fields
    ///
    /// Fails with `InvalidDate` when the month is outside 1..=12, the day does
    /// not exist in that month, or the year is outside the supported range.
    pub fn of(year: i32, month: u8, day: u8) -> DateTimeResult<Self> {
        let month = month_of(month)?;
        Self::of_month(year, month, day)
    }

    /// Create a date from a year, a symbolic month and a day
    pub fn of_month(year: i32, month: Month, day: u8) -> DateTimeResult<Self> {
        check_year(year)?;
        NaiveDate::from_ymd_opt(year, month.number_from_month(), u32::from(day))
            .map(Self)
            .ok_or_else(|| {
                DateTimeError::InvalidDate(format!(
                    "day {day} does not exist in {} {year}",
                    month.name()
                ))
            })
    }

    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub(crate) fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        month_of_date(self.0)
    }

    pub fn month_value(self) -> u8 {
        self.0.month() as u8
    }

    pub fn day_of_month(self) -> u8 {
        self.0.day() as u8
    }

    /// Day of the year, 1..=366
    pub fn day_of_year(self) -> u16 {
        self.0.ordinal() as u16
    }

    pub fn is_leap_year(self) -> bool {
        self.0.leap_year()
    }

    /// Combine with a time of day
    pub fn at_time(self, time: CivilTime) -> CivilDateTime {
        CivilDateTime::new(self, time)
    }

    /// Midnight at the start of this date
    pub fn at_start_of_day(self) -> CivilDateTime {
        self.at_time(CivilTime::MIDNIGHT)
    }
}

fn check_year(year: i32) -> DateTimeResult<()> {
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(())
    } else {
        Err(DateTimeError::InvalidDate(format!(
            "year {year} is not in range {YEAR_MIN}..={YEAR_MAX}"
        )))
    }
}

impl TryFrom<NaiveDate> for CivilDate {
    type Error = DateTimeError;

    fn try_from(date: NaiveDate) -> DateTimeResult<Self> {
        check_year(date.year())?;
        Ok(Self(date))
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.0
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            write!(f, "-{:04}", -year)?;
        } else {
            write!(f, "{year:04}")?;
        }
        write!(f, "-{:02}-{:02}", self.month_value(), self.day_of_month())
    }
}

impl FromStr for CivilDate {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| DateTimeError::Parse(format!("{s:?} is not a YYYY-MM-DD date: {e}")))?;
        Self::try_from(date)
    }
}
