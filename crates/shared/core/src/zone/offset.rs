use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DateTimeError, DateTimeResult};

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;
const MAX_SECONDS: i32 = 18 * SECONDS_PER_HOUR;

/// A fixed signed distance from UTC, limited to -18:00..=+18:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZoneOffset {
    total_seconds: i32,
}

impl ZoneOffset {
    pub const UTC: ZoneOffset = ZoneOffset { total_seconds: 0 };
    pub const MIN: ZoneOffset = ZoneOffset {
        total_seconds: -MAX_SECONDS,
    };
    pub const MAX: ZoneOffset = ZoneOffset {
        total_seconds: MAX_SECONDS,
    };

    /// Parse an offset id
    ///
    /// Accepted forms: `Z`, `+h`, `+hh`, `+hh:mm`, `+hhmm`, `+hh:mm:ss` and
    /// `+hhmmss`, each also with a leading `-`.
    pub fn of(id: &str) -> DateTimeResult<Self> {
        if id == "Z" {
            return Ok(Self::UTC);
        }
        let malformed =
            || DateTimeError::InvalidOffset(format!("{id:?} is not a valid offset id"));
        let (negative, digits) = match id.as_bytes().first() {
            Some(b'+') => (false, &id[1..]),
            Some(b'-') => (true, &id[1..]),
            _ => return Err(malformed()),
        };
        let (hours, minutes, seconds) = match digits.len() {
            1 => (parse_digits(digits, 0, 1).ok_or_else(malformed)?, 0, 0),
            2 => (parse_digits(digits, 0, 2).ok_or_else(malformed)?, 0, 0),
            4 => (
                parse_digits(digits, 0, 2).ok_or_else(malformed)?,
                parse_digits(digits, 2, 2).ok_or_else(malformed)?,
                0,
            ),
            5 => (
                parse_digits(digits, 0, 2).ok_or_else(malformed)?,
                parse_after_colon(digits, 2).ok_or_else(malformed)?,
                0,
            ),
            6 => (
                parse_digits(digits, 0, 2).ok_or_else(malformed)?,
                parse_digits(digits, 2, 2).ok_or_else(malformed)?,
                parse_digits(digits, 4, 2).ok_or_else(malformed)?,
            ),
            8 => (
                parse_digits(digits, 0, 2).ok_or_else(malformed)?,
                parse_after_colon(digits, 2).ok_or_else(malformed)?,
                parse_after_colon(digits, 5).ok_or_else(malformed)?,
            ),
            _ => return Err(malformed()),
        };
        if negative {
            Self::of_hours_minutes_seconds(-hours, -minutes, -seconds)
        } else {
            Self::of_hours_minutes_seconds(hours, minutes, seconds)
        }
    }

    pub fn of_hours(hours: i32) -> DateTimeResult<Self> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    pub fn of_hours_minutes(hours: i32, minutes: i32) -> DateTimeResult<Self> {
        Self::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Build an offset from components that must all share one sign
    pub fn of_hours_minutes_seconds(
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> DateTimeResult<Self> {
        let invalid = |reason: &str| {
            DateTimeError::InvalidOffset(format!("{hours}h {minutes}m {seconds}s: {reason}"))
        };
        if !(-18..=18).contains(&hours) {
            return Err(invalid("hours must be in range -18..=18"));
        }
        if !(-59..=59).contains(&minutes) || !(-59..=59).contains(&seconds) {
            return Err(invalid("minutes and seconds must be in range -59..=59"));
        }
        let signs = [hours.signum(), minutes.signum(), seconds.signum()];
        if signs.contains(&1) && signs.contains(&-1) {
            return Err(invalid("components must share the same sign"));
        }
        Self::of_total_seconds(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
    }

    pub fn of_total_seconds(total_seconds: i32) -> DateTimeResult<Self> {
        if (-MAX_SECONDS..=MAX_SECONDS).contains(&total_seconds) {
            Ok(Self { total_seconds })
        } else {
            Err(DateTimeError::InvalidOffset(format!(
                "{total_seconds} seconds is beyond 18 hours"
            )))
        }
    }

    /// Offsets read from the zone database are always within range
    pub(crate) const fn from_database(total_seconds: i32) -> Self {
        Self { total_seconds }
    }

    pub fn total_seconds(&self) -> i32 {
        self.total_seconds
    }
}

fn parse_digits(s: &str, start: usize, len: usize) -> Option<i32> {
    let part = s.get(start..start + len)?;
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_after_colon(s: &str, colon: usize) -> Option<i32> {
    if s.as_bytes().get(colon) != Some(&b':') {
        return None;
    }
    parse_digits(s, colon + 1, 2)
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_seconds == 0 {
            return f.write_str("Z");
        }
        let sign = if self.total_seconds < 0 { '-' } else { '+' };
        let abs = self.total_seconds.abs();
        let hours = abs / SECONDS_PER_HOUR;
        let minutes = abs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        let seconds = abs % SECONDS_PER_MINUTE;
        write!(f, "{sign}{hours:02}:{minutes:02}")?;
        if seconds != 0 {
            write!(f, ":{seconds:02}")?;
        }
        Ok(())
    }
}

impl FromStr for ZoneOffset {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        Self::of(s)
    }
}

impl TryFrom<String> for ZoneOffset {
    type Error = DateTimeError;

    fn try_from(id: String) -> DateTimeResult<Self> {
        Self::of(&id)
    }
}

impl From<ZoneOffset> for String {
    fn from(offset: ZoneOffset) -> Self {
        offset.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_forms() {
        assert_eq!(ZoneOffset::of("-0500").unwrap().total_seconds(), -18_000);
        assert_eq!(ZoneOffset::of("+0100").unwrap().total_seconds(), 3_600);
        assert_eq!(ZoneOffset::of("+0000").unwrap(), ZoneOffset::UTC);
        assert_eq!(ZoneOffset::of("+5").unwrap().total_seconds(), 18_000);
        assert_eq!(ZoneOffset::of("-05").unwrap().total_seconds(), -18_000);
    }

    #[test]
    fn test_parse_colon_forms() {
        assert_eq!(ZoneOffset::of("+05:30").unwrap().total_seconds(), 19_800);
        assert_eq!(ZoneOffset::of("-01:02:03").unwrap().total_seconds(), -3_723);
        assert_eq!(ZoneOffset::of("+010203").unwrap().total_seconds(), 3_723);
        assert_eq!(ZoneOffset::of("Z").unwrap(), ZoneOffset::UTC);
    }

    #[test]
    fn test_rejects_beyond_eighteen_hours() {
        assert!(ZoneOffset::of("+18:00").is_ok());
        assert!(ZoneOffset::of("-18:00").is_ok());
        assert!(matches!(ZoneOffset::of("+18:01"), Err(DateTimeError::InvalidOffset(_))));
        assert!(matches!(ZoneOffset::of("-1900"), Err(DateTimeError::InvalidOffset(_))));
        assert!(matches!(ZoneOffset::of_hours(19), Err(DateTimeError::InvalidOffset(_))));
        assert!(matches!(
            ZoneOffset::of_total_seconds(18 * 3_600 + 1),
            Err(DateTimeError::InvalidOffset(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        for id in ["", "0500", "+", "+05:", "+05:3", "+0a00", "+05-30", "+123", "GMT", "+05:30:1"] {
            assert!(
                matches!(ZoneOffset::of(id), Err(DateTimeError::InvalidOffset(_))),
                "{id:?} should be rejected"
            );
        }
        assert!(ZoneOffset::of("+05:60").is_err());
    }

    #[test]
    fn test_mixed_signs_rejected() {
        assert!(ZoneOffset::of_hours_minutes(1, -30).is_err());
        assert!(ZoneOffset::of_hours_minutes_seconds(0, 30, -1).is_err());
        assert_eq!(ZoneOffset::of_hours_minutes(-1, -30).unwrap().total_seconds(), -5_400);
    }

    #[test]
    fn test_display() {
        assert_eq!(ZoneOffset::UTC.to_string(), "Z");
        assert_eq!(ZoneOffset::of("-0500").unwrap().to_string(), "-05:00");
        assert_eq!(ZoneOffset::of("+0530").unwrap().to_string(), "+05:30");
        assert_eq!(ZoneOffset::of("+01:02:03").unwrap().to_string(), "+01:02:03");
    }
}
