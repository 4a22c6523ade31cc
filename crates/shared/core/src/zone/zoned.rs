use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ZoneId, ZoneOffset};
use crate::civil::{CivilDate, CivilDateTime, CivilTime, Month, OffsetTime};
use crate::error::{DateTimeError, DateTimeResult};
use crate::instant::Instant;

/// A date-time in a zone, anchored to one absolute instant
///
/// The local fields, the offset and the instant always agree:
/// `date_time - offset == instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ZonedFields", into = "ZonedFields")]
pub struct ZonedDateTime {
    date_time: CivilDateTime,
    offset: ZoneOffset,
    zone: ZoneId,
    instant: Instant,
}

/// Serialized form; the instant is derived on the way back in
#[derive(Serialize, Deserialize)]
struct ZonedFields {
    date_time: CivilDateTime,
    offset: ZoneOffset,
    zone: ZoneId,
}

impl ZonedDateTime {
    /// Create from local fields in a zone
    ///
    /// The offset is resolved from the zone at the given local time.
    #[allow(clippy::too_many_arguments)]
    pub fn of(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nano: u32,
        zone: ZoneId,
    ) -> DateTimeResult<Self> {
        let local = CivilDateTime::of_nano(year, month, day, hour, minute, second, nano)?;
        Self::of_local(local, zone)
    }

    /// Resolve a local date-time in a zone
    ///
    /// Local times inside a daylight saving gap move forward by the length of
    /// the gap; inside an overlap the earlier offset is used.
    pub fn of_local(local: CivilDateTime, zone: ZoneId) -> DateTimeResult<Self> {
        let offset = zone.resolve_local(local);
        let instant = local.to_instant(offset)?;
        Ok(Self::of_instant(instant, zone))
    }

    /// The local representation of an instant in a zone
    pub fn of_instant(instant: Instant, zone: ZoneId) -> Self {
        let offset = zone.offset_at(instant);
        let local =
            instant.naive_utc() + Duration::seconds(i64::from(offset.total_seconds()));
        Self {
            date_time: CivilDateTime::from_naive(local),
            offset,
            zone,
            instant,
        }
    }

    /// The same instant seen from another zone
    pub fn with_zone_same_instant(&self, zone: ZoneId) -> Self {
        Self::of_instant(self.instant, zone)
    }

    /// The same local fields resolved in another zone
    pub fn with_zone_same_local(&self, zone: ZoneId) -> DateTimeResult<Self> {
        Self::of_local(self.date_time, zone)
    }

    pub fn to_instant(&self) -> Instant {
        self.instant
    }

    pub fn to_epoch_second(&self) -> i64 {
        self.instant.epoch_second()
    }

    pub fn to_offset_time(&self) -> OffsetTime {
        self.date_time.time().at_offset(self.offset)
    }

    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn zone(&self) -> ZoneId {
        self.zone
    }

    pub fn date_time(&self) -> CivilDateTime {
        self.date_time
    }

    pub fn date(&self) -> CivilDate {
        self.date_time.date()
    }

    pub fn time(&self) -> CivilTime {
        self.date_time.time()
    }

    pub fn year(&self) -> i32 {
        self.date_time.year()
    }

    pub fn month(&self) -> Month {
        self.date_time.month()
    }

    pub fn month_value(&self) -> u8 {
        self.date_time.month_value()
    }

    pub fn day_of_month(&self) -> u8 {
        self.date_time.day_of_month()
    }

    pub fn hour(&self) -> u8 {
        self.date_time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.date_time.minute()
    }

    pub fn second(&self) -> u8 {
        self.date_time.second()
    }

    pub fn nano(&self) -> u32 {
        self.date_time.nano()
    }
}

impl TryFrom<ZonedFields> for ZonedDateTime {
    type Error = DateTimeError;

    fn try_from(fields: ZonedFields) -> DateTimeResult<Self> {
        let instant = fields.date_time.to_instant(fields.offset)?;
        if fields.zone.offset_at(instant) != fields.offset {
            return Err(DateTimeError::InvalidOffset(format!(
                "{} is not the offset of {} at {}",
                fields.offset, fields.zone, fields.date_time
            )));
        }
        Ok(Self {
            date_time: fields.date_time,
            offset: fields.offset,
            zone: fields.zone,
            instant,
        })
    }
}

impl From<ZonedDateTime> for ZonedFields {
    fn from(zoned: ZonedDateTime) -> Self {
        Self {
            date_time: zoned.date_time,
            offset: zoned.offset,
            zone: zoned.zone,
        }
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.date_time, self.offset)?;
        if !matches!(self.zone, ZoneId::Offset(_)) {
            write!(f, "[{}]", self.zone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_zone(id: &str) -> ZoneId {
        ZoneId::of_offset("", ZoneOffset::of(id).unwrap()).unwrap()
    }

    #[test]
    fn test_same_instant_in_another_zone() {
        let oh_fives = ZonedDateTime::of(5, 5, 5, 5, 5, 5, 555, offset_zone("-0500")).unwrap();
        let plus_one = oh_fives.with_zone_same_instant(offset_zone("+0100"));

        assert_eq!(plus_one.offset().total_seconds(), 3_600);
        assert_eq!(plus_one.hour(), 11);
        assert_eq!(plus_one.minute(), 5);
        assert_eq!(plus_one.nano(), 555);
        assert_eq!(plus_one.to_instant(), oh_fives.to_instant());
        assert_eq!(plus_one.to_string(), "0005-05-05T11:05:05.000000555+01:00");
    }

    #[test]
    fn test_of_instant_projects_fields() {
        let instant = Instant::parse("1997-08-29T07:14:30Z").unwrap();
        let zoned = ZonedDateTime::of_instant(instant, ZoneId::of("GMT-5").unwrap());
        assert_eq!(zoned.hour(), 2);
        assert_eq!(zoned.minute(), 14);
        assert_eq!(zoned.day_of_month(), 29);
        assert_eq!(zoned.to_string(), "1997-08-29T02:14:30-05:00[GMT-05:00]");
    }

    #[test]
    fn test_projection_crosses_date_line() {
        let instant = Instant::parse("1997-08-29T20:00:00Z").unwrap();
        let zoned = instant.at_zone(ZoneId::of("+10:00").unwrap());
        assert_eq!(zoned.date(), CivilDate::of(1997, 8, 30).unwrap());
        assert_eq!(zoned.hour(), 6);
    }

    #[test]
    fn test_with_zone_same_local_keeps_fields() {
        let local = CivilDateTime::of(2005, 5, 5, 5, 5, 5).unwrap();
        let minus_five = local.at_zone(offset_zone("-0500")).unwrap();
        let plus_one = minus_five.with_zone_same_local(offset_zone("+0100")).unwrap();
        assert_eq!(plus_one.date_time(), local);
        assert_eq!(
            minus_five.to_epoch_second() - plus_one.to_epoch_second(),
            6 * 3_600
        );
    }

    #[test]
    fn test_gap_moves_forward() {
        let new_york = ZoneId::of("America/New_York").unwrap();
        let zoned = ZonedDateTime::of(2015, 3, 8, 2, 30, 0, 0, new_york).unwrap();
        assert_eq!(zoned.hour(), 3);
        assert_eq!(zoned.minute(), 30);
        assert_eq!(zoned.offset().total_seconds(), -4 * 3_600);
        assert_eq!(zoned.to_string(), "2015-03-08T03:30-04:00[America/New_York]");
    }

    #[test]
    fn test_overlap_uses_earlier_offset() {
        let new_york = ZoneId::of("America/New_York").unwrap();
        let zoned = ZonedDateTime::of(2015, 11, 1, 1, 30, 0, 0, new_york).unwrap();
        assert_eq!(zoned.offset().total_seconds(), -4 * 3_600);
        assert_eq!(zoned.to_instant().to_string(), "2015-11-01T05:30:00Z");
    }

    #[test]
    fn test_serde_checks_offset_against_zone() {
        let zoned = ZonedDateTime::of(2005, 5, 5, 5, 5, 5, 0, ZoneId::of("GMT-5").unwrap()).unwrap();
        let json = serde_json::to_string(&zoned).unwrap();
        assert_eq!(
            json,
            r#"{"date_time":{"date":"2005-05-05","time":"05:05:05"},"offset":"-05:00","zone":"GMT-05:00"}"#
        );
        assert_eq!(serde_json::from_str::<ZonedDateTime>(&json).unwrap(), zoned);

        let tampered = json.replace("\"offset\":\"-05:00\"", "\"offset\":\"+01:00\"");
        assert!(serde_json::from_str::<ZonedDateTime>(&tampered).is_err());
    }

    #[test]
    fn test_offset_time() {
        let zoned = ZonedDateTime::of(1997, 8, 29, 2, 14, 30, 0, offset_zone("-0500")).unwrap();
        assert_eq!(zoned.to_offset_time().to_string(), "02:14:30-05:00");
    }
}
