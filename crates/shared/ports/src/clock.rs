use almanac_core::{
    CivilDate, CivilDateTime, CivilTime, Instant, OffsetTime, ZoneId, ZonedDateTime,
};

/// Port for time abstraction
///
/// This allows the system to use different time sources:
/// - Real system time for production
/// - Fixed time for deterministic tests
/// - Shifted time layered over another clock
pub trait Clock: Send + Sync {
    /// Get the current instant according to this clock
    fn instant(&self) -> Instant;

    /// Get the zone this clock reports local times in
    fn zone(&self) -> ZoneId;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

/// Values that can be derived "as of now" from a clock
///
/// Local values are the clock's instant projected into the clock's zone.
pub trait FromClock: Sized {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self;
}

impl FromClock for Instant {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.instant()
    }
}

impl FromClock for ZonedDateTime {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        ZonedDateTime::of_instant(clock.instant(), clock.zone())
    }
}

impl FromClock for CivilDateTime {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        ZonedDateTime::now(clock).date_time()
    }
}

impl FromClock for CivilDate {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        ZonedDateTime::now(clock).date()
    }
}

impl FromClock for CivilTime {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        ZonedDateTime::now(clock).time()
    }
}

impl FromClock for OffsetTime {
    fn now<C: Clock + ?Sized>(clock: &C) -> Self {
        ZonedDateTime::now(clock).to_offset_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::Month;

    struct StoppedClock {
        instant: Instant,
        zone: ZoneId,
    }

    impl Clock for StoppedClock {
        fn instant(&self) -> Instant {
            self.instant
        }

        fn zone(&self) -> ZoneId {
            self.zone
        }
    }

    fn judgement_day() -> StoppedClock {
        StoppedClock {
            instant: Instant::parse("1997-08-29T07:14:30Z").unwrap(),
            zone: ZoneId::of("GMT-5").unwrap(),
        }
    }

    #[test]
    fn test_local_values_use_clock_zone() {
        let clock = judgement_day();

        let date = CivilDate::now(&clock);
        assert_eq!(date.year(), 1997);
        assert_eq!(date.month(), Month::August);

        let time = CivilTime::now(&clock);
        assert_eq!((time.hour(), time.minute()), (2, 14));

        let date_time = CivilDateTime::now(&clock);
        assert_eq!(date_time.to_string(), "1997-08-29T02:14:30");

        let offset_time = OffsetTime::now(&clock);
        assert_eq!(offset_time.to_string(), "02:14:30-05:00");
    }

    #[test]
    fn test_works_through_trait_object() {
        let clock: Box<dyn Clock> = Box::new(judgement_day());
        assert_eq!(Instant::now(clock.as_ref()).epoch_second(), 872_838_870);
        assert_eq!(ZonedDateTime::now(clock.as_ref()).zone().id(), "GMT-05:00");
        assert_eq!(clock.name(), "Clock");
    }
}
