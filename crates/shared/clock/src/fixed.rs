use almanac_core::{Instant, ZoneId};
use almanac_ports::{Clock, ClockResult};
use log::debug;

/// A clock frozen at one instant
///
/// Every query returns the same instant and zone, no matter how often or
/// when it is asked. Use it wherever "now" has to be deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    instant: Instant,
    zone: ZoneId,
    name: String,
}

impl FixedClock {
    /// Create a clock fixed at `instant`, reporting local times in `zone`
    pub fn new(instant: Instant, zone: ZoneId) -> Self {
        Self {
            instant,
            zone,
            name: "FixedClock".to_string(),
        }
    }

    /// Create a clock from an RFC 3339 instant and a zone id
    ///
    /// # Arguments
    /// * `instant` - e.g. `1997-08-29T07:14:30Z`
    /// * `zone` - anything `ZoneId::of` accepts, e.g. `GMT-5` or `Europe/Paris`
    pub fn parse(instant: &str, zone: &str) -> ClockResult<Self> {
        let clock = Self::new(Instant::parse(instant)?, ZoneId::of(zone)?);
        debug!("Fixed clock at {} in {}", clock.instant, clock.zone);
        Ok(clock)
    }

    /// Rename this clock
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The same instant seen from another zone
    pub fn with_zone(&self, zone: ZoneId) -> Self {
        Self {
            zone,
            ..self.clone()
        }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }

    fn zone(&self) -> ZoneId {
        self.zone
    }

    fn name(&self) -> &str {
        &self.name
    }
}
