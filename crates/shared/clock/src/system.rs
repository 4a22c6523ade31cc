use almanac_core::{Instant, ZoneId};
use almanac_ports::Clock;
use chrono::Utc;

/// Real system clock for production use
///
/// This simply returns the current wall-clock time.
/// Use this in production where you want real-time behavior; prefer a
/// `FixedClock` anywhere the result must be reproducible.
pub struct SystemClock {
    zone: ZoneId,
}

impl SystemClock {
    /// System clock reporting local times in `zone`
    pub fn new(zone: ZoneId) -> Self {
        Self { zone }
    }

    /// System clock reporting local times in UTC
    pub fn utc() -> Self {
        Self::new(ZoneId::UTC)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        // The wall clock is always well inside the supported range
        Instant::try_from(Utc::now()).unwrap_or(Instant::MAX)
    }

    fn zone(&self) -> ZoneId {
        self.zone
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
