use almanac_core::{Instant, ZoneId};
use almanac_ports::Clock;
use chrono::Duration;
use std::sync::Arc;

/// A clock running a fixed duration ahead of (or behind) another clock
///
/// Useful for testing code that must behave correctly "tomorrow" or "an
/// hour ago" while keeping a single underlying time source. The result is
/// clamped to `Instant::MIN..=Instant::MAX`.
pub struct OffsetClock {
    base: Arc<dyn Clock>,
    /// Added to every reading of `base`
    offset: Duration,
    name: String,
}

impl OffsetClock {
    /// Shift every reading of `base` by `offset`
    ///
    /// A negative offset reads the past. The zone is always the base clock's.
    pub fn new(base: Arc<dyn Clock>, offset: Duration, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            base,
            offset,
            name: name.into(),
        })
    }

    /// Same readings as `base`, under another name
    pub fn new_synchronized(base: Arc<dyn Clock>, name: impl Into<String>) -> Arc<Self> {
        Self::new(base, Duration::zero(), name)
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn base_clock(&self) -> &Arc<dyn Clock> {
        &self.base
    }
}

impl Clock for OffsetClock {
    fn instant(&self) -> Instant {
        self.base.instant().saturating_add(self.offset)
    }

    fn zone(&self) -> ZoneId {
        self.base.zone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
