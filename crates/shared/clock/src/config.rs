//! Clock configuration
//!
//! A `ClockConfig` describes a fixed clock in plain strings, so scenarios can
//! be declared in JSON and shared between test suites.

use almanac_ports::{Clock, ClockError, ClockResult};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::FixedClock;

/// Reference instant used when no configuration is given
pub const DEFAULT_INSTANT: &str = "1997-08-29T07:14:30Z";

/// Reference zone used when no configuration is given
pub const DEFAULT_ZONE: &str = "GMT-5";

/// Fixed clock configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// RFC 3339 instant the clock is frozen at
    pub instant: String,
    /// Zone id local values are reported in
    pub zone: String,
    /// Optional clock name for logs
    pub name: Option<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            instant: DEFAULT_INSTANT.to_string(),
            zone: DEFAULT_ZONE.to_string(),
            name: None,
        }
    }
}

impl ClockConfig {
    /// Load configuration from a JSON document
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> ClockResult<Self> {
        serde_json::from_str(json).map_err(|e| ClockError::Config(e.to_string()))
    }

    /// Build the configured clock
    pub fn build(&self) -> ClockResult<FixedClock> {
        let clock = FixedClock::parse(&self.instant, &self.zone)?;
        let clock = match &self.name {
            Some(name) => clock.with_name(name.as_str()),
            None => clock,
        };
        debug!(
            "Built clock '{}' from config: instant={}, zone={}",
            clock.name(),
            self.instant,
            self.zone
        );
        Ok(clock)
    }
}
