use chrono::{Duration, LocalResult, Offset, TimeZone};
use chrono_tz::Tz;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ZoneOffset;
use crate::civil::CivilDateTime;
use crate::error::{DateTimeError, DateTimeResult};
use crate::instant::Instant;

/// Prefix of an offset-based zone such as `GMT+01:00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetPrefix {
    Utc,
    Gmt,
    Ut,
}

impl OffsetPrefix {
    fn parse(prefix: &str) -> Option<Self> {
        match prefix {
            "UTC" => Some(OffsetPrefix::Utc),
            "GMT" => Some(OffsetPrefix::Gmt),
            "UT" => Some(OffsetPrefix::Ut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OffsetPrefix::Utc => "UTC",
            OffsetPrefix::Gmt => "GMT",
            OffsetPrefix::Ut => "UT",
        }
    }
}

/// A time zone: a fixed offset, or a named region with transition rules
///
/// Region rules come from the IANA database bundled by `chrono-tz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneId {
    /// A bare offset such as `-05:00` or `Z`
    Offset(ZoneOffset),
    /// An offset behind a `UTC`, `GMT` or `UT` prefix, such as `GMT+01:00`
    Prefixed {
        prefix: OffsetPrefix,
        offset: ZoneOffset,
    },
    /// A geographic region such as `America/New_York`
    Region(Tz),
}

impl ZoneId {
    pub const UTC: ZoneId = ZoneId::Offset(ZoneOffset::UTC);

    /// Parse a zone id
    ///
    /// `Z` and ids starting with a sign are bare offsets. `UTC`, `GMT` and
    /// `UT`, optionally followed by an offset (`GMT+1`, `UTC-05:00`), are
    /// prefixed offsets. Anything else is looked up as a region name.
    pub fn of(id: &str) -> DateTimeResult<Self> {
        if id == "Z" || id.starts_with('+') || id.starts_with('-') {
            return ZoneOffset::of(id).map(ZoneId::Offset);
        }
        for prefix in [OffsetPrefix::Utc, OffsetPrefix::Gmt, OffsetPrefix::Ut] {
            if let Some(rest) = id.strip_prefix(prefix.as_str()) {
                if rest.is_empty() {
                    return Ok(ZoneId::Prefixed {
                        prefix,
                        offset: ZoneOffset::UTC,
                    });
                }
                if rest.starts_with('+') || rest.starts_with('-') {
                    let offset = ZoneOffset::of(rest)?;
                    return Ok(ZoneId::Prefixed { prefix, offset });
                }
            }
        }
        Self::region(id)
    }

    /// Build an offset-based zone behind a prefix
    ///
    /// An empty prefix yields the bare offset. Otherwise the prefix must be
    /// `GMT`, `UTC` or `UT`.
    pub fn of_offset(prefix: &str, offset: ZoneOffset) -> DateTimeResult<Self> {
        if prefix.is_empty() {
            return Ok(ZoneId::Offset(offset));
        }
        OffsetPrefix::parse(prefix)
            .map(|prefix| ZoneId::Prefixed { prefix, offset })
            .ok_or_else(|| {
                DateTimeError::InvalidZoneId(format!(
                    "prefix {prefix:?} should be GMT, UTC or UT"
                ))
            })
    }

    fn region(id: &str) -> DateTimeResult<Self> {
        if !is_region_syntax(id) {
            return Err(DateTimeError::InvalidZoneId(format!(
                "{id:?} is not a valid region id"
            )));
        }
        id.parse::<Tz>()
            .map(ZoneId::Region)
            .map_err(|_| DateTimeError::UnknownZone(id.to_string()))
    }

    /// The canonical id, as accepted by `ZoneId::of`
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// True if the offset never changes
    pub fn is_fixed(&self) -> bool {
        !matches!(self, ZoneId::Region(_))
    }

    /// The offset in effect at an instant
    pub fn offset_at(&self, instant: Instant) -> ZoneOffset {
        match self {
            ZoneId::Offset(offset) | ZoneId::Prefixed { offset, .. } => *offset,
            ZoneId::Region(tz) => {
                let fixed = tz.offset_from_utc_datetime(&instant.naive_utc()).fix();
                trace!("{} at {} has offset {}", tz.name(), instant, fixed);
                ZoneOffset::from_database(fixed.local_minus_utc())
            }
        }
    }

    /// The offset to interpret a local date-time with
    ///
    /// In an overlap the earlier offset wins. In a gap the offset from before
    /// the transition is returned, which moves the local time forward by the
    /// length of the gap once it is projected back into this zone.
    pub fn resolve_local(&self, local: CivilDateTime) -> ZoneOffset {
        let tz = match self {
            ZoneId::Offset(offset) | ZoneId::Prefixed { offset, .. } => return *offset,
            ZoneId::Region(tz) => tz,
        };
        let naive = local.naive();
        let fixed = match tz.offset_from_local_datetime(&naive) {
            LocalResult::Single(offset) => offset.fix(),
            LocalResult::Ambiguous(earlier, later) => {
                debug!(
                    "{} is ambiguous in {}: choosing {} over {}",
                    local,
                    tz.name(),
                    earlier.fix(),
                    later.fix()
                );
                earlier.fix()
            }
            LocalResult::None => {
                let before = tz.offset_from_utc_datetime(&(naive - Duration::days(1))).fix();
                debug!(
                    "{} falls in a gap in {}: using offset {} from before the transition",
                    local,
                    tz.name(),
                    before
                );
                before
            }
        };
        ZoneOffset::from_database(fixed.local_minus_utc())
    }
}

/// Region ids start with a letter and use letters, digits and `~/._+-`
fn is_region_syntax(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    id.len() >= 2
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '~' | '/' | '.' | '_' | '+' | '-'))
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Offset(offset) => write!(f, "{offset}"),
            ZoneId::Prefixed { prefix, offset } if *offset == ZoneOffset::UTC => {
                f.write_str(prefix.as_str())
            }
            ZoneId::Prefixed { prefix, offset } => write!(f, "{}{}", prefix.as_str(), offset),
            ZoneId::Region(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for ZoneId {
    type Err = DateTimeError;

    fn from_str(s: &str) -> DateTimeResult<Self> {
        Self::of(s)
    }
}

impl TryFrom<String> for ZoneId {
    type Error = DateTimeError;

    fn try_from(id: String) -> DateTimeResult<Self> {
        Self::of(&id)
    }
}

impl From<ZoneId> for String {
    fn from(zone: ZoneId) -> Self {
        zone.to_string()
    }
}

impl From<ZoneOffset> for ZoneId {
    fn from(offset: ZoneOffset) -> Self {
        ZoneId::Offset(offset)
    }
}
