//! Date/datetime parsing and memoized timezone conversion.
//!
//! Alpha Vantage reports timestamps as naive wall-clock strings plus a
//! separate timezone label (e.g. `US/Eastern`), so converting to UTC means
//! resolving that zone's offset rules for the given date. The conversion is
//! a pure function of its inputs and intraday responses repeat the same
//! (timestamp, zone) pairs heavily, so results are memoized.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::core::AvError;

/// Format of date-only timestamps (`2018-05-25`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format of intraday timestamps (`2018-05-25 16:00:00`).
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`AvError::Parse`] if the string does not match the format.
pub fn parse_date(s: &str) -> Result<NaiveDate, AvError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| AvError::Parse(format!("bad date {s:?}: {e}")))
}

/// Parse a naive datetime string with the given format (callers almost
/// always want [`DATETIME_FORMAT`]).
///
/// # Errors
///
/// Returns [`AvError::Parse`] if the string does not match the format.
pub fn parse_datetime(s: &str, format: &str) -> Result<NaiveDateTime, AvError> {
    NaiveDateTime::parse_from_str(s, format)
        .map_err(|e| AvError::Parse(format!("bad datetime {s:?}: {e}")))
}

/// Bounded memo for naive-local -> UTC conversions.
///
/// Shared across concurrent downloads through the client. Entries are
/// recomputable, so the map is simply reset when it reaches capacity
/// rather than tracking recency.
#[derive(Debug)]
pub struct TzCache {
    map: RwLock<HashMap<(NaiveDateTime, Tz), DateTime<Utc>>>,
    capacity: usize,
}

impl Default for TzCache {
    fn default() -> Self {
        Self::with_capacity(8192)
    }
}

impl TzCache {
    /// Create a cache that resets after `capacity` distinct entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Interpret `naive` as wall-clock time in the zone named by `timezone`
    /// and convert it to UTC, honoring that zone's historical offset rules.
    ///
    /// An ambiguous wall time (clocks rolled back) resolves to the earlier
    /// offset; a nonexistent one (clocks sprang forward) is an error.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Parse`] for an unrecognized timezone label or a
    /// wall time that does not exist in that zone.
    pub fn convert_to_utc(
        &self,
        naive: NaiveDateTime,
        timezone: &str,
    ) -> Result<DateTime<Utc>, AvError> {
        let tz = Tz::from_str(timezone)
            .map_err(|_| AvError::Parse(format!("unknown timezone {timezone:?}")))?;

        if let Some(hit) = self.map.read().expect("tz cache poisoned").get(&(naive, tz)) {
            return Ok(*hit);
        }

        let utc = naive
            .and_local_timezone(tz)
            .earliest()
            .ok_or_else(|| {
                AvError::Parse(format!("nonexistent local time {naive} in {timezone}"))
            })?
            .with_timezone(&Utc);

        let mut map = self.map.write().expect("tz cache poisoned");
        if map.len() >= self.capacity {
            map.clear();
        }
        map.insert((naive, tz), utc);

        Ok(utc)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.map.read().expect("tz cache poisoned").len()
    }
}
