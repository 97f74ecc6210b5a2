//! Construction of canonical instants and the plain value types that denote one.
//!
//! The canonical date-time is `chrono::DateTime<Utc>`. Nothing in this crate ever
//! builds one in any other zone. Epoch values are signed milliseconds since
//! 1970-01-01T00:00:00Z.

// used for the canonical date-time
use chrono::{DateTime, Utc};
// used for the platform-native calendar value
use std::time::{Duration, SystemTime, UNIX_EPOCH};
// used to print out readable forms of a timestamp
use std::fmt;

use serde::{Deserialize, Serialize};

/// Builds the canonical date-time at `millis` since the epoch.
///
/// Returns `None` when the value lies outside what `DateTime<Utc>` can hold
/// (roughly ±262 000 years), so the conversion stays total over `i64`.
pub fn from_long(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Builds the canonical date-time from a calendar value, through its native milliseconds.
pub fn from_date(date: SystemTime) -> Option<DateTime<Utc>> {
    from_long(system_time_millis(&date)?)
}

pub fn from_sql_timestamp(timestamp: SqlTimestamp) -> Option<DateTime<Utc>> {
    from_long(timestamp.millis())
}

// ------------- Calendar values --------------

// Partial milliseconds before the epoch round towards the past, so that
// the result agrees with DateTime::timestamp_millis.
pub(crate) fn system_time_millis(time: &SystemTime) -> Option<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).ok(),
        Err(before) => {
            let before = before.duration();
            let whole = i64::try_from(before.as_millis()).ok()?;
            let partial = i64::from(before.subsec_nanos() % 1_000_000 != 0);
            whole.checked_neg()?.checked_sub(partial)
        }
    }
}

pub(crate) fn calendar_date_at(millis: i64) -> Option<SystemTime> {
    let magnitude = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH.checked_add(magnitude)
    } else {
        UNIX_EPOCH.checked_sub(magnitude)
    }
}

// ------------- SqlTimestamp --------------

/// A persistence-oriented instant: epoch milliseconds, stored as an SQLite `INTEGER`.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqlTimestamp {
    millis: i64,
}

impl SqlTimestamp {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
    pub fn millis(&self) -> i64 {
        self.millis
    }
}
impl From<i64> for SqlTimestamp {
    fn from(millis: i64) -> Self {
        Self::new(millis)
    }
}
impl From<SqlTimestamp> for i64 {
    fn from(timestamp: SqlTimestamp) -> i64 {
        timestamp.millis
    }
}
impl fmt::Display for SqlTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match from_long(self.millis) {
            Some(instant) => write!(f, "{}", crate::format::iso_string(&instant)),
            None => write!(f, "{}ms", self.millis),
        }
    }
}

// ------------- Absent --------------

/// The explicit "no instant" value. Every conversion of it yields `None`.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Default)]
pub struct Absent;
