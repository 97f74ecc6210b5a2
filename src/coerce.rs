// used for the canonical date-time and the naive values that can be read as UTC
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
// used for the platform-native calendar value
use std::time::SystemTime;

use crate::format::{from_string, iso_string, Text};
use crate::instant::{
    calendar_date_at, from_date, from_long, from_sql_timestamp, system_time_millis, Absent,
    SqlTimestamp,
};

/// A value that denotes an instant, or explicitly denotes none.
///
/// Only `to_datetime` has to be implemented; the other conversions are defined
/// through it unless a type can answer them directly. Every conversion returns
/// `None` instead of failing, so absence travels through chained calls.
pub trait Coercible {
    // needs to be implemented downstream
    fn to_datetime(&self) -> Option<DateTime<Utc>>;
    // pre-made implementations
    fn to_epoch_millis(&self) -> Option<i64> {
        self.to_datetime().map(|instant| instant.timestamp_millis())
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        calendar_date_at(self.to_epoch_millis()?)
    }
    /// ISO-8601 with milliseconds in UTC, e.g. `1998-04-25T00:00:00.000Z`.
    fn to_iso_string(&self) -> Option<String> {
        self.to_datetime().map(|instant| iso_string(&instant))
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        self.to_epoch_millis().map(SqlTimestamp::new)
    }
    /// Whole seconds since the epoch, rounded towards the past.
    fn to_epoch_secs(&self) -> Option<i64> {
        self.to_epoch_millis().map(|millis| millis.div_euclid(1000))
    }
}

// ------------- Absence --------------
impl Coercible for Absent {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        None
    }
}
impl<T: Coercible> Coercible for Option<T> {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.as_ref()?.to_datetime()
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        self.as_ref()?.to_epoch_millis()
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        self.as_ref()?.to_calendar_date()
    }
    fn to_iso_string(&self) -> Option<String> {
        self.as_ref()?.to_iso_string()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        self.as_ref()?.to_sql_timestamp()
    }
}
impl<T: Coercible + ?Sized> Coercible for &T {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        (**self).to_datetime()
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        (**self).to_epoch_millis()
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        (**self).to_calendar_date()
    }
    fn to_iso_string(&self) -> Option<String> {
        (**self).to_iso_string()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        (**self).to_sql_timestamp()
    }
}

// ------------- Epoch values --------------
impl Coercible for i64 {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        from_long(*self)
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        Some(*self)
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        calendar_date_at(*self)
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        Some(SqlTimestamp::new(*self))
    }
}
impl Coercible for i32 {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        i64::from(*self).to_datetime()
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        i64::from(*self).to_calendar_date()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        i64::from(*self).to_sql_timestamp()
    }
}

// ------------- Canonical date-time --------------
impl Coercible for DateTime<Utc> {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        Some(self.timestamp_millis())
    }
}

// ------------- Calendar values --------------
impl Coercible for SystemTime {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        from_date(*self)
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        system_time_millis(self)
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        self.to_datetime()?.to_calendar_date()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        self.to_datetime()?.to_sql_timestamp()
    }
}
// wall clock without a zone is read as UTC
impl Coercible for NaiveDateTime {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Some(self.and_utc())
    }
}
impl Coercible for NaiveDate {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Some(self.and_time(NaiveTime::MIN).and_utc())
    }
}

// ------------- Wrapped timestamps --------------
impl Coercible for SqlTimestamp {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        from_sql_timestamp(*self)
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        Some(self.millis())
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        self.to_datetime()?.to_calendar_date()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        Some(*self)
    }
}

// ------------- Text --------------
// Everything goes through to_datetime, so text no formatter accepts is absent throughout.
impl Coercible for str {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        from_string(self)
    }
}
impl Coercible for String {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.as_str().to_datetime()
    }
}
impl Coercible for Text<'_> {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.formats.parse(self.text)
    }
}
