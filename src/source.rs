//! Instants whose representation is only known at runtime.
//!
//! [`Source`] closes over every supported representation so values read from
//! JSON or SQLite can be coerced like any statically typed one. Values of a kind
//! no representation covers are rejected with
//! [`TimecastError::UnsupportedType`] when the `Source` is built, never later.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::time::SystemTime;

use crate::coerce::Coercible;
use crate::error::{Result, TimecastError};
use crate::instant::{Absent, SqlTimestamp};

#[derive(Eq, PartialEq, Clone, Debug)]
pub enum Source {
    Absent,
    Epoch(i64),
    Text(String),
    Timestamp(SqlTimestamp),
    DateTime(DateTime<Utc>),
    Calendar(SystemTime),
}

impl Source {
    /// Reads a command line style literal: JSON when it is valid JSON, otherwise raw text.
    /// Digits alone are an epoch value, so a basic date has to be quoted (`"19980425"`).
    pub fn from_literal(literal: &str) -> Result<Source> {
        match serde_json::from_str::<Value>(literal) {
            Ok(value) => Source::try_from(&value),
            Err(_) => Ok(Source::Text(literal.to_string())),
        }
    }
    pub fn is_absent(&self) -> bool {
        matches!(self, Source::Absent)
    }
    fn value(&self) -> &dyn Coercible {
        match self {
            Source::Absent => &Absent,
            Source::Epoch(millis) => millis,
            Source::Text(text) => text,
            Source::Timestamp(timestamp) => timestamp,
            Source::DateTime(instant) => instant,
            Source::Calendar(date) => date,
        }
    }
}

impl Coercible for Source {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.value().to_datetime()
    }
    fn to_epoch_millis(&self) -> Option<i64> {
        self.value().to_epoch_millis()
    }
    fn to_calendar_date(&self) -> Option<SystemTime> {
        self.value().to_calendar_date()
    }
    fn to_iso_string(&self) -> Option<String> {
        self.value().to_iso_string()
    }
    fn to_sql_timestamp(&self) -> Option<SqlTimestamp> {
        self.value().to_sql_timestamp()
    }
}

impl TryFrom<&Value> for Source {
    type Error = TimecastError;
    fn try_from(value: &Value) -> Result<Source> {
        match value {
            Value::Null => Ok(Source::Absent),
            Value::String(text) => Ok(Source::Text(text.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(millis) => Ok(Source::Epoch(millis)),
                None if number.is_u64() => Err(TimecastError::UnsupportedType {
                    type_name: "integer beyond i64",
                }),
                None => Err(TimecastError::UnsupportedType {
                    type_name: "non-integer number",
                }),
            },
            Value::Bool(_) => Err(TimecastError::UnsupportedType { type_name: "boolean" }),
            Value::Array(_) => Err(TimecastError::UnsupportedType { type_name: "array" }),
            Value::Object(_) => Err(TimecastError::UnsupportedType { type_name: "object" }),
        }
    }
}

impl From<Absent> for Source {
    fn from(_: Absent) -> Self {
        Source::Absent
    }
}
impl From<i64> for Source {
    fn from(millis: i64) -> Self {
        Source::Epoch(millis)
    }
}
impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}
impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}
impl From<SqlTimestamp> for Source {
    fn from(timestamp: SqlTimestamp) -> Self {
        Source::Timestamp(timestamp)
    }
}
impl From<DateTime<Utc>> for Source {
    fn from(instant: DateTime<Utc>) -> Self {
        Source::DateTime(instant)
    }
}
impl From<SystemTime> for Source {
    fn from(date: SystemTime) -> Self {
        Source::Calendar(date)
    }
}
impl<T: Into<Source>> From<Option<T>> for Source {
    fn from(value: Option<T>) -> Self {
        value.map_or(Source::Absent, Into::into)
    }
}
