// used for persistence
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::coerce::Coercible;
use crate::error::TimecastError;
use crate::instant::SqlTimestamp;
use crate::source::Source;

// Timestamps are stored as INTEGER epoch milliseconds. TEXT columns are also
// accepted when reading, as long as one of the default formatters can parse them.
impl ToSql for SqlTimestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.millis()))
    }
}
impl FromSql for SqlTimestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(millis) => Ok(SqlTimestamp::new(millis)),
            ValueRef::Text(_) => {
                let text = value.as_str()?;
                text.to_sql_timestamp().ok_or_else(|| {
                    FromSqlError::Other(Box::new(TimecastError::Parse {
                        format: String::from("any"),
                        message: format!("no formatter accepts '{}'", text),
                    }))
                })
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

impl TryFrom<ValueRef<'_>> for Source {
    type Error = TimecastError;
    fn try_from(value: ValueRef<'_>) -> Result<Source, TimecastError> {
        match value {
            ValueRef::Null => Ok(Source::Absent),
            ValueRef::Integer(millis) => Ok(Source::Epoch(millis)),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(Source::from)
                .map_err(|_| TimecastError::UnsupportedType { type_name: "non-UTF-8 TEXT" }),
            ValueRef::Real(_) => Err(TimecastError::UnsupportedType { type_name: "REAL" }),
            ValueRef::Blob(_) => Err(TimecastError::UnsupportedType { type_name: "BLOB" }),
        }
    }
}
impl FromSql for Source {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Source::try_from(value).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
