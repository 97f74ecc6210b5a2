//! Timecast – coercion between the many ways of writing down an instant.
//!
//! An instant may arrive as epoch milliseconds, as text in one of several
//! formats, as a timestamp read from SQLite, as a `std::time::SystemTime` or as a
//! `chrono::DateTime<Utc>`. Every one of these implements [`coerce::Coercible`],
//! which offers the same five conversions on all of them:
//! * `to_epoch_millis` – signed milliseconds since 1970-01-01T00:00:00Z.
//! * `to_calendar_date` – a `SystemTime`.
//! * `to_datetime` – the canonical `DateTime<Utc>`.
//! * `to_iso_string` – ISO-8601 with milliseconds, e.g. `1998-04-25T00:00:00.000Z`.
//! * `to_sql_timestamp` – an [`instant::SqlTimestamp`].
//!
//! Every conversion returns an `Option`. `None` means "no instant": it is what
//! the [`instant::Absent`] value (or any `None`) converts to, and what text that
//! no formatter understands converts to. It is never an error, and it carries
//! through any further conversion.
//!
//! All canonical date-times are UTC. No other zone is ever used to coerce.
//!
//! ## Modules
//! * [`coerce`] – The [`coerce::Coercible`] trait and its implementations.
//! * [`format`] – Named formatters and the ordered [`format::FormatterRegistry`]
//!   behind [`format::from_string`].
//! * [`instant`] – The standalone constructors `from_long`, `from_date` and
//!   `from_sql_timestamp`, plus the `SqlTimestamp` and `Absent` values.
//! * [`source`] – [`source::Source`], for instants whose type is only known at runtime.
//! * [`persist`] – SQLite conversions for `SqlTimestamp` and `Source`.
//! * [`settings`] – Configured parse order.
//!
//! ## Quick Start
//! ```
//! use timecast::{Coercible, from_long, from_string};
//! let instant = from_long(893462400000).unwrap();
//! assert_eq!(from_string("1998-04-25T00:00:00.000Z"), Some(instant));
//! assert_eq!("1998-04-25".to_epoch_millis(), Some(893462400000));
//! assert_eq!(893462400000i64.to_iso_string().as_deref(), Some("1998-04-25T00:00:00.000Z"));
//! assert_eq!("not-a-date".to_datetime(), None);
//! ```
//!
//! ## Parse order
//! Text is tried against each formatter of a registry in turn and the first
//! success wins. Text several formatters accept is therefore read by whichever
//! comes first; the default order is listed in [`format`] and can be changed
//! with [`settings::Settings`].

pub mod coerce;
pub mod error;
pub mod format;
pub mod instant;
pub mod persist;
pub mod settings;
pub mod source;

pub use coerce::Coercible;
pub use error::{Result, TimecastError};
pub use format::{default_registry, from_string, Formatter, FormatterRegistry, Text};
pub use instant::{from_date, from_long, from_sql_timestamp, Absent, SqlTimestamp};
pub use source::Source;
