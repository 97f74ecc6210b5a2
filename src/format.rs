//! Named formatters and the ordered registry used to parse free-form text.
//!
//! Parsing is best effort: the registry tries its formatters in order and the
//! first one that accepts the text wins. For text that more than one formatter
//! accepts, the order therefore decides the result. The default order is:
//!
//! | # | name | example |
//! |---|------|---------|
//! | 1 | `date-time` | `1998-04-25T00:00:00.000Z` |
//! | 2 | `date-time-no-ms` | `1998-04-25T00:00:00Z` |
//! | 3 | `basic-date-time` | `19980425T000000.000Z` |
//! | 4 | `basic-date-time-no-ms` | `19980425T000000Z` |
//! | 5 | `date-hour-minute-second-ms` | `1998-04-25T00:00:00.000` |
//! | 6 | `date-hour-minute-second` | `1998-04-25T00:00:00` |
//! | 7 | `date-hour-minute` | `1998-04-25T00:00` |
//! | 8 | `mysql` | `1998-04-25 00:00:00` |
//! | 9 | `rfc822` | `Sat, 25 Apr 1998 00:00:00 +0000` |
//! | 10 | `date` | `1998-04-25` |
//! | 11 | `basic-date` | `19980425` |
//!
//! Formats carrying an offset come before wall-clock formats, and longer forms
//! before shorter ones. Wall-clock and date-only text is read as UTC.
//!
//! Years outside 0000-9999 are written with a sign (`+10000-01-01T00:00:00.000Z`,
//! `-0002-12-17T14:13:20.000Z`) and `date-time` reads that form back, so every
//! ISO string this crate produces parses again. `rfc822` cannot express such
//! years and renders them as `date-time-no-ms` would.
//!
//! The order can be replaced through [`FormatterRegistry::with_order`], which is
//! what [`crate::settings::Settings`] does.

// used for the canonical date-time
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use tracing::trace;

use std::fmt;

use crate::error::{Result, TimecastError};

pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;
    /// Reads `text` as an instant. An `Err` only means this formatter does not match.
    fn parse(&self, text: &str) -> Result<DateTime<Utc>>;
    fn format(&self, instant: &DateTime<Utc>) -> String;
}

// ------------- Built-in formatters --------------

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Layout {
    /// RFC 3339, any offset, converted to UTC. Rendered with the given precision and `Z`.
    Rfc3339(SecondsFormat),
    Rfc2822,
    /// A wall-clock pattern; the parsed value is read as UTC.
    Naive(&'static str),
    /// A date-only pattern; the parsed value is midnight UTC.
    Date(&'static str),
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct NamedFormatter {
    name: &'static str,
    layout: Layout,
}

impl NamedFormatter {
    pub const fn new(name: &'static str, layout: Layout) -> Self {
        Self { name, layout }
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    fn rejected(&self, e: chrono::ParseError) -> TimecastError {
        TimecastError::Parse {
            format: self.name.to_string(),
            message: e.to_string(),
        }
    }
}

impl Formatter for NamedFormatter {
    fn name(&self) -> &str {
        self.name
    }
    fn parse(&self, text: &str) -> Result<DateTime<Utc>> {
        match self.layout {
            Layout::Rfc3339(_) => DateTime::parse_from_rfc3339(text)
                .map(|instant| instant.with_timezone(&Utc))
                .or_else(|e| match text.starts_with(['+', '-']) {
                    true => parse_expanded_year(text),
                    false => Err(e),
                })
                .map_err(|e| self.rejected(e)),
            Layout::Rfc2822 => DateTime::parse_from_rfc2822(text)
                .map(|instant| instant.with_timezone(&Utc))
                .map_err(|e| self.rejected(e)),
            Layout::Naive(pattern) => NaiveDateTime::parse_from_str(text, pattern)
                .map(|wall_clock| wall_clock.and_utc())
                .map_err(|e| self.rejected(e)),
            Layout::Date(pattern) => NaiveDate::parse_from_str(text, pattern)
                .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
                .map_err(|e| self.rejected(e)),
        }
    }
    fn format(&self, instant: &DateTime<Utc>) -> String {
        match self.layout {
            Layout::Rfc3339(precision) => instant.to_rfc3339_opts(precision, true),
            // RFC 2822 has no way to write years outside 0000-9999
            Layout::Rfc2822 if (0..=9999).contains(&instant.year()) => instant.to_rfc2822(),
            Layout::Rfc2822 => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            Layout::Naive(pattern) | Layout::Date(pattern) => instant.format(pattern).to_string(),
        }
    }
}

// Years outside 0000-9999 are written with an explicit sign and as many
// digits as needed (`+10000-01-01T00:00:00.000Z`), which RFC 3339 parsing refuses.
fn parse_expanded_year(text: &str) -> chrono::ParseResult<DateTime<Utc>> {
    match text.strip_suffix('Z') {
        Some(wall_clock) => NaiveDateTime::parse_from_str(wall_clock, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|wall_clock| wall_clock.and_utc()),
        None => DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%:z")
            .map(|instant| instant.with_timezone(&Utc)),
    }
}

/// The ISO-8601 combined date-time format used by `to_iso_string`.
pub const ISO_DATE_TIME: NamedFormatter =
    NamedFormatter::new("date-time", Layout::Rfc3339(SecondsFormat::Millis));

pub const BUILTIN: [NamedFormatter; 11] = [
    ISO_DATE_TIME,
    NamedFormatter::new("date-time-no-ms", Layout::Naive("%Y-%m-%dT%H:%M:%SZ")),
    NamedFormatter::new("basic-date-time", Layout::Naive("%Y%m%dT%H%M%S%.3fZ")),
    NamedFormatter::new("basic-date-time-no-ms", Layout::Naive("%Y%m%dT%H%M%SZ")),
    NamedFormatter::new("date-hour-minute-second-ms", Layout::Naive("%Y-%m-%dT%H:%M:%S%.3f")),
    NamedFormatter::new("date-hour-minute-second", Layout::Naive("%Y-%m-%dT%H:%M:%S")),
    NamedFormatter::new("date-hour-minute", Layout::Naive("%Y-%m-%dT%H:%M")),
    NamedFormatter::new("mysql", Layout::Naive("%Y-%m-%d %H:%M:%S")),
    NamedFormatter::new("rfc822", Layout::Rfc2822),
    NamedFormatter::new("date", Layout::Date("%Y-%m-%d")),
    NamedFormatter::new("basic-date", Layout::Date("%Y%m%d")),
];

pub fn builtin(name: &str) -> Option<NamedFormatter> {
    BUILTIN.iter().find(|f| f.name == name).copied()
}

pub fn iso_string(instant: &DateTime<Utc>) -> String {
    ISO_DATE_TIME.format(instant)
}

// ------------- Registry --------------

pub struct FormatterRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn empty() -> Self {
        Self { formatters: Vec::new() }
    }
    /// A registry holding the named built-in formatters, tried in the given order.
    pub fn with_order<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut registry = Self::empty();
        for name in names {
            let name: &str = name.as_ref();
            let formatter = builtin(name).ok_or_else(|| TimecastError::UnknownFormat {
                name: name.to_string(),
            })?;
            registry.push(Box::new(formatter))?;
        }
        Ok(registry)
    }
    /// Appends a formatter, tried after every formatter already registered.
    pub fn push(&mut self, formatter: Box<dyn Formatter>) -> Result<()> {
        if self.get(formatter.name()).is_some() {
            return Err(TimecastError::DuplicateFormat {
                name: formatter.name().to_string(),
            });
        }
        self.formatters.push(formatter);
        Ok(())
    }
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        for formatter in &self.formatters {
            if formatter.name() == name {
                return Some(formatter.as_ref());
            }
        }
        None
    }
    pub fn names(&self) -> Vec<&str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
    pub fn len(&self) -> usize {
        self.formatters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
    /// The first formatter, in registry order, that accepts `text`, along with its parse.
    pub fn matching(&self, text: &str) -> Option<(&str, DateTime<Utc>)> {
        self.formatters.iter().find_map(|formatter| {
            let instant = formatter.parse(text).ok()?;
            trace!(formatter = formatter.name(), "text matched");
            Some((formatter.name(), instant))
        })
    }
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        self.matching(text).map(|(_, instant)| instant)
    }
    /// Text that coerces through this registry instead of the default one.
    pub fn text<'a>(&'a self, text: &'a str) -> Text<'a> {
        Text { text, formats: self }
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self {
            formatters: BUILTIN
                .iter()
                .map(|f| Box::new(*f) as Box<dyn Formatter>)
                .collect(),
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

lazy_static! {
    static ref DEFAULT_FORMATTERS: FormatterRegistry = FormatterRegistry::default();
}

pub fn default_registry() -> &'static FormatterRegistry {
    &DEFAULT_FORMATTERS
}

/// Parses `text` with the default registry. Text no formatter accepts yields `None`.
pub fn from_string(text: &str) -> Option<DateTime<Utc>> {
    default_registry().parse(text)
}

/// Text paired with the registry that should read it.
#[derive(Clone, Copy, Debug)]
pub struct Text<'a> {
    pub(crate) text: &'a str,
    pub(crate) formats: &'a FormatterRegistry,
}

impl<'a> Text<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }
    pub fn format_name(&self) -> Option<&'a str> {
        let formats = self.formats;
        formats.matching(self.text).map(|(name, _)| name)
    }
}
