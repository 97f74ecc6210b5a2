//! Configuration of the parse order.
//!
//! Settings come from an optional TOML file and from `TIMECAST_` environment
//! variables, the environment taking precedence:
//!
//! ```toml
//! formats = ["date-time", "mysql", "date"]
//! ```
//!
//! or `TIMECAST_FORMATS=date-time,mysql,date`. Without either, the built-in order
//! documented in [`crate::format`] is used.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::format::{FormatterRegistry, BUILTIN};
use crate::Formatter;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

fn default_formats() -> Vec<String> {
    BUILTIN.iter().map(|f| f.name().to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self { formats: default_formats() }
    }
}

impl Settings {
    /// Loads settings from `path` (if given) and the environment.
    pub fn load(path: Option<&str>) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }
        builder = builder.add_source(environment());
        Ok(builder.build()?.try_deserialize()?)
    }
    /// Reads settings from TOML text alone, ignoring the environment.
    pub fn from_toml(text: &str) -> Result<Settings> {
        Ok(Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }
    /// The registry trying the configured formats in the configured order.
    pub fn registry(&self) -> Result<FormatterRegistry> {
        let registry = FormatterRegistry::with_order(self.formats.as_slice())?;
        debug!(formats = ?registry.names(), "formatter registry assembled");
        Ok(registry)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TIMECAST")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("formats")
}
