use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimecastError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unknown format: {name}")]
    UnknownFormat { name: String },
    #[error("Format listed more than once: {name}")]
    DuplicateFormat { name: String },
    #[error("Parse error ({format}): {message}")]
    Parse { format: String, message: String },
    #[error("No coercion implemented for type {type_name}")]
    UnsupportedType { type_name: &'static str },
}

pub type Result<T> = std::result::Result<T, TimecastError>;

// Helper conversions
impl From<config::ConfigError> for TimecastError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
