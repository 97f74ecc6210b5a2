//! Prints every coercion of the given values as one JSON object per line.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, warn};

use timecast::{Coercible, FormatterRegistry, Source, settings::Settings};

#[derive(Debug, Parser)]
#[command(name = "timecast", about = "Coerce instants between representations")]
struct Args {
    /// Settings file (TOML) choosing the parse order.
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    /// Values to coerce: JSON literals (`893462400000`, `null`, `"19980425"`) or raw text.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
    epoch_millis: Option<i64>,
    iso: Option<String>,
    sql_timestamp: Option<i64>,
}

impl<'a> Report<'a> {
    fn of<C: Coercible + ?Sized>(input: &'a str, format: Option<&'a str>, value: &C) -> Self {
        Self {
            input,
            format,
            epoch_millis: value.to_epoch_millis(),
            iso: value.to_iso_string(),
            sql_timestamp: value.to_sql_timestamp().map(|timestamp| timestamp.millis()),
        }
    }
    fn from_source(input: &'a str, source: &'a Source, registry: &'a FormatterRegistry) -> Self {
        match source {
            Source::Text(text) => {
                let text = registry.text(text);
                Self::of(input, text.format_name(), &text)
            }
            other => Self::of(input, None, other),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let registry = match Settings::load(args.config.as_deref()).and_then(|s| s.registry()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("timecast: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?registry, "ready");

    let mut status = ExitCode::SUCCESS;
    for input in &args.values {
        let source = match Source::from_literal(input) {
            Ok(source) => source,
            Err(e) => {
                warn!(%input, error = %e, "skipped");
                eprintln!("timecast: {input}: {e}");
                status = ExitCode::FAILURE;
                continue;
            }
        };
        let report = Report::from_source(input, &source, &registry);
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("timecast: {input}: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
