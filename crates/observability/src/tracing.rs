//! Tracing/logging initialization.
//!
//! - `RUST_LOG` selects the filter (EnvFilter syntax, default `info`).
//! - `PACKRAT_LOG_FORMAT` selects `json` (default) or `pretty` output.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "PACKRAT_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Initialize tracing for the process, reading the format from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let (format, format_error) = match std::env::var(LOG_FORMAT_ENV) {
        Ok(raw) => match raw.parse::<LogFormat>() {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::Json, Some(e)),
        },
        Err(_) => (LogFormat::default(), None),
    };

    init_with(format);

    if let Some(e) = format_error {
        ::tracing::warn!("{LOG_FORMAT_ENV}: {e}; falling back to json");
    }
}

/// Initialize tracing with an explicit format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
