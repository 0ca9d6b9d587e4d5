//! Tracing/logging initialization.
//!
//! `RUST_LOG` drives the filter (default `info`). `AMENITIES_LOG_FORMAT`
//! selects `json` (default), `pretty` or `compact` output.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "AMENITIES_LOG_FORMAT";
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format `{other}` (expected json, pretty or compact)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// An unparseable format falls back to the default rather than failing startup.
    pub fn from_format_var(raw: Option<&str>) -> Self {
        let format = raw
            .map(LogFormat::from_str)
            .transpose()
            .unwrap_or_else(|err| {
                eprintln!("{err}; falling back to json logs");
                None
            })
            .unwrap_or_default();
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_default_filter(self, filter: impl Into<String>) -> Self {
        Self {
            default_filter: filter.into(),
            ..self
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn missing_or_bad_format_defaults_to_json() {
        assert_eq!(LogConfig::from_format_var(None).format, LogFormat::Json);
        assert_eq!(LogConfig::from_format_var(Some("yaml")).format, LogFormat::Json);
        assert_eq!(LogConfig::from_format_var(Some("pretty")).format, LogFormat::Pretty);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(LogConfig::default().with_default_filter("warn"));
        init(LogConfig::default());
    }
}
