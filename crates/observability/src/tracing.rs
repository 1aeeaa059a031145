//! Tracing/logging initialization.
//!
//! Filtering follows `RUST_LOG`; `CREDGUARD_LOG_FORMAT` picks between JSON
//! lines (default) and human-readable output.

use tracing_subscriber::EnvFilter;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "CREDGUARD_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup(FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = lookup(FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Self { filter, format }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install a global subscriber for `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &TracingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(TracingConfig::from_lookup(lookup(&[])), TracingConfig::default());
    }

    #[test]
    fn reads_filter_and_format() {
        let config = TracingConfig::from_lookup(lookup(&[
            (FILTER_VAR, "credguard_auth=debug"),
            (FORMAT_VAR, "Pretty"),
        ]));
        assert_eq!(config.filter, "credguard_auth=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let config = TracingConfig::from_lookup(lookup(&[(FILTER_VAR, "  "), (FORMAT_VAR, "xml")]));
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn init_is_idempotent() {
        let config = TracingConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        };
        init_with(&config);
        init_with(&TracingConfig::default());
    }
}
