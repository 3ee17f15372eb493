//! Tracing configuration.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the output format.
pub const LOG_FORMAT_ENV: &str = "WALLETBOOK_LOG_FORMAT";
/// Environment variable holding the filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0} (expected json, pretty or compact)")]
    UnknownLogFormat(String),
}

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info,walletbook_parties=debug`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
            with_target: false,
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `WALLETBOOK_LOG_FORMAT`, keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Strict variant of [`TracingConfig::from_env`].
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test fixture, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Like [`TracingConfig::from_lookup`], but an unparsable format falls back
    /// to the default while the filter is still read.
    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup(&lookup).unwrap_or_else(|_| {
            Self::from_lookup(|key| if key == LOG_FORMAT_ENV { None } else { lookup(key) })
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_to_json_at_info() {
        let config = TracingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = TracingConfig::from_lookup(lookup_from(&[
            ("RUST_LOG", "walletbook_parties=debug"),
            ("WALLETBOOK_LOG_FORMAT", "Pretty"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "walletbook_parties=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = TracingConfig::from_lookup(lookup_from(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = TracingConfig::from_lookup(lookup_from(&[("WALLETBOOK_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownLogFormat("xml".to_string()));
    }

    #[test]
    fn lenient_lookup_ignores_bad_format_but_keeps_filter() {
        let config = TracingConfig::from_lookup_lenient(lookup_from(&[
            ("RUST_LOG", "walletbook_wallets=trace"),
            ("WALLETBOOK_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.filter, "walletbook_wallets=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn lenient_lookup_with_blank_filter_and_bad_format_is_default() {
        let config = TracingConfig::from_lookup_lenient(lookup_from(&[
            ("RUST_LOG", ""),
            ("WALLETBOOK_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn deserializes_partial_config() {
        let config: TracingConfig = serde_json::from_str(r#"{"format": "compact"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.filter, "info");
        assert!(!config.with_target);
    }
}
