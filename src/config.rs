//! Runtime configuration for the booking rules and the store actor.

use crate::policy::{BookingWindow, DEFAULT_CODE_TTL_MINUTES, DEFAULT_CUTOFF_HOUR};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{key} out of range: {reason}")]
    OutOfRange {
        key: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Hour of the local day at which booking for tomorrow closes.
    pub cutoff_hour: u32,
    /// How long an issued redemption code stays valid.
    pub code_ttl_minutes: i64,
    /// Channel capacity of the booking store actor.
    pub store_buffer: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
            store_buffer: 32,
        }
    }
}

impl BookingConfig {
    /// Reads `BREAKBUDDY_CUTOFF_HOUR`, `BREAKBUDDY_CODE_TTL_MINUTES` and
    /// `BREAKBUDDY_STORE_BUFFER`, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            cutoff_hour: parse_or(&lookup, "BREAKBUDDY_CUTOFF_HOUR", defaults.cutoff_hour)?,
            code_ttl_minutes: parse_or(
                &lookup,
                "BREAKBUDDY_CODE_TTL_MINUTES",
                defaults.code_ttl_minutes,
            )?,
            store_buffer: parse_or(&lookup, "BREAKBUDDY_STORE_BUFFER", defaults.store_buffer)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cutoff_hour > 24 {
            return Err(ConfigError::OutOfRange {
                key: "BREAKBUDDY_CUTOFF_HOUR",
                reason: "must be between 0 and 24",
            });
        }
        if self.code_ttl_minutes <= 0 {
            return Err(ConfigError::OutOfRange {
                key: "BREAKBUDDY_CODE_TTL_MINUTES",
                reason: "must be positive",
            });
        }
        if self.store_buffer == 0 {
            return Err(ConfigError::OutOfRange {
                key: "BREAKBUDDY_STORE_BUFFER",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    pub fn window(&self) -> BookingWindow {
        BookingWindow::new(self.cutoff_hour)
    }

    pub fn code_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.code_ttl_minutes)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = BookingConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.window(), BookingWindow::new(16));
        assert_eq!(config.code_ttl(), chrono::Duration::minutes(30));
    }

    #[test]
    fn test_overrides() {
        let config = BookingConfig::from_lookup(lookup(&[
            ("BREAKBUDDY_CUTOFF_HOUR", "18"),
            ("BREAKBUDDY_CODE_TTL_MINUTES", " 15 "),
            ("BREAKBUDDY_STORE_BUFFER", ""),
        ]))
        .unwrap();
        assert_eq!(config.cutoff_hour, 18);
        assert_eq!(config.code_ttl_minutes, 15);
        assert_eq!(config.store_buffer, 32);
    }

    #[test]
    fn test_invalid_number() {
        let err = BookingConfig::from_lookup(lookup(&[("BREAKBUDDY_CUTOFF_HOUR", "4pm")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "BREAKBUDDY_CUTOFF_HOUR",
                value: "4pm".into(),
            }
        );
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            BookingConfig::from_lookup(lookup(&[("BREAKBUDDY_CUTOFF_HOUR", "25")])),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            BookingConfig::from_lookup(lookup(&[("BREAKBUDDY_CODE_TTL_MINUTES", "0")])),
            Err(ConfigError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: BookingConfig = serde_json::from_str(r#"{ "cutoff_hour": 12 }"#).unwrap();
        assert_eq!(config.cutoff_hour, 12);
        assert_eq!(config.code_ttl_minutes, 30);
    }
}
