//! Runtime configuration
//!
//! Read once at startup from the environment. Binaries may override
//! individual fields from their command line before building a client.

use crate::error::ConfigError;
use serde::Serialize;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://trendhire.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where page data comes from on a primary action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Literal values compiled into the binary
    Mock,
    /// The TrendHire API, for the pages it serves
    Api,
}

impl DataSource {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "mock" => Ok(DataSource::Mock),
            "api" => Ok(DataSource::Api),
            _ => Err(ConfigError::InvalidDataSource(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Mock => "mock",
            DataSource::Api => "api",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    pub data_source: DataSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_source: DataSource::Mock,
        }
    }
}

impl Config {
    /// Build from `TRENDHIRE_API_URL`, `TRENDHIRE_TIMEOUT_SECS` and
    /// `TRENDHIRE_DATA_SOURCE`, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("TRENDHIRE_API_URL") {
            config.api_base_url = normalize_base_url(&url)?;
        }

        if let Some(raw) = lookup("TRENDHIRE_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw)?;
        }

        if let Some(raw) = lookup("TRENDHIRE_DATA_SOURCE") {
            config.data_source = DataSource::parse(&raw)?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout(secs.to_string()));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }

    pub fn with_data_source(mut self, source: DataSource) -> Self {
        self.data_source = source;
        self
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(url.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.data_source, DataSource::Mock);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup_from(&[
            ("TRENDHIRE_API_URL", "http://localhost:8080/"),
            ("TRENDHIRE_TIMEOUT_SECS", "5"),
            ("TRENDHIRE_DATA_SOURCE", "API"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.data_source, DataSource::Api);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Config::from_lookup(lookup_from(&[("TRENDHIRE_TIMEOUT_SECS", "0")]));
        assert!(matches!(err, Err(ConfigError::InvalidTimeout(_))));

        let err = Config::from_lookup(lookup_from(&[("TRENDHIRE_DATA_SOURCE", "disk")]));
        assert!(matches!(err, Err(ConfigError::InvalidDataSource(_))));

        let err = Config::from_lookup(lookup_from(&[("TRENDHIRE_API_URL", "ftp://x")]));
        assert!(matches!(err, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_base_url("http://127.0.0.1:9000")
            .unwrap()
            .with_timeout_secs(2)
            .unwrap()
            .with_data_source(DataSource::Api);

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert!(Config::default().with_timeout_secs(0).is_err());
    }
}
