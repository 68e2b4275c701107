//! Layered CLI configuration: defaults, then a TOML file, then environment
//! variables. Higher-precedence sources win.

use anyhow::{Context, Result};
use osgrid_core::Datum;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the CLI
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Default digit count for formatted grid references
    pub digits: ConfigValue<u8>,
    /// Default datum for converted latitude/longitude output
    pub datum: ConfigValue<Datum>,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    digits: Option<u8>,
    datum: Option<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            digits: ConfigValue::new(10, ConfigSource::Default),
            datum: ConfigValue::new(Datum::Osgb36, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file {}", path.as_ref().display()))?;

        let file_config: FileConfig =
            toml::from_str(&content).context("failed to parse config file as TOML")?;

        if let Some(digits) = file_config.digits {
            self.digits.update(digits, ConfigSource::File);
        }

        if let Some(datum) = file_config.datum {
            let datum = datum
                .parse::<Datum>()
                .with_context(|| format!("invalid datum '{datum}' in config file"))?;
            self.datum.update(datum, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(digits_str) = env::var("OSGRID_DIGITS") {
            match digits_str.parse::<u8>() {
                Ok(digits) => self.digits.update(digits, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OSGRID_DIGITS value '{}': expected an integer digit count",
                    digits_str
                ),
            }
        }

        if let Ok(datum_str) = env::var("OSGRID_DATUM") {
            match datum_str.parse::<Datum>() {
                Ok(datum) => self.datum.update(datum, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OSGRID_DATUM value '{}': expected a supported datum name",
                    datum_str
                ),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.digits.value, 10);
        assert_eq!(config.datum.value, Datum::Osgb36);
        assert_eq!(config.digits.source, ConfigSource::Default);
    }

    #[test]
    fn test_update_respects_precedence() {
        let mut value = ConfigValue::new(10_u8, ConfigSource::Environment);
        value.update(6, ConfigSource::File);
        assert_eq!(value.value, 10);

        value.update(4, ConfigSource::Environment);
        assert_eq!(value.value, 10);

        let mut value = ConfigValue::new(10_u8, ConfigSource::Default);
        value.update(6, ConfigSource::File);
        assert_eq!(value.value, 6);
        assert_eq!(value.source, ConfigSource::File);
    }
}
