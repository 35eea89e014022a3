// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::sealing::{SealingConfig, SealingConfigProvider};
use anyhow::Context as _;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LogConfig {
    pub filters: Vec<LogValue>,
}

impl LogConfig {
    /// Filters as `EnvFilter` directives, `module=level` separated by commas.
    pub fn to_filter_string(&self) -> String {
        self.filters
            .iter()
            .map(|f| format!("{}={}", f.module, f.level))
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filters: vec![
                LogValue::new("forest_sealing", LevelFilter::INFO),
                LogValue::new("fil_actors_shared", LevelFilter::WARN),
            ],
        }
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    #[serde_as(as = "DisplayFromStr")]
    pub level: LevelFilter,
}

impl LogValue {
    pub fn new(module: &str, level: LevelFilter) -> Self {
        Self {
            module: module.to_string(),
            level,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub sealing: SealingConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_toml(toml: &str) -> anyhow::Result<Self> {
        toml::from_str(toml).context("invalid configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration file {}", path.display()))?;
        Self::from_toml(&toml).with_context(|| format!("loading {}", path.display()))
    }
}

impl SealingConfigProvider for Config {
    fn sealing_config(&self) -> anyhow::Result<SealingConfig> {
        Ok(self.sealing.clone())
    }
}

/// Configuration file read again on every request, so edits apply to the
/// next sealing decision without a restart.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SealingConfigProvider for ConfigFile {
    fn sealing_config(&self) -> anyhow::Result<SealingConfig> {
        Ok(Config::from_file(&self.path)?.sealing)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_default_log_filters() {
        let config = LogConfig::default();
        EnvFilter::builder()
            .parse(config.to_filter_string())
            .unwrap();
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [sealing]
            committed_capacity_sector_lifetime = 17280000
            start_epoch_sealing_buffer = 480

            [[log.filters]]
            module = "forest_sealing::sealing"
            level = "debug"
            "#,
        )
        .unwrap();

        pretty_assertions::assert_eq!(
            config,
            Config {
                sealing: SealingConfig {
                    committed_capacity_sector_lifetime: Duration::from_secs(17280000),
                    start_epoch_sealing_buffer: 480,
                },
                log: LogConfig {
                    filters: vec![LogValue::new("forest_sealing::sealing", LevelFilter::DEBUG)],
                },
            }
        );
        assert_eq!(
            config
                .sealing
                .committed_capacity_sector_lifetime_epochs(),
            200 * 2880
        );
        assert_eq!(config.log.to_filter_string(), "forest_sealing::sealing=debug");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_toml(
            r#"
            [[log.filters]]
            module = "forest_sealing"
            level = "chatty"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid configuration"));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&serialized).unwrap(), config);
    }

    #[test]
    fn test_missing_config_file() {
        let provider = ConfigFile::new("/nonexistent/forest-sealing.toml");
        let err = provider.sealing_config().unwrap_err();
        assert!(format!("{err:#}").contains("reading configuration file"));
    }
}
