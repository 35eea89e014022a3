// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::config::LogConfig;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs a console logger filtered by `RUST_LOG`, or by the configured
/// filters when it is unset.
///
/// Fails if a global subscriber is already installed, which embedding
/// applications may treat as harmless.
pub fn setup_logger(config: &LogConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::Layer::new().with_filter(get_env_filter(config)?))
        .try_init()?;
    Ok(())
}

/// Returns an [`EnvFilter`] according to the `RUST_LOG` environment variable, or a default
/// built from `config` - see [`default_env_filter`]
fn get_env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    use std::env::{
        self,
        VarError::{NotPresent, NotUnicode},
    };
    match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(s) => Ok(EnvFilter::new(s)),
        Err(NotPresent) => default_env_filter(config),
        Err(NotUnicode(_)) => Ok(EnvFilter::default()),
    }
}

fn default_env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    let mut directives = vec!["info".to_owned()];
    if !config.filters.is_empty() {
        directives.push(config.to_filter_string());
    }
    Ok(EnvFilter::try_new(directives.join(","))?)
}
