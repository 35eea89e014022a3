// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::clock::{ChainEpoch, EPOCH_DURATION_SECONDS};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use std::time::Duration;

/// Sealing tunables read by the precommit policy.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(default)]
pub struct SealingConfig {
    /// Lifetime of committed capacity sectors. Zero selects the protocol's
    /// maximum sector extension.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub committed_capacity_sector_lifetime: Duration,
    /// Epochs between the current head and a deal's start epoch below which
    /// the deal is considered at risk of starting before its sector is proven.
    pub start_epoch_sealing_buffer: ChainEpoch,
}

impl SealingConfig {
    /// The committed capacity lifetime in whole epochs.
    pub fn committed_capacity_sector_lifetime_epochs(&self) -> ChainEpoch {
        let secs = i64::try_from(self.committed_capacity_sector_lifetime.as_secs())
            .unwrap_or(i64::MAX);
        secs / EPOCH_DURATION_SECONDS
    }
}

/// Source of the current [`SealingConfig`]. Consulted on every call so that
/// configuration reloads take effect without rebuilding the policy.
pub trait SealingConfigProvider: Send + Sync {
    fn sealing_config(&self) -> anyhow::Result<SealingConfig>;
}

impl<F> SealingConfigProvider for F
where
    F: Fn() -> anyhow::Result<SealingConfig> + Send + Sync,
{
    fn sealing_config(&self) -> anyhow::Result<SealingConfig> {
        self()
    }
}
