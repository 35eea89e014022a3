// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Sealing-side decisions of a Filecoin storage provider: finding the
//! on-chain deal a locally promised deal became, and picking the expiration
//! of a sector about to be precommitted.

pub mod config;
pub mod logger;
pub mod market;
pub mod sealing;
pub mod shim;
#[cfg(test)]
mod test_utils;

pub use crate::config::{Config, ConfigFile, LogConfig, LogValue};
pub use crate::sealing::{
    BasicPreCommitPolicy, ChainApi, CurrentDealInfo, CurrentDealInfoManager, Error,
    PreCommitPolicy, SealingConfig, SealingConfigProvider,
};
