// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Sector commitment decisions: proving which on-chain deal backs a locally
//! promised one, and choosing the expiration a precommit should carry.

mod api;
mod config;
mod current_deal_info;
mod errors;
mod precommit_policy;
mod types;

pub use self::{
    api::{ChainApi, MessageLookup, TipsetToken},
    config::{SealingConfig, SealingConfigProvider},
    current_deal_info::CurrentDealInfoManager,
    errors::*,
    precommit_policy::{BasicPreCommitPolicy, PreCommitPolicy},
    types::{CurrentDealInfo, DealSchedule, Piece, PieceDealInfo},
};
