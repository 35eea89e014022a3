// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Storage market actor types as they appear on the wire of
//! `PublishStorageDeals` messages and in market state queries.

mod publish;

pub use self::publish::{LegacyPublishStorageDealsReturn, PublishedDeals};
pub use fil_actor_market_state::v17::{
    ClientDealProposal, DealProposal, DealState, Label, PublishStorageDealsParams,
    PublishStorageDealsReturn,
};

/// A published deal as the market actor tracks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketDeal {
    pub proposal: DealProposal,
    pub state: DealState,
}
