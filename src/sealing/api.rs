// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::market::MarketDeal;
use crate::shim::{
    address::Address, clock::ChainEpoch, deal::DealID, executor::Receipt, message::Message,
    version::NetworkVersion,
};
use async_trait::async_trait;
use cid::Cid;

/// Opaque reference to the chain state a query is evaluated against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, derive_more::From, derive_more::Into)]
pub struct TipsetToken(Vec<u8>);

/// Where and how a message was executed.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageLookup {
    /// The message found executed. Differs from the searched one when the
    /// original was replaced in the message pool.
    pub message: Cid,
    pub receipt: Receipt,
    /// Tipset the message was found executed in.
    pub tipset: TipsetToken,
    /// Epoch of `tipset`.
    pub height: ChainEpoch,
}

/// The chain reads the sealing decision engines depend on.
///
/// Implementations own transport, deadlines and retries; dropping a returned
/// future cancels the query.
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// Looks for the execution of a previously submitted message. `Ok(None)`
    /// means it was not found on chain.
    async fn search_msg(&self, msg: Cid) -> anyhow::Result<Option<MessageLookup>>;

    async fn get_message(&self, msg: Cid) -> anyhow::Result<Message>;

    /// Looks up the market deal `deal_id` as of `tok`.
    async fn market_storage_deal(
        &self,
        deal_id: DealID,
        tok: &TipsetToken,
    ) -> anyhow::Result<MarketDeal>;

    /// Resolves `addr` to its ID address as of `tok`.
    async fn lookup_id(&self, addr: &Address, tok: &TipsetToken) -> anyhow::Result<Address>;

    async fn chain_head(&self) -> anyhow::Result<(TipsetToken, ChainEpoch)>;

    async fn network_version(&self, tok: &TipsetToken) -> anyhow::Result<NetworkVersion>;
}
