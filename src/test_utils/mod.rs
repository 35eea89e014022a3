// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! In-memory chain and deal fixtures shared by the unit tests.

use crate::market::{
    ClientDealProposal, DealProposal, DealState, Label, LegacyPublishStorageDealsReturn,
    MarketDeal, PublishStorageDealsParams, PublishStorageDealsReturn,
};
use crate::sealing::{ChainApi, DealSchedule, MessageLookup, Piece, PieceDealInfo, TipsetToken};
use crate::shim::{
    address::Address,
    clock::ChainEpoch,
    crypto::Signature,
    deal::DealID,
    econ::TokenAmount,
    error::ExitCode,
    executor::Receipt,
    message::Message,
    piece::{PaddedPieceSize, PieceInfo},
    version::NetworkVersion,
};
use anyhow::Context as _;
use async_trait::async_trait;
use cid::Cid;
use cid::multihash::Multihash;
use fil_actors_shared::fvm_ipld_bitfield::BitField;
use fvm_ipld_encoding::RawBytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

const RAW: u64 = 0x55;
const IDENTITY: u64 = 0x00;

/// Identity-hashed raw CID over `data`, stable across runs.
pub fn test_cid(data: &[u8]) -> Cid {
    Cid::new_v1(RAW, Multihash::wrap(IDENTITY, data).unwrap())
}

pub fn client_address() -> Address {
    Address::new_id(1000)
}

pub fn provider_address() -> Address {
    Address::new_id(1001)
}

/// A deal proposal labelled `label` over test piece number `piece`.
pub fn test_proposal(label: &str, piece: u8) -> DealProposal {
    DealProposal {
        piece_cid: test_cid(&[piece]),
        piece_size: PaddedPieceSize(2048),
        verified_deal: false,
        client: client_address(),
        provider: provider_address(),
        label: Label::String(label.to_owned()),
        start_epoch: 100,
        end_epoch: 100 + 180 * 2880,
        storage_price_per_epoch: TokenAmount::from_atto(10),
        provider_collateral: TokenAmount::from_atto(1000),
        client_collateral: TokenAmount::from_atto(500),
    }
}

pub fn signed(proposal: DealProposal) -> ClientDealProposal {
    ClientDealProposal {
        proposal,
        client_signature: Signature::new_bls(b"foo bar cat dog".to_vec()),
    }
}

pub fn market_deal(proposal: DealProposal) -> MarketDeal {
    MarketDeal {
        proposal,
        state: DealState {
            sector_number: 0,
            sector_start_epoch: 1,
            last_updated_epoch: 2,
            slash_epoch: -1,
        },
    }
}

pub fn bitfield(set: &[u64]) -> BitField {
    BitField::try_from_bits(set.iter().copied()).unwrap()
}

/// Encoded `PublishStorageDeals` return carrying a validity mask.
pub fn publish_return(ids: &[DealID], valid: &[u64]) -> Vec<u8> {
    fvm_ipld_encoding::to_vec(&PublishStorageDealsReturn {
        ids: ids.to_vec(),
        valid_deals: bitfield(valid),
    })
    .unwrap()
}

/// Encoded `PublishStorageDeals` return in the pre-v6 format.
pub fn legacy_publish_return(ids: &[DealID]) -> Vec<u8> {
    fvm_ipld_encoding::to_vec(&LegacyPublishStorageDealsReturn { ids: ids.to_vec() }).unwrap()
}

pub fn message_lookup(publish_cid: Cid, return_data: Vec<u8>, exit_code: ExitCode) -> MessageLookup {
    MessageLookup {
        message: publish_cid,
        receipt: Receipt {
            exit_code: exit_code.into(),
            return_data: RawBytes::new(return_data),
            gas_used: 0,
            events_root: None,
        },
        tipset: TipsetToken::from(b"publish tipset".to_vec()),
        height: 10,
    }
}

/// A sector piece backed by `deal_id`, scheduled over `[start_epoch, end_epoch)`.
pub fn deal_piece(deal_id: DealID, start_epoch: ChainEpoch, end_epoch: ChainEpoch) -> Piece {
    Piece {
        piece: PieceInfo {
            size: PaddedPieceSize(1024),
            cid: test_cid(b"piece"),
        },
        deal_info: Some(PieceDealInfo {
            publish_cid: None,
            deal_id,
            deal_proposal: None,
            deal_schedule: DealSchedule {
                start_epoch,
                end_epoch,
            },
            keep_unsealed: false,
        }),
    }
}

/// Committed capacity filler.
pub fn filler_piece() -> Piece {
    Piece {
        piece: PieceInfo {
            size: PaddedPieceSize(1024),
            cid: test_cid(b"filler"),
        },
        deal_info: None,
    }
}

/// Chain backed by fixed in-memory answers.
///
/// `get_message` rebuilds the publish message from `market_deals`, proposals
/// ordered by deal ID, the way a provider would have submitted them.
#[derive(Default)]
pub struct MockChainApi {
    pub lookup: Option<MessageLookup>,
    pub search_err: Option<String>,
    pub get_message_err: Option<String>,
    /// Overrides the params `get_message` would otherwise build.
    pub message_params: Option<RawBytes>,
    pub market_deals: HashMap<(DealID, TipsetToken), MarketDeal>,
    pub id_addresses: HashMap<Address, Address>,
    pub lookup_id_err: Option<String>,
    pub head: (TipsetToken, ChainEpoch),
    pub head_err: Option<String>,
    pub version: Option<NetworkVersion>,
    pub search_calls: AtomicUsize,
}

impl MockChainApi {
    pub fn with_head(epoch: ChainEpoch) -> Self {
        Self {
            head: (TipsetToken::from(b"head".to_vec()), epoch),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ChainApi for MockChainApi {
    async fn search_msg(&self, _msg: Cid) -> anyhow::Result<Option<MessageLookup>> {
        self.search_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = &self.search_err {
            anyhow::bail!("{err}");
        }
        Ok(self.lookup.clone())
    }

    async fn get_message(&self, _msg: Cid) -> anyhow::Result<Message> {
        if let Some(err) = &self.get_message_err {
            anyhow::bail!("{err}");
        }
        let params = match &self.message_params {
            Some(params) => params.clone(),
            None => {
                let mut deals: Vec<_> = self.market_deals.iter().collect();
                deals.sort_by_key(|((deal_id, _), _)| *deal_id);
                RawBytes::serialize(PublishStorageDealsParams {
                    deals: deals
                        .into_iter()
                        .map(|(_, deal)| signed(deal.proposal.clone()))
                        .collect(),
                })?
            }
        };
        Ok(Message {
            version: 0,
            from: provider_address(),
            to: Address::new_id(5),
            sequence: 0,
            value: TokenAmount::default(),
            method_num: 4,
            params,
            gas_limit: 0,
            gas_fee_cap: TokenAmount::default(),
            gas_premium: TokenAmount::default(),
        })
    }

    async fn market_storage_deal(
        &self,
        deal_id: DealID,
        tok: &TipsetToken,
    ) -> anyhow::Result<MarketDeal> {
        self.market_deals
            .get(&(deal_id, tok.clone()))
            .cloned()
            .with_context(|| format!("deal {deal_id} not found"))
    }

    async fn lookup_id(&self, addr: &Address, _tok: &TipsetToken) -> anyhow::Result<Address> {
        if let Some(err) = &self.lookup_id_err {
            anyhow::bail!("{err}");
        }
        Ok(self.id_addresses.get(addr).copied().unwrap_or(*addr))
    }

    async fn chain_head(&self) -> anyhow::Result<(TipsetToken, ChainEpoch)> {
        if let Some(err) = &self.head_err {
            anyhow::bail!("{err}");
        }
        Ok(self.head.clone())
    }

    async fn network_version(&self, _tok: &TipsetToken) -> anyhow::Result<NetworkVersion> {
        self.version.context("network version unavailable")
    }
}
