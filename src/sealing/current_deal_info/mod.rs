// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT


use super::{ChainApi, CurrentDealInfo, Error, TipsetToken};
use crate::market::{DealProposal, PublishStorageDealsParams, PublishedDeals};
use crate::shim::{deal::DealID, error::ExitCode};
use cid::Cid;
use tracing::debug;

/// Resolves locally promised deals to the deal records the market actor
/// created for them, by reading back the `PublishStorageDeals` message that
/// published them.
///
/// Holds no state besides the chain handle, every call re-queries the chain.
pub struct CurrentDealInfoManager<A> {
    api: A,
}

impl<A> CurrentDealInfoManager<A>
where
    A: ChainApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Returns the on-chain deal ID and deal record for `proposal`, published
    /// in message `publish_cid`, looked up as of `tok`.
    ///
    /// Without a `proposal` the message must have published exactly one deal.
    pub async fn get_current_deal_info(
        &self,
        tok: &TipsetToken,
        proposal: Option<&DealProposal>,
        publish_cid: Cid,
    ) -> Result<CurrentDealInfo, Error> {
        let (deal_id, publish_msg_tipset) = self
            .deal_id_from_publish_deals_msg(tok, proposal, publish_cid)
            .await?;

        let market_deal = self
            .api
            .market_storage_deal(deal_id, tok)
            .await
            .map_err(Error::MarketDeal)?;

        if let Some(proposal) = proposal {
            let equal = self
                .check_deal_equality(tok, proposal, &market_deal.proposal)
                .await
                .map_err(|reason| Error::CompareProposal {
                    publish_cid,
                    reason,
                })?;
            if !equal {
                return Err(Error::ProposalMismatch { publish_cid });
            }
        }

        debug!(%publish_cid, deal_id, "resolved current deal info");
        Ok(CurrentDealInfo {
            deal_id,
            market_deal,
            publish_msg_tipset,
        })
    }

    async fn deal_id_from_publish_deals_msg(
        &self,
        tok: &TipsetToken,
        proposal: Option<&DealProposal>,
        publish_cid: Cid,
    ) -> Result<(DealID, TipsetToken), Error> {
        let lookup = self
            .api
            .search_msg(publish_cid)
            .await
            .map_err(|reason| Error::SearchMessage {
                publish_cid,
                reason,
            })?
            .ok_or(Error::MessageNotFound { publish_cid })?;

        let exit_code = ExitCode::from(lookup.receipt.exit_code);
        if !exit_code.is_success() {
            return Err(Error::NonOkExitCode {
                publish_cid,
                exit_code,
            });
        }

        if lookup.message != publish_cid {
            debug!(%publish_cid, replaced_by = %lookup.message, "publish deal message was replaced");
        }

        let nv = self
            .api
            .network_version(&lookup.tipset)
            .await
            .map_err(|reason| Error::MessageNetworkVersion {
                publish_cid,
                epoch: lookup.height,
                reason,
            })?;

        let published = PublishedDeals::decode(lookup.receipt.return_data.bytes(), nv).map_err(
            |e| Error::MalformedReturn {
                publish_cid,
                reason: e.to_string(),
            },
        )?;
        let deal_ids = published.deal_ids();

        // Nothing to compare against, so the message has to be unambiguous.
        let Some(proposal) = proposal else {
            return match deal_ids {
                [] => Err(Error::NoDeals { publish_cid }),
                [deal_id] => Ok((*deal_id, lookup.tipset)),
                _ => Err(Error::MultipleDeals {
                    publish_cid,
                    count: deal_ids.len(),
                }),
            };
        };

        let publish_msg = self
            .api
            .get_message(publish_cid)
            .await
            .map_err(|reason| Error::GetMessage {
                publish_cid,
                reason,
            })?;
        let params: PublishStorageDealsParams =
            fvm_ipld_encoding::from_slice(publish_msg.params.bytes()).map_err(|e| {
                Error::MalformedParams {
                    publish_cid,
                    reason: e.to_string(),
                }
            })?;

        let mut deal_index = None;
        for (i, param_deal) in params.deals.iter().enumerate() {
            let equal = self
                .check_deal_equality(tok, proposal, &param_deal.proposal)
                .await
                .map_err(|reason| Error::CompareProposal {
                    publish_cid,
                    reason,
                })?;
            if equal {
                deal_index = Some(i);
                break;
            }
        }
        let deal_index = deal_index.ok_or(Error::DealNotInMessage { publish_cid })?;

        let out_index = published
            .is_deal_valid(deal_index as u64)
            .ok_or(Error::DealInvalidAtPublication)?;
        let deal_id = deal_ids
            .get(out_index)
            .copied()
            .ok_or(Error::InvalidActorOutput {
                publish_cid,
                out_index,
                returned: deal_ids.len(),
            })?;

        debug!(
            %publish_cid,
            deal_index,
            deal_id,
            validity_mask = published.has_validity_mask(),
            "matched proposal in publish deals message"
        );
        Ok((deal_id, lookup.tipset))
    }

    /// Compares two proposals field by field, with client addresses compared
    /// by their ID address as of `tok`.
    pub async fn check_deal_equality(
        &self,
        tok: &TipsetToken,
        p1: &DealProposal,
        p2: &DealProposal,
    ) -> anyhow::Result<bool> {
        let same_terms = p1.piece_cid == p2.piece_cid
            && p1.piece_size == p2.piece_size
            && p1.verified_deal == p2.verified_deal
            && p1.label == p2.label
            && p1.start_epoch == p2.start_epoch
            && p1.end_epoch == p2.end_epoch
            && p1.storage_price_per_epoch == p2.storage_price_per_epoch
            && p1.provider_collateral == p2.provider_collateral
            && p1.client_collateral == p2.client_collateral
            && p1.provider == p2.provider;
        if !same_terms {
            return Ok(false);
        }
        if p1.client == p2.client {
            return Ok(true);
        }

        let p1_client = self.api.lookup_id(&p1.client, tok).await?;
        let p2_client = self.api.lookup_id(&p2.client, tok).await?;
        Ok(p1_client == p2_client)
    }
}
