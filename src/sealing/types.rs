// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::Error;
use crate::market::{DealProposal, MarketDeal};
use crate::shim::{clock::ChainEpoch, deal::DealID, piece::PieceInfo};
use cid::Cid;

/// Epochs at which a deal's collateral obligation begins and ends.
///
/// A zero value means no schedule is known for the deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealSchedule {
    pub start_epoch: ChainEpoch,
    pub end_epoch: ChainEpoch,
}

impl DealSchedule {
    pub fn new(start_epoch: ChainEpoch, end_epoch: ChainEpoch) -> Result<Self, Error> {
        let schedule = Self {
            start_epoch,
            end_epoch,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn is_unset(&self) -> bool {
        self.end_epoch == 0
    }

    pub(super) fn validate(&self) -> Result<(), Error> {
        if self.end_epoch <= self.start_epoch {
            return Err(Error::InvalidDealSchedule {
                start_epoch: self.start_epoch,
                end_epoch: self.end_epoch,
            });
        }
        Ok(())
    }
}

impl From<&DealProposal> for DealSchedule {
    fn from(proposal: &DealProposal) -> Self {
        Self {
            start_epoch: proposal.start_epoch,
            end_epoch: proposal.end_epoch,
        }
    }
}

/// Links a sealed piece to the deal it fulfills.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceDealInfo {
    pub publish_cid: Option<Cid>,
    pub deal_id: DealID,
    pub deal_proposal: Option<DealProposal>,
    pub deal_schedule: DealSchedule,
    pub keep_unsealed: bool,
}

/// A unit of data sealed into a sector. Pieces without deal info are
/// committed capacity filler.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub piece: PieceInfo,
    pub deal_info: Option<PieceDealInfo>,
}

/// Authoritative on-chain identity of a locally promised deal.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentDealInfo {
    pub deal_id: DealID,
    pub market_deal: MarketDeal,
    /// Tipset the publish message was executed in.
    pub publish_msg_tipset: super::TipsetToken,
}
