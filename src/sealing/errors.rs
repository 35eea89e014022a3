// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::{clock::ChainEpoch, deal::DealID, error::ExitCode};
use cid::Cid;
use thiserror::Error;

/// Sealing decision error.
///
/// None of these are retried internally, the sector state machine decides
/// whether asking again later makes sense.
#[derive(Debug, Error)]
pub enum Error {
    #[error("looking for publish deal message {publish_cid}: search msg failed: {reason:#}")]
    SearchMessage {
        publish_cid: Cid,
        reason: anyhow::Error,
    },
    #[error("looking for publish deal message {publish_cid}: not found")]
    MessageNotFound { publish_cid: Cid },
    #[error("looking for publish deal message {publish_cid}: non-ok exit code: {exit_code}")]
    NonOkExitCode {
        publish_cid: Cid,
        exit_code: ExitCode,
    },
    #[error(
        "looking for publish deal message {publish_cid}: getting network version at epoch {epoch}: {reason:#}"
    )]
    MessageNetworkVersion {
        publish_cid: Cid,
        epoch: ChainEpoch,
        reason: anyhow::Error,
    },
    #[error("getting network version at epoch {epoch}: {reason:#}")]
    NetworkVersion {
        epoch: ChainEpoch,
        reason: anyhow::Error,
    },
    #[error("looking for publish deal message {publish_cid}: unmarshalling message return: {reason}")]
    MalformedReturn { publish_cid: Cid, reason: String },
    #[error(
        "getting deal ID from publish deal message {publish_cid}: no deal proposal supplied but message return value has more than one deal ({count} deals)"
    )]
    MultipleDeals { publish_cid: Cid, count: usize },
    #[error(
        "getting deal ID from publish deal message {publish_cid}: no deal proposal supplied but message return value has no deals (0 deals)"
    )]
    NoDeals { publish_cid: Cid },
    #[error("getting publish deal message {publish_cid}: {reason:#}")]
    GetMessage {
        publish_cid: Cid,
        reason: anyhow::Error,
    },
    #[error("unmarshalling publish deal message params for message {publish_cid}: {reason}")]
    MalformedParams { publish_cid: Cid, reason: String },
    #[error("comparing publish deal message {publish_cid} proposal to deal proposal: {reason:#}")]
    CompareProposal {
        publish_cid: Cid,
        reason: anyhow::Error,
    },
    #[error("could not find deal in publish deals message {publish_cid}")]
    DealNotInMessage { publish_cid: Cid },
    #[error(
        "invalid publish storage deals ret marking {out_index} as valid while only returning {returned} valid deals in publish deal message {publish_cid}"
    )]
    InvalidActorOutput {
        publish_cid: Cid,
        out_index: usize,
        returned: usize,
    },
    #[error("deal was invalid at publication")]
    DealInvalidAtPublication,
    /// Deal state lookup failures are passed through untouched.
    #[error("{0:#}")]
    MarketDeal(anyhow::Error),
    #[error("deal proposals for publish message {publish_cid} did not match")]
    ProposalMismatch { publish_cid: Cid },
    #[error("getting chain head: {0:#}")]
    ChainHead(anyhow::Error),
    #[error("sealing config load error: {0:#}")]
    SealingConfig(anyhow::Error),
    #[error("invalid deal schedule: end epoch {end_epoch} is not after start epoch {start_epoch}")]
    InvalidDealSchedule {
        start_epoch: ChainEpoch,
        end_epoch: ChainEpoch,
    },
    #[error(
        "piece for deal {deal_id} has an invalid schedule: end epoch {end_epoch} is not after start epoch {start_epoch}"
    )]
    InvalidPieceSchedule {
        deal_id: DealID,
        start_epoch: ChainEpoch,
        end_epoch: ChainEpoch,
    },
}
