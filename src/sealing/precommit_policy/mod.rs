// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT


use super::{ChainApi, Error, Piece, SealingConfig, SealingConfigProvider};
use crate::shim::{
    clock::ChainEpoch,
    policy::{ActorsPolicy, ProtocolPolicy},
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Chooses the expiration epoch of a sector about to be precommitted.
#[async_trait]
pub trait PreCommitPolicy: Send + Sync {
    async fn expiration(&self, pieces: &[Piece]) -> Result<ChainEpoch, Error>;
}

/// Expires sectors with their longest running deal, or after the configured
/// committed capacity lifetime when they carry no live deals.
///
/// `proving_buffer` is the number of epochs reserved between precommit and
/// the sector being proven. It is taken off every expiration derived from the
/// chain head.
pub struct BasicPreCommitPolicy<A, C, P = ActorsPolicy> {
    api: A,
    config: C,
    policy: P,
    proving_buffer: ChainEpoch,
}

impl<A, C> BasicPreCommitPolicy<A, C> {
    /// Policy bound to mainnet protocol constants.
    pub fn new(api: A, config: C, proving_buffer: ChainEpoch) -> Self {
        Self::with_policy(api, config, ActorsPolicy::default(), proving_buffer)
    }
}

impl<A, C, P> BasicPreCommitPolicy<A, C, P> {
    pub fn with_policy(api: A, config: C, policy: P, proving_buffer: ChainEpoch) -> Self {
        Self {
            api,
            config,
            policy,
            proving_buffer,
        }
    }
}

/// Committed capacity lifetime in epochs, within protocol bounds.
fn cc_lifetime(
    config: &SealingConfig,
    min_expiration: ChainEpoch,
    max_extension: ChainEpoch,
) -> ChainEpoch {
    let configured = config.committed_capacity_sector_lifetime_epochs();
    if configured == 0 {
        return max_extension;
    }
    let lifetime = configured.max(min_expiration).min(max_extension);
    if lifetime != configured {
        warn!(
            configured,
            lifetime, "committed capacity sector lifetime outside protocol bounds, clamping"
        );
    }
    lifetime
}

/// Latest end epoch among the deals in `pieces` that have not lapsed at `head`.
fn latest_deal_end(
    pieces: &[Piece],
    head: ChainEpoch,
    start_epoch_sealing_buffer: ChainEpoch,
) -> Result<Option<ChainEpoch>, Error> {
    let mut latest = None;
    for deal in pieces.iter().filter_map(|piece| piece.deal_info.as_ref()) {
        let schedule = deal.deal_schedule;
        if schedule.is_unset() {
            continue;
        }
        schedule
            .validate()
            .map_err(|_| Error::InvalidPieceSchedule {
                deal_id: deal.deal_id,
                start_epoch: schedule.start_epoch,
                end_epoch: schedule.end_epoch,
            })?;

        if schedule.end_epoch <= head {
            warn!(
                deal_id = deal.deal_id,
                end_epoch = schedule.end_epoch,
                head,
                "piece deal schedule has already lapsed, ignoring"
            );
            continue;
        }
        if schedule.start_epoch < head.saturating_add(start_epoch_sealing_buffer) {
            warn!(
                deal_id = deal.deal_id,
                start_epoch = schedule.start_epoch,
                head,
                start_epoch_sealing_buffer,
                "deal starts within the sealing buffer, the sector may not be proven in time"
            );
        }
        latest = latest.max(Some(schedule.end_epoch));
    }
    Ok(latest)
}

#[async_trait]
impl<A, C, P> PreCommitPolicy for BasicPreCommitPolicy<A, C, P>
where
    A: ChainApi,
    C: SealingConfigProvider,
    P: ProtocolPolicy,
{
    async fn expiration(&self, pieces: &[Piece]) -> Result<ChainEpoch, Error> {
        let (tok, head) = self.api.chain_head().await.map_err(Error::ChainHead)?;
        let nv = self
            .api
            .network_version(&tok)
            .await
            .map_err(|reason| Error::NetworkVersion {
                epoch: head,
                reason,
            })?;
        let config = self
            .config
            .sealing_config()
            .map_err(Error::SealingConfig)?;

        let max_extension = self.policy.max_sector_expiration_extension(nv);
        let min_expiration = self.policy.min_sector_expiration(nv);

        let expiration =
            match latest_deal_end(pieces, head, config.start_epoch_sealing_buffer)? {
                Some(deal_end) => {
                    let max_end = head + max_extension - self.proving_buffer;
                    if deal_end > max_end {
                        warn!(
                            deal_end,
                            max_end, "deal outlives the maximum sector extension, capping"
                        );
                        max_end
                    } else {
                        deal_end
                    }
                }
                None => {
                    head + cc_lifetime(&config, min_expiration, max_extension)
                        - self.proving_buffer
                }
            };

        // A precommit may take up to a proving period to land, the sector
        // must still meet the minimum lifetime when it does.
        let min_end = head + min_expiration + self.policy.wpost_proving_period(nv);
        let expiration = expiration.max(min_end);

        debug!(head, ?nv, expiration, "computed precommit expiration");
        Ok(expiration)
    }
}
