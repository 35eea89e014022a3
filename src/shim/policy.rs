// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::{clock::ChainEpoch, version::NetworkVersion};
use fil_actors_shared::v10::runtime::Policy as PolicyV10;
use fil_actors_shared::v13::runtime::Policy as PolicyV13;

/// Versioned protocol bounds on sector lifetimes.
///
/// Values are resolved on every call for the network version active at the
/// queried tipset, they are never cached by the callers.
pub trait ProtocolPolicy: Send + Sync {
    /// Maximum number of epochs past the current epoch a sector may be
    /// committed or extended to.
    fn max_sector_expiration_extension(&self, nv: NetworkVersion) -> ChainEpoch;

    /// Minimum number of epochs past the current epoch a sector may be
    /// committed for.
    fn min_sector_expiration(&self, nv: NetworkVersion) -> ChainEpoch;

    /// Length of the window `PoSt` proving period.
    fn wpost_proving_period(&self, nv: NetworkVersion) -> ChainEpoch;
}

/// [`ProtocolPolicy`] backed by the builtin actors' runtime policies.
///
/// Network version 21 raised the maximum sector extension (FIP-0052), so
/// versions before it use the v10 policy and later ones the v13 policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorsPolicy {
    legacy: PolicyV10,
    current: PolicyV13,
}

impl ActorsPolicy {
    pub fn mainnet() -> Self {
        Self {
            legacy: PolicyV10::mainnet(),
            current: PolicyV13::mainnet(),
        }
    }

    fn is_legacy(nv: NetworkVersion) -> bool {
        nv < NetworkVersion::V21
    }
}

impl Default for ActorsPolicy {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl ProtocolPolicy for ActorsPolicy {
    fn max_sector_expiration_extension(&self, nv: NetworkVersion) -> ChainEpoch {
        if Self::is_legacy(nv) {
            self.legacy.max_sector_expiration_extension
        } else {
            self.current.max_sector_expiration_extension
        }
    }

    fn min_sector_expiration(&self, nv: NetworkVersion) -> ChainEpoch {
        if Self::is_legacy(nv) {
            self.legacy.min_sector_expiration
        } else {
            self.current.min_sector_expiration
        }
    }

    fn wpost_proving_period(&self, nv: NetworkVersion) -> ChainEpoch {
        if Self::is_legacy(nv) {
            self.legacy.wpost_proving_period
        } else {
            self.current.wpost_proving_period
        }
    }
}
