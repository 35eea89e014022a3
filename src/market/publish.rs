// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::PublishStorageDealsReturn;
use crate::shim::{deal::DealID, version::NetworkVersion};
use fil_actors_shared::fvm_ipld_bitfield::BitField;
use fvm_ipld_encoding::tuple::*;

/// `PublishStorageDeals` return value before actors v6. The message only
/// succeeded when every proposal was valid, so `ids` lines up with the
/// submitted proposals one to one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize_tuple, Deserialize_tuple)]
pub struct LegacyPublishStorageDealsReturn {
    pub ids: Vec<DealID>,
}

/// Either return format, normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishedDeals {
    ids: Vec<DealID>,
    valid_deals: Option<BitField>,
}

impl PublishedDeals {
    /// Decodes the raw return of a `PublishStorageDeals` message.
    ///
    /// The format expected at `nv` is tried first and the other one second,
    /// as the two encodings are tuples of different arity and cannot be
    /// confused with each other. When neither decodes, the error of the
    /// expected format is returned.
    pub fn decode(bytes: &[u8], nv: NetworkVersion) -> Result<Self, fvm_ipld_encoding::Error> {
        if nv >= NetworkVersion::V14 {
            Self::decode_with_valid_deals(bytes)
                .or_else(|err| Self::decode_legacy(bytes).map_err(|_| err))
        } else {
            Self::decode_legacy(bytes)
                .or_else(|err| Self::decode_with_valid_deals(bytes).map_err(|_| err))
        }
    }

    fn decode_with_valid_deals(bytes: &[u8]) -> Result<Self, fvm_ipld_encoding::Error> {
        let ret: PublishStorageDealsReturn = fvm_ipld_encoding::from_slice(bytes)?;
        Ok(ret.into())
    }

    fn decode_legacy(bytes: &[u8]) -> Result<Self, fvm_ipld_encoding::Error> {
        let ret: LegacyPublishStorageDealsReturn = fvm_ipld_encoding::from_slice(bytes)?;
        Ok(ret.into())
    }

    /// IDs of the deals the actor accepted, in submission order.
    pub fn deal_ids(&self) -> &[DealID] {
        &self.ids
    }

    /// Reports whether the proposal submitted at `index` was accepted, and if
    /// so its position in [`PublishedDeals::deal_ids`].
    ///
    /// The returned position is not bounds checked against the ID list, a
    /// return value that marks more proposals valid than it lists IDs for is
    /// left to the caller to reject.
    pub fn is_deal_valid(&self, index: u64) -> Option<usize> {
        match &self.valid_deals {
            None => Some(index as usize),
            Some(valid_deals) => {
                if !valid_deals.get(index) {
                    return None;
                }
                Some(valid_deals.iter().take_while(|&i| i < index).count())
            }
        }
    }

    pub fn has_validity_mask(&self) -> bool {
        self.valid_deals.is_some()
    }
}

impl From<PublishStorageDealsReturn> for PublishedDeals {
    fn from(ret: PublishStorageDealsReturn) -> Self {
        Self {
            ids: ret.ids,
            valid_deals: Some(ret.valid_deals),
        }
    }
}

impl From<LegacyPublishStorageDealsReturn> for PublishedDeals {
    fn from(ret: LegacyPublishStorageDealsReturn) -> Self {
        Self {
            ids: ret.ids,
            valid_deals: None,
        }
    }
}
