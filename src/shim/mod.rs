// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod error;
pub mod policy;

pub mod address {
    pub use super::fvm_shared_latest::address::Address;
}

pub mod clock {
    pub use super::fvm_shared_latest::clock::{ChainEpoch, EPOCH_DURATION_SECONDS};
}

pub mod crypto {
    pub use super::fvm_shared_latest::crypto::signature::Signature;
}

pub mod deal {
    pub use super::fvm_shared_latest::deal::DealID;
}

pub mod econ {
    pub use super::fvm_shared_latest::econ::TokenAmount;
}

pub mod executor {
    pub use super::fvm_shared_latest::receipt::Receipt;
}

pub mod message {
    pub use super::fvm_shared_latest::message::Message;
}

pub mod piece {
    pub use super::fvm_shared_latest::piece::{PaddedPieceSize, PieceInfo};
}

pub mod version {
    pub use super::fvm_shared_latest::version::NetworkVersion;
}

mod fvm_shared_latest {
    pub use fvm_shared4::*;
}
