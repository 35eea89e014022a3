// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT
use fvm_shared4::error::ExitCode as ExitCode_latest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `Newtype` wrapper for the FVM `ExitCode`, displayed the way Lotus names
/// exit codes so that error text lines up with the rest of the network's logs.
#[derive(
    PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize, derive_more::From, derive_more::Into,
)]
pub struct ExitCode(ExitCode_latest);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            ExitCode_latest::OK => Some("Ok"),
            ExitCode_latest::SYS_SENDER_INVALID => Some("SysErrSenderInvalid"),
            ExitCode_latest::SYS_SENDER_STATE_INVALID => Some("SysErrSenderStateInvalid"),
            ExitCode_latest::SYS_ILLEGAL_INSTRUCTION => Some("SysErrIllegalInstruction"),
            ExitCode_latest::SYS_INVALID_RECEIVER => Some("SysErrInvalidReceiver"),
            ExitCode_latest::SYS_INSUFFICIENT_FUNDS => Some("SysErrInsufficientFunds"),
            ExitCode_latest::SYS_OUT_OF_GAS => Some("SysErrOutOfGas"),
            ExitCode_latest::SYS_ILLEGAL_EXIT_CODE => Some("SysErrIllegalExitCode"),
            ExitCode_latest::SYS_ASSERTION_FAILED => Some("SysFatal"),
            ExitCode_latest::SYS_MISSING_RETURN => Some("SysErrMissingReturn"),

            ExitCode_latest::USR_ILLEGAL_ARGUMENT => Some("ErrIllegalArgument"),
            ExitCode_latest::USR_NOT_FOUND => Some("ErrNotFound"),
            ExitCode_latest::USR_FORBIDDEN => Some("ErrForbidden"),
            ExitCode_latest::USR_INSUFFICIENT_FUNDS => Some("ErrInsufficientFunds"),
            ExitCode_latest::USR_ILLEGAL_STATE => Some("ErrIllegalState"),
            ExitCode_latest::USR_SERIALIZATION => Some("ErrSerialization"),
            ExitCode_latest::USR_UNHANDLED_MESSAGE => Some("ErrUnhandledMessage"),
            ExitCode_latest::USR_UNSPECIFIED => Some("ErrUnspecified"),
            ExitCode_latest::USR_ASSERTION_FAILED => Some("ErrAssertionFailed"),
            ExitCode_latest::USR_READ_ONLY => Some("ErrReadOnly"),
            ExitCode_latest::USR_NOT_PAYABLE => Some("ErrNotPayable"),

            _ => None,
        };
        match name {
            Some(name) => write!(f, "{}({})", name, self.value()),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl ExitCode {
    pub const OK: Self = Self::new(ExitCode_latest::OK);

    pub const USR_ILLEGAL_STATE: Self = Self::new(ExitCode_latest::USR_ILLEGAL_STATE);

    pub fn value(&self) -> u32 {
        self.0.value()
    }

    pub fn is_success(&self) -> bool {
        self.0.is_success()
    }

    pub const fn new(value: ExitCode_latest) -> Self {
        Self(value)
    }
}

impl From<u32> for ExitCode {
    fn from(value: u32) -> Self {
        Self(ExitCode_latest::new(value))
    }
}
