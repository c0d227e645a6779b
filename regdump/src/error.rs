// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the peripheral drivers.

use crate::hw::lifecycle::PeripheralState;

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A configuration write was attempted while the peripheral was not held in reset.
    #[error("peripheral is {state:?}; configuration requires it to be held in reset")]
    NotConfiguring { state: PeripheralState },

    /// A data-path operation was attempted before the peripheral was released from reset.
    #[error("peripheral is {state:?}; expected it to be active")]
    NotActive { state: PeripheralState },

    #[error("invalid peripheral transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: PeripheralState,
        to: PeripheralState,
    },

    /// A bounded wait ran out of polls before the hardware flag was raised.
    #[error("hardware flag not raised after {polls} polls")]
    Timeout { polls: u32 },
}

pub type Result<T> = core::result::Result<T, Error>;
