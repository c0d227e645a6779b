// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking wait on a hardware status flag.
//!
//! Every suspension point in the drivers is a spin on a ready flag. The flag is read through a
//! poll closure so register adapters, mocks, and clock bring-up all share the same loop.

use core::convert::Infallible;

use crate::error::{Error, Result};

/// How long a driver is willing to spin on a status flag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum WaitPolicy {
    /// Spin until the flag is raised. A peripheral that never responds hangs the caller.
    #[default]
    Forever,
    /// Give up with [`Error::Timeout`] after this many unsuccessful polls.
    Polls(u32),
}

/// Turn a flag read into an `nb` poll result.
#[inline]
fn poll_flag<F: FnMut() -> bool>(poll: &mut F) -> nb::Result<(), Infallible> {
    if poll() {
        Ok(())
    } else {
        Err(nb::Error::WouldBlock)
    }
}

/// Spin until `poll` returns true, or until the policy's poll budget is used up.
pub fn block_until<F: FnMut() -> bool>(policy: WaitPolicy, mut poll: F) -> Result<()> {
    match policy {
        WaitPolicy::Forever => match nb::block!(poll_flag(&mut poll)) {
            Ok(()) => Ok(()),
            Err(never) => match never {},
        },
        WaitPolicy::Polls(polls) => {
            for _ in 0..polls {
                match poll_flag(&mut poll) {
                    Ok(()) => return Ok(()),
                    Err(nb::Error::WouldBlock) => core::hint::spin_loop(),
                    Err(nb::Error::Other(never)) => match never {},
                }
            }
            log::debug!("wait: flag not raised after {} polls", polls);
            Err(Error::Timeout { polls })
        }
    }
}
