// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reset / configure / active state tracking for serial peripherals.
//!
//! The USCI-style peripherals driven here only accept control writes while their software reset
//! bit is held. Nothing on the chip reports that state back, so the drivers keep a `Lifecycle`
//! next to the register adapter and check it before every write.

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PeripheralState {
    /// Power-on state; nothing written yet.
    Reset,
    /// Held in software reset, accepting control writes.
    Configuring,
    /// Released from reset; data path usable, control writes rejected.
    Active,
}

#[derive(Copy, Clone, Debug)]
pub struct Lifecycle {
    state: PeripheralState,
}

impl Lifecycle {
    pub const fn new() -> Self {
        Self {
            state: PeripheralState::Reset,
        }
    }

    #[inline]
    pub fn state(&self) -> PeripheralState {
        self.state
    }

    /// Enter the configuring state. Valid from any state: holding reset is always allowed.
    pub fn hold_reset(&mut self) {
        log::trace!("lifecycle: {:?} -> Configuring", self.state);
        self.state = PeripheralState::Configuring;
    }

    /// Leave reset. Only valid once the peripheral has been configured.
    pub fn release(&mut self) -> Result<()> {
        match self.state {
            PeripheralState::Configuring => {
                log::trace!("lifecycle: Configuring -> Active");
                self.state = PeripheralState::Active;
                Ok(())
            }
            from => Err(Error::InvalidTransition {
                from,
                to: PeripheralState::Active,
            }),
        }
    }

    pub fn ensure_configuring(&self) -> Result<()> {
        match self.state {
            PeripheralState::Configuring => Ok(()),
            state => Err(Error::NotConfiguring { state }),
        }
    }

    pub fn ensure_active(&self) -> Result<()> {
        match self.state {
            PeripheralState::Active => Ok(()),
            state => Err(Error::NotActive { state }),
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_reset() {
        let lc = Lifecycle::new();
        assert_eq!(lc.state(), PeripheralState::Reset);
        assert_eq!(
            lc.ensure_configuring(),
            Err(Error::NotConfiguring {
                state: PeripheralState::Reset
            })
        );
        assert_eq!(
            lc.ensure_active(),
            Err(Error::NotActive {
                state: PeripheralState::Reset
            })
        );
    }

    #[test]
    fn reset_configure_active() {
        let mut lc = Lifecycle::new();
        lc.hold_reset();
        assert!(lc.ensure_configuring().is_ok());
        assert!(lc.ensure_active().is_err());

        lc.release().unwrap();
        assert_eq!(lc.state(), PeripheralState::Active);
        assert!(lc.ensure_active().is_ok());
        assert_eq!(
            lc.ensure_configuring(),
            Err(Error::NotConfiguring {
                state: PeripheralState::Active
            })
        );
    }

    #[test]
    fn release_requires_configuring() {
        let mut lc = Lifecycle::new();
        assert_eq!(
            lc.release(),
            Err(Error::InvalidTransition {
                from: PeripheralState::Reset,
                to: PeripheralState::Active
            })
        );

        lc.hold_reset();
        lc.release().unwrap();
        assert_eq!(
            lc.release(),
            Err(Error::InvalidTransition {
                from: PeripheralState::Active,
                to: PeripheralState::Active
            })
        );
    }

    #[test]
    fn active_peripheral_can_reenter_reset() {
        let mut lc = Lifecycle::new();
        lc.hold_reset();
        lc.release().unwrap();
        lc.hold_reset();
        assert_eq!(lc.state(), PeripheralState::Configuring);
    }
}
