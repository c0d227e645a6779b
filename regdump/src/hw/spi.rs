// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) master.
//!
//! - `SpiMaster` runs the reset -> configure -> pins -> release bring-up and exchanges one byte
//!   per bus cycle.
//! - The chip-select line is active-low and driven by hand; pairing `select_low`/`select_high`
//!   around a transaction is up to the caller.

use crate::error::Result;
use crate::hw::lifecycle::Lifecycle;
use crate::hw::regs::{PinLevel, SpiControl, SpiRegisters};
use crate::hw::wait::{self, WaitPolicy};

pub struct SpiMaster<R: SpiRegisters> {
    regs: R,
    lifecycle: Lifecycle,
    wait: WaitPolicy,
}

impl<R: SpiRegisters> SpiMaster<R> {
    pub fn new(regs: R) -> Self {
        Self {
            regs,
            lifecycle: Lifecycle::new(),
            wait: WaitPolicy::Forever,
        }
    }

    pub fn with_wait_policy(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    /// Bring the peripheral up. Leaves chip-select deasserted (high).
    pub fn init(&mut self, control: &SpiControl) -> Result<()> {
        // (1) hold reset
        self.enter_reset();

        // (2) control bits, (3) ports
        self.configure(control)?;

        // (4) release
        self.release()?;

        self.select_high();
        log::debug!("spi: active, {:?}", control);
        Ok(())
    }

    pub fn enter_reset(&mut self) {
        self.regs.hold_reset();
        self.lifecycle.hold_reset();
    }

    /// Write the control word and configure the pins. Rejected unless held in reset.
    pub fn configure(&mut self, control: &SpiControl) -> Result<()> {
        self.lifecycle.ensure_configuring()?;
        self.regs.write_control(control);
        self.regs.configure_pins();
        Ok(())
    }

    pub fn release(&mut self) -> Result<()> {
        self.lifecycle.release()?;
        self.regs.release_reset();
        Ok(())
    }

    /// Assert the chip select.
    #[inline]
    pub fn select_low(&mut self) {
        self.regs.set_chip_select(PinLevel::Low);
    }

    /// Deassert the chip select.
    #[inline]
    pub fn select_high(&mut self) {
        self.regs.set_chip_select(PinLevel::High);
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        self.lifecycle.ensure_active()?;
        self.regs.write_tx(byte);

        let regs = &self.regs;
        wait::block_until(self.wait, || regs.transfer_complete())?;

        let rx = self.regs.read_rx();
        log::trace!("spi: tx {:#04x} rx {:#04x}", byte, rx);
        Ok(rx)
    }

    #[inline]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn free(self) -> R {
        self.regs
    }
}
