// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Transmit-only UART output.
//!
//! `SerialOut` brings the peripheral up at a fixed baud rate and pushes bytes out one at a time,
//! spinning on the transmit-ready flag before each write.
//!
//! Note: the report lines end in `\n\r`. When using `write!`, include the `\r` yourself so the
//! terminal returns to column 0.
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/ttyACM0 9600
//! ```

use core::fmt;

use crate::error::Result;
use crate::hw::lifecycle::Lifecycle;
use crate::hw::regs::{UartRegisters, UartTiming};
use crate::hw::wait::{self, WaitPolicy};

/// Byte-oriented output used by the report formatter.
pub trait SerialWrite {
    fn put_char(&mut self, byte: u8) -> Result<()>;

    /// Write `s` byte by byte, stopping early at a NUL.
    fn put_str(&mut self, s: &str) -> Result<()> {
        for &b in s.as_bytes() {
            if b == 0 {
                break;
            }
            self.put_char(b)?;
        }
        Ok(())
    }
}

pub struct SerialOut<R: UartRegisters> {
    regs: R,
    lifecycle: Lifecycle,
    wait: WaitPolicy,
}

impl<R: UartRegisters> SerialOut<R> {
    pub fn new(regs: R) -> Self {
        Self {
            regs,
            lifecycle: Lifecycle::new(),
            wait: WaitPolicy::Forever,
        }
    }

    /// Bound every transmit-ready wait instead of spinning forever.
    pub fn with_wait_policy(mut self, wait: WaitPolicy) -> Self {
        self.wait = wait;
        self
    }

    /// Hold reset, route pins, program the baud generator, and release the state machine.
    ///
    /// Safe to call again: the peripheral is put back into reset before reprogramming.
    pub fn init(&mut self, timing: &UartTiming) -> Result<()> {
        self.enter_reset();
        self.configure(timing)?;
        self.release()
    }

    /// Stop the peripheral state machine so it accepts configuration writes.
    pub fn enter_reset(&mut self) {
        self.regs.hold_reset();
        self.lifecycle.hold_reset();
    }

    /// Route pins and program 8N1 framing plus the baud generator. Rejected unless the
    /// peripheral is held in reset.
    pub fn configure(&mut self, timing: &UartTiming) -> Result<()> {
        self.lifecycle.ensure_configuring()?;
        self.regs.configure_pins();
        self.regs.write_timing(timing);
        log::debug!(
            "uart: divisor {} modulation {}",
            timing.divisor,
            timing.modulation
        );
        Ok(())
    }

    /// Leave reset. Only valid straight after `enter_reset`/`configure`.
    pub fn release(&mut self) -> Result<()> {
        self.lifecycle.release()?;
        self.regs.release_reset();
        Ok(())
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

impl<R: UartRegisters> SerialWrite for SerialOut<R> {
    fn put_char(&mut self, byte: u8) -> Result<()> {
        self.lifecycle.ensure_active()?;
        let regs = &self.regs;
        wait::block_until(self.wait, || regs.tx_ready())?;
        self.regs.write_tx(byte);
        Ok(())
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `SerialOut`.
impl<R: UartRegisters> fmt::Write for SerialOut<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_str(s).map_err(|_| fmt::Error)
    }
}
