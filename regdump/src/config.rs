// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed build-time settings for the register dump.

use crate::hw::regs::{SpiControl, MODE_0};

/// Serial link: 9600 baud, 8N1.
pub const BAUD_RATE: u32 = 9600;

/// nRF24L01+ SPI: mode 0, MSB first; peripheral clock / 16 keeps SCK well under its 10 MHz limit.
pub const SPI_CONTROL: SpiControl = SpiControl::master(MODE_0, 16);

pub const BANNER: &str = "*** SPI Register Dump ***\n\r\n\r";
pub const HEADER: &str = "NRF24l01 registers:\n\r";
