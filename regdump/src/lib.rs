// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # regdump
//!
//! Bring up a UART and an SPI master, read the CONFIG register of an nRF24L01+ radio, and print
//! it over serial in binary and decimal.
//!
//! The crate has no chip dependency: drivers are generic over the register-level traits in
//! [`hw::regs`], which the `regdump-firmware` crate implements for the STM32F767 and the unit
//! tests implement with recording mocks.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Peripheral lifecycle, wait primitive, UART and SPI drivers |
//! | [`drivers`] | Device-level command layers (nRF24L01+) |
//! | [`report`] | Binary/decimal register dump lines |
//! | [`app`] | The one-shot bring-up and dump sequence |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod report;

pub use error::{Error, Result};
