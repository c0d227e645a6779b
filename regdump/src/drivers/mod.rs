// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Device command layers that sit above the raw `hw/` drivers and below the application logic.
//!
//! ## Existing drivers
//!
//! - [`nrf24`] – Nordic nRF24L01+ 2.4 GHz transceiver, register reads over SPI

pub mod nrf24;
