// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Core clock and watchdog bring-up.

/// Chip-level setup performed once before any peripheral is touched.
pub trait SystemControl {
    /// Stop the watchdog, or keep it serviced where the chip cannot stop it.
    fn stop_watchdog(&mut self);

    /// Switch the core to the factory-calibrated internal oscillator and return the clock that
    /// feeds the serial peripherals, in Hz.
    fn select_calibrated_clock(&mut self) -> u32;
}
