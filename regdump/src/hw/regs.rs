// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register-level hardware boundary.
//!
//! The drivers in [`super::usart`] and [`super::spi`] never touch memory-mapped registers
//! directly. Instead they sequence the small set of operations below, which a board crate
//! implements on top of its PAC and which the tests implement with recording mocks.

/// Logic level of a GPIO output.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PinLevel {
    Low,
    High,
}

/// Baud-rate generator setting: integer divisor plus a fractional modulation in eighths.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UartTiming {
    pub divisor: u16,
    pub modulation: u8,
}

impl UartTiming {
    /// Derive the generator setting for `baud` from an input clock of `clock_hz`.
    ///
    /// 1 MHz at 9600 baud gives divisor 104 with modulation 1. A clock too fast for a 16-bit
    /// divisor saturates at `u16::MAX` with no modulation.
    pub fn for_baud(clock_hz: u32, baud: u32) -> Self {
        let mut divisor = clock_hz / baud;
        let remainder = clock_hz % baud;
        let mut modulation = (remainder * 8 + baud / 2) / baud;
        if modulation == 8 {
            divisor += 1;
            modulation = 0;
        }
        match u16::try_from(divisor) {
            Ok(divisor) => Self {
                divisor,
                modulation: modulation as u8,
            },
            Err(_) => Self {
                divisor: u16::MAX,
                modulation: 0,
            },
        }
    }

    /// Divisor rounded to the nearest integer, for generators without fractional modulation.
    #[inline]
    pub fn rounded_divisor(&self) -> u16 {
        if self.modulation >= 4 {
            self.divisor.saturating_add(1)
        } else {
            self.divisor
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Polarity {
    IdleLow,
    IdleHigh,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    CaptureOnFirstTransition,
    CaptureOnSecondTransition,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Mode {
    pub polarity: Polarity,
    pub phase: Phase,
}

/// CPOL = 0, CPHA = 0.
pub const MODE_0: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Control word for a 3-wire, 8-bit synchronous master.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpiControl {
    pub mode: Mode,
    pub bit_order: BitOrder,
    /// Bus clock = peripheral clock / `clock_divider`.
    pub clock_divider: u16,
}

impl SpiControl {
    pub const fn master(mode: Mode, clock_divider: u16) -> Self {
        Self {
            mode,
            bit_order: BitOrder::MsbFirst,
            clock_divider,
        }
    }
}

/// Power-of-two prescaler field, `clock / 2^(bits + 1)`, for a requested `divider`.
///
/// Dividers are rounded up to the next power of two and clamped to 2..=256, so the bus never
/// runs faster than asked.
pub fn baud_rate_bits(divider: u16) -> u8 {
    let div = divider.clamp(2, 256).next_power_of_two();
    (div.trailing_zeros() - 1) as u8
}

/// UART transmit path.
pub trait UartRegisters {
    /// Set the software reset bit, stopping the peripheral state machine.
    fn hold_reset(&mut self);
    /// Route the TX/RX pins to the peripheral.
    fn configure_pins(&mut self);
    /// Program 8N1 framing and the baud-rate generator.
    fn write_timing(&mut self, timing: &UartTiming);
    /// Clear the software reset bit.
    fn release_reset(&mut self);
    /// Transmit buffer can take another byte.
    fn tx_ready(&self) -> bool;
    fn write_tx(&mut self, byte: u8);
}

/// SPI master plus its manually driven chip-select line.
pub trait SpiRegisters {
    fn hold_reset(&mut self);
    /// Program clock phase/polarity, bit order, master + synchronous mode, and clock source.
    fn write_control(&mut self, control: &SpiControl);
    /// Route SCK/MISO/MOSI to the peripheral and make CS an output driven high.
    fn configure_pins(&mut self);
    fn release_reset(&mut self);
    fn set_chip_select(&mut self, level: PinLevel);
    fn write_tx(&mut self, byte: u8);
    /// The last byte written has been fully exchanged on the bus.
    fn transfer_complete(&self) -> bool;
    fn read_rx(&mut self) -> u8;
}
