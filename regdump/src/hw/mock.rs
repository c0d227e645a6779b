// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording register mocks for host tests.

use std::{cell::Cell, collections::VecDeque, vec::Vec};

use super::regs::{PinLevel, SpiControl, SpiRegisters, UartRegisters, UartTiming};
use super::system::SystemControl;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UartEvent {
    HoldReset,
    ConfigurePins,
    Timing(UartTiming),
    ReleaseReset,
    Tx(u8),
}

/// UART mock: records every register operation; reports "not ready" for `busy_polls` polls
/// before each byte.
#[derive(Default)]
pub struct MockUart {
    pub events: Vec<UartEvent>,
    pub busy_polls: u32,
    pending: Cell<u32>,
    pub stuck: bool,
}

impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every poll reports busy, like a peripheral with no clock.
    pub fn stuck() -> Self {
        Self {
            stuck: true,
            ..Self::default()
        }
    }

    /// Bytes written to the transmit buffer, in order.
    pub fn sent(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UartEvent::Tx(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl UartRegisters for MockUart {
    fn hold_reset(&mut self) {
        self.events.push(UartEvent::HoldReset);
    }

    fn configure_pins(&mut self) {
        self.events.push(UartEvent::ConfigurePins);
    }

    fn write_timing(&mut self, timing: &UartTiming) {
        self.events.push(UartEvent::Timing(*timing));
    }

    fn release_reset(&mut self) {
        self.events.push(UartEvent::ReleaseReset);
    }

    fn tx_ready(&self) -> bool {
        if self.stuck {
            return false;
        }
        let n = self.pending.get();
        if n < self.busy_polls {
            self.pending.set(n + 1);
            false
        } else {
            true
        }
    }

    fn write_tx(&mut self, byte: u8) {
        self.pending.set(0);
        self.events.push(UartEvent::Tx(byte));
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpiEvent {
    HoldReset,
    Control(SpiControl),
    ConfigurePins,
    ReleaseReset,
    ChipSelect(PinLevel),
    Tx(u8),
    Rx(u8),
}

/// SPI mock with scripted receive bytes. Once the script runs out, the bus reads back 0xFF
/// (MISO pulled high, nothing driving it).
#[derive(Default)]
pub struct MockSpi {
    pub events: Vec<SpiEvent>,
    pub rx_script: VecDeque<u8>,
    pub busy_polls: u32,
    pending: Cell<u32>,
    pub stuck: bool,
    latched: u8,
}

impl MockSpi {
    pub fn with_rx(rx: &[u8]) -> Self {
        Self {
            rx_script: rx.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn stuck() -> Self {
        Self {
            stuck: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SpiEvent::Tx(b) => Some(*b),
                _ => None,
            })
            .collect()
    }
}

impl SpiRegisters for MockSpi {
    fn hold_reset(&mut self) {
        self.events.push(SpiEvent::HoldReset);
    }

    fn write_control(&mut self, control: &SpiControl) {
        self.events.push(SpiEvent::Control(*control));
    }

    fn configure_pins(&mut self) {
        self.events.push(SpiEvent::ConfigurePins);
        self.events.push(SpiEvent::ChipSelect(PinLevel::High));
    }

    fn release_reset(&mut self) {
        self.events.push(SpiEvent::ReleaseReset);
    }

    fn set_chip_select(&mut self, level: PinLevel) {
        self.events.push(SpiEvent::ChipSelect(level));
    }

    fn write_tx(&mut self, byte: u8) {
        self.pending.set(0);
        self.latched = self.rx_script.pop_front().unwrap_or(0xFF);
        self.events.push(SpiEvent::Tx(byte));
    }

    fn transfer_complete(&self) -> bool {
        if self.stuck {
            return false;
        }
        let n = self.pending.get();
        if n < self.busy_polls {
            self.pending.set(n + 1);
            false
        } else {
            true
        }
    }

    fn read_rx(&mut self) -> u8 {
        self.events.push(SpiEvent::Rx(self.latched));
        self.latched
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SystemEvent {
    StopWatchdog,
    SelectClock,
}

pub struct MockSystem {
    pub events: Vec<SystemEvent>,
    pub clock_hz: u32,
}

impl MockSystem {
    pub fn new(clock_hz: u32) -> Self {
        Self {
            events: Vec::new(),
            clock_hz,
        }
    }
}

impl SystemControl for MockSystem {
    fn stop_watchdog(&mut self) {
        self.events.push(SystemEvent::StopWatchdog);
    }

    fn select_calibrated_clock(&mut self) -> u32 {
        self.events.push(SystemEvent::SelectClock);
        self.clock_hz
    }
}
