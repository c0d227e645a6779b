// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One-shot bring-up and register dump.

use crate::config;
use crate::drivers::nrf24::{self, Config, Status};
use crate::error::Result;
use crate::hw::{
    SerialOut, SerialWrite, SpiMaster, SpiRegisters, SystemControl, UartRegisters, UartTiming,
};
use crate::report;

/// Values read back from the radio.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Readout {
    pub status: Status,
    pub config: Config,
}

/// Bring up clocks, serial, and SPI, read the nRF24 CONFIG register, and print it.
pub fn run<S, U, P>(
    system: &mut S,
    serial: &mut SerialOut<U>,
    spi: &mut SpiMaster<P>,
) -> Result<Readout>
where
    S: SystemControl,
    U: UartRegisters,
    P: SpiRegisters,
{
    system.stop_watchdog();
    let clock_hz = system.select_calibrated_clock();
    log::debug!("clock: {} Hz", clock_hz);

    serial.init(&UartTiming::for_baud(clock_hz, config::BAUD_RATE))?;
    spi.init(&config::SPI_CONTROL)?;

    serial.put_str(config::BANNER)?;

    let (status, conf) = nrf24::read_config(spi)?;

    serial.put_str(config::HEADER)?;
    report::print_register(serial, "status", status.raw())?;
    report::print_register(serial, "config", conf.raw())?;

    Ok(Readout {
        status,
        config: conf,
    })
}

/// Terminal state: spin forever.
pub fn idle() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
