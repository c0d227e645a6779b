// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F7 register adapters using direct PAC register access.
//!
//! "Held in reset" maps onto the enable bit of each peripheral: USART CR1.UE and SPI CR1.SPE.
//! Both peripherals only accept framing and clock changes while that bit is clear.

use core::ptr;

use regdump::hw::{
    regs::{baud_rate_bits, BitOrder, Phase, Polarity},
    PinLevel, SpiControl, SpiRegisters, SystemControl, UartRegisters, UartTiming,
};
use stm32f7xx_hal::{pac, rcc::Clocks};

use crate::board::{Spi1Pins, Usart3Pins};

/// Clock tree (already frozen through the HAL) and watchdog.
pub struct Stm32System {
    clocks: Clocks,
    iwdg: pac::IWDG,
}

impl Stm32System {
    pub fn new(clocks: Clocks, iwdg: pac::IWDG) -> Self {
        Self { clocks, iwdg }
    }
}

impl SystemControl for Stm32System {
    fn stop_watchdog(&mut self) {
        // The IWDG cannot be stopped once an option byte has started it; reload it instead.
        self.iwdg.kr.write(|w| w.key().reset());
    }

    fn select_calibrated_clock(&mut self) -> u32 {
        // Default `cfgr.freeze()` runs SYSCLK from the 16 MHz HSI with all buses at /1, so
        // APB1 (USART3) and APB2 (SPI1) share one clock.
        self.clocks.pclk1().raw()
    }
}

/// USART3 transmit path on PD8/PD9.
pub struct Usart3Registers {
    usart: pac::USART3,
    _pins: Usart3Pins,
}

impl Usart3Registers {
    pub fn new(usart: pac::USART3, pins: Usart3Pins) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.usart3en().set_bit());
        cortex_m::asm::dsb();

        Self { usart, _pins: pins }
    }
}

impl UartRegisters for Usart3Registers {
    fn hold_reset(&mut self) {
        self.usart.cr1.modify(|_, w| w.ue().clear_bit());
    }

    fn configure_pins(&mut self) {
        // PD8/PD9 arrive already switched to AF7 by `BoardPins`.
    }

    fn write_timing(&mut self, timing: &UartTiming) {
        // 8 data bits, no parity, 16x oversampling, transmitter on
        self.usart.cr1.modify(|_, w| {
            w.m0().clear_bit();
            w.m1().clear_bit();
            w.pce().clear_bit();
            w.over8().clear_bit();
            w.te().set_bit();
            w
        });
        // 1 stop bit
        self.usart.cr2.modify(|_, w| unsafe { w.stop().bits(0b00) });
        self.usart
            .brr
            .write(|w| unsafe { w.bits(u32::from(timing.rounded_divisor())) });
    }

    fn release_reset(&mut self) {
        self.usart.cr1.modify(|_, w| w.ue().set_bit());
    }

    fn tx_ready(&self) -> bool {
        self.usart.isr.read().txe().bit_is_set()
    }

    fn write_tx(&mut self, byte: u8) {
        self.usart.tdr.write(|w| unsafe { w.bits(u32::from(byte)) });
    }
}

/// SPI1 on PA5/PA6/PA7 with a GPIO chip-select on PD14.
pub struct Spi1Registers {
    spi: pac::SPI1,
    pins: Spi1Pins,
}

impl Spi1Registers {
    pub fn new(spi: pac::SPI1, pins: Spi1Pins) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.spi1en().set_bit());
        cortex_m::asm::dsb();

        Self { spi, pins }
    }
}

impl SpiRegisters for Spi1Registers {
    fn hold_reset(&mut self) {
        self.spi.cr1.modify(|_, w| w.spe().clear_bit());
    }

    fn write_control(&mut self, control: &SpiControl) {
        // Software NSS (3-wire), master, SPE left clear
        self.spi.cr1.write(|w| {
            w.mstr().set_bit();
            w.ssm().set_bit();
            w.ssi().set_bit();
            unsafe { w.br().bits(baud_rate_bits(control.clock_divider)) };
            w.cpol().bit(control.mode.polarity == Polarity::IdleHigh);
            w.cpha()
                .bit(control.mode.phase == Phase::CaptureOnSecondTransition);
            w.lsbfirst().bit(control.bit_order == BitOrder::LsbFirst);
            w
        });

        // 8-bit frames; RXNE fires on a single byte
        self.spi.cr2.write(|w| {
            unsafe { w.ds().bits(0b0111) };
            w.frxth().set_bit();
            w
        });
    }

    fn configure_pins(&mut self) {
        // SCK/MISO/MOSI are already AF5; only CS needs its idle level.
        self.pins.cs.set_high();
    }

    fn release_reset(&mut self) {
        self.spi.cr1.modify(|_, w| w.spe().set_bit());
    }

    fn set_chip_select(&mut self, level: PinLevel) {
        match level {
            PinLevel::Low => self.pins.cs.set_low(),
            PinLevel::High => self.pins.cs.set_high(),
        }
    }

    fn write_tx(&mut self, byte: u8) {
        // Byte-wide access; a 16-bit write would pack two frames.
        unsafe { ptr::write_volatile(self.spi.dr.as_ptr() as *mut u8, byte) }
    }

    fn transfer_complete(&self) -> bool {
        self.spi.sr.read().rxne().bit_is_set()
    }

    fn read_rx(&mut self) -> u8 {
        unsafe { ptr::read_volatile(&self.spi.dr as *const _ as *const u8) }
    }
}
