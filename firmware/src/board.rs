// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI with an nRF24L01+ module on the Arduino header.
//!
//! | Signal | MCU pin | Goes to |
//! | ------ | ------- | ------- |
//! | USART3 TX | PD8 | ST-LINK VCP RX |
//! | USART3 RX | PD9 | ST-LINK VCP TX |
//! | SPI1 SCK | PA5 (D13) | nRF SCK |
//! | SPI1 MISO | PA6 (D12) | nRF MISO |
//! | SPI1 MOSI | PA7 (D11) | nRF MOSI |
//! | CS | PD14 (D10) | nRF CSN |
//!
//! The nRF24L01+ also needs VCC on 3.3 V, GND, and CE tied to 3.3 V.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

pub struct BoardPins {
    pub usart3: Usart3Pins,
    pub spi1: Spi1Pins,
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// SPI1 SCK/MISO/MOSI and CS
pub struct Spi1Pins {
    pub sck: gpioa::PA5<Alternate<5>>,
    pub miso: gpioa::PA6<Alternate<5>>,
    pub mosi: gpioa::PA7<Alternate<5>>,
    pub cs: gpiod::PD14<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();

        Self {
            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
            spi1: Spi1Pins {
                sck: gpioa.pa5.into_alternate::<5>(),
                miso: gpioa.pa6.into_alternate::<5>(),
                mosi: gpioa.pa7.into_alternate::<5>(),
                cs: gpiod.pd14.into_push_pull_output(),
            },
        }
    }
}
