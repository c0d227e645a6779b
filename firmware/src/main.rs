#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{pac, prelude::*};
use stm32f7xx_hal as hal;

use regdump::{
    app,
    hw::{SerialOut, SpiMaster},
};

mod board;
mod regs;
use board::BoardPins;
use regs::{Spi1Registers, Stm32System, Usart3Registers};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut system = Stm32System::new(clocks, dp.IWDG);

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD);

    // USART3 (ST-LINK VCP), 9600 8N1
    let mut serial = SerialOut::new(Usart3Registers::new(dp.USART3, pins.usart3));

    // SPI1 -> nRF24L01+
    let mut spi = SpiMaster::new(Spi1Registers::new(dp.SPI1, pins.spi1));

    // Nothing is left to report a failure on; hang either way.
    let _ = app::run(&mut system, &mut serial, &mut spi);

    app::idle()
}
