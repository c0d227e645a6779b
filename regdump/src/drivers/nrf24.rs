//! nRF24L01+ SPI command layer.
//!
//! Every command starts with CS going low. The byte clocked back during the command byte is
//! always the STATUS register; the following bytes carry the command's payload. Only register
//! reads are implemented here.

use crate::error::Result;
use crate::hw::{SpiMaster, SpiRegisters};

// Command words
pub mod cmd {
    /// `000A_AAAA`: read register `A`.
    pub const R_REGISTER: u8 = 0x00;
    /// No operation; used to clock out response bytes.
    pub const NOP: u8 = 0xFF;
}

/// Register address bits of `R_REGISTER`.
pub const REGISTER_MASK: u8 = 0x1F;

// Register addresses
pub mod reg {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const FIFO_STATUS: u8 = 0x17;
}

/// STATUS byte shifted out while the command byte is clocked in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Status {
    raw: u8,
}

impl Status {
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn raw(&self) -> u8 {
        self.raw
    }

    /// Data ready in RX FIFO.
    #[inline]
    pub fn rx_dr(&self) -> bool {
        (self.raw & (1 << 6)) != 0
    }

    /// Data sent (and ACK received, if enabled).
    #[inline]
    pub fn tx_ds(&self) -> bool {
        (self.raw & (1 << 5)) != 0
    }

    /// Maximum number of retransmits reached.
    #[inline]
    pub fn max_rt(&self) -> bool {
        (self.raw & (1 << 4)) != 0
    }

    /// Pipe number of the payload at the head of the RX FIFO, or `None` when it is empty.
    #[inline]
    pub fn rx_p_no(&self) -> Option<u8> {
        match (self.raw >> 1) & 0x07 {
            0b111 | 0b110 => None,
            pipe => Some(pipe),
        }
    }

    /// TX FIFO full.
    #[inline]
    pub fn tx_full(&self) -> bool {
        (self.raw & 1) != 0
    }
}

/// CONFIG register.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    raw: u8,
}

impl Config {
    pub const fn from_raw(raw: u8) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn raw(&self) -> u8 {
        self.raw
    }

    #[inline]
    pub fn mask_rx_dr(&self) -> bool {
        (self.raw & (1 << 6)) != 0
    }

    #[inline]
    pub fn mask_tx_ds(&self) -> bool {
        (self.raw & (1 << 5)) != 0
    }

    #[inline]
    pub fn mask_max_rt(&self) -> bool {
        (self.raw & (1 << 4)) != 0
    }

    /// CRC enabled.
    #[inline]
    pub fn en_crc(&self) -> bool {
        (self.raw & (1 << 3)) != 0
    }

    /// CRC length: false = 1 byte, true = 2 bytes.
    #[inline]
    pub fn crco(&self) -> bool {
        (self.raw & (1 << 2)) != 0
    }

    #[inline]
    pub fn pwr_up(&self) -> bool {
        (self.raw & (1 << 1)) != 0
    }

    /// RX/TX control: true = PRX, false = PTX.
    #[inline]
    pub fn prim_rx(&self) -> bool {
        (self.raw & 1) != 0
    }
}

/// Response of a single register read:
/// - status byte (clocked out with the command)
/// - register contents (clocked out with the NOP)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Response {
    pub status: Status,
    pub value: u8,
}

#[inline]
fn read_command(addr: u8) -> u8 {
    cmd::R_REGISTER | (addr & REGISTER_MASK)
}

/// Read one register in a single CS-framed, two-byte transaction.
///
/// CS is released even if a transfer fails part way through.
pub fn read_register<R: SpiRegisters>(spi: &mut SpiMaster<R>, addr: u8) -> Result<Response> {
    spi.select_low();
    let result = exchange(spi, read_command(addr));
    spi.select_high();

    let (status, value) = result?;
    log::debug!("nrf24: reg {:#04x} = {:#04x} (status {:#04x})", addr, value, status);
    Ok(Response {
        status: Status::from_raw(status),
        value,
    })
}

fn exchange<R: SpiRegisters>(spi: &mut SpiMaster<R>, command: u8) -> Result<(u8, u8)> {
    let status = spi.transfer_byte(command)?;
    let value = spi.transfer_byte(cmd::NOP)?;
    Ok((status, value))
}

/// Read and decode CONFIG.
pub fn read_config<R: SpiRegisters>(spi: &mut SpiMaster<R>) -> Result<(Status, Config)> {
    let resp = read_register(spi, reg::CONFIG)?;
    Ok((resp.status, Config::from_raw(resp.value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hw::mock::{MockSpi, SpiEvent};
    use crate::hw::regs::{PinLevel, SpiControl, MODE_0};
    use crate::hw::WaitPolicy;

    fn bus(rx: &[u8]) -> SpiMaster<MockSpi> {
        let mut spi = SpiMaster::new(MockSpi::with_rx(rx));
        spi.init(&SpiControl::master(MODE_0, 16)).unwrap();
        spi
    }

    /// Events from the first CS assertion onward.
    fn transaction(spi: &SpiMaster<MockSpi>) -> &[SpiEvent] {
        let ev = &spi.regs().events;
        let start = ev
            .iter()
            .position(|e| *e == SpiEvent::ChipSelect(PinLevel::Low))
            .unwrap();
        &ev[start..]
    }

    #[test]
    fn read_config_register() {
        let mut spi = bus(&[0x0E, 0x08]);
        let resp = read_register(&mut spi, reg::CONFIG).unwrap();
        assert_eq!(resp.status.raw(), 0x0E);
        assert_eq!(resp.value, 0x08);
        assert_eq!(
            transaction(&spi),
            [
                SpiEvent::ChipSelect(PinLevel::Low),
                SpiEvent::Tx(0x00),
                SpiEvent::Rx(0x0E),
                SpiEvent::Tx(0xFF),
                SpiEvent::Rx(0x08),
                SpiEvent::ChipSelect(PinLevel::High),
            ]
        );
    }

    #[test]
    fn address_is_masked_into_command() {
        let mut spi = bus(&[0x0E, 0x03]);
        read_register(&mut spi, reg::SETUP_AW).unwrap();
        assert_eq!(spi.regs().sent(), [0x03, cmd::NOP]);

        let mut spi = bus(&[]);
        read_register(&mut spi, 0xE7).unwrap();
        assert_eq!(spi.regs().sent(), [0x07, cmd::NOP]);
    }

    #[test]
    fn cs_released_when_transfer_fails() {
        let mut spi = SpiMaster::new(MockSpi::stuck()).with_wait_policy(WaitPolicy::Polls(2));
        spi.init(&SpiControl::master(MODE_0, 16)).unwrap();
        assert_eq!(
            read_register(&mut spi, reg::CONFIG),
            Err(Error::Timeout { polls: 2 })
        );
        assert_eq!(
            spi.regs().events.last(),
            Some(&SpiEvent::ChipSelect(PinLevel::High))
        );
        assert_eq!(spi.regs().sent(), [0x00]);
    }

    #[test]
    fn power_on_defaults_decode() {
        let mut spi = bus(&[0x0E, 0x08]);
        let (status, config) = read_config(&mut spi).unwrap();

        assert!(!status.rx_dr());
        assert!(!status.tx_ds());
        assert!(!status.max_rt());
        assert_eq!(status.rx_p_no(), None);
        assert!(!status.tx_full());

        assert!(config.en_crc());
        assert!(!config.crco());
        assert!(!config.pwr_up());
        assert!(!config.prim_rx());
        assert!(!config.mask_rx_dr());
    }

    #[test]
    fn status_flags() {
        let s = Status::from_raw(0b0111_0011);
        assert!(s.rx_dr());
        assert!(s.tx_ds());
        assert!(s.max_rt());
        assert_eq!(s.rx_p_no(), Some(1));
        assert!(s.tx_full());
    }
}
