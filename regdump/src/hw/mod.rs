pub mod lifecycle;
pub mod regs;
pub mod spi;
pub mod system;
pub mod usart;
pub mod wait;

#[cfg(test)]
pub(crate) mod mock;

pub use lifecycle::{Lifecycle, PeripheralState};
pub use regs::{PinLevel, SpiControl, SpiRegisters, UartRegisters, UartTiming};
pub use spi::SpiMaster;
pub use system::SystemControl;
pub use usart::{SerialOut, SerialWrite};
pub use wait::WaitPolicy;
