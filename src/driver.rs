//! Hardware capabilities consumed by the bring-up engine
//!
//! The engine never touches registers itself. It drives these traits, so a
//! board can plug in the register-level [`Mmio`](crate::mmio::Mmio) driver and a
//! test harness can plug in a recording fake.
use core::fmt;

use crate::gpio::PinAssignment;
use crate::iomux::RemapSelector;
use crate::peripheral::PeripheralId;
use crate::serial::{FlowControl, Parity, StopBits, WordLength};
use crate::time::Bps;

/// A driver primitive reports the hardware did not take a configuration
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HardwareFault {
    /// A register did not read back the value that was written
    WriteNotAccepted,
    /// The requested parameters cannot be produced with the current clocks
    InvalidConfig,
    /// The part has no support for the requested feature
    Unsupported,
}

impl fmt::Display for HardwareFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareFault::WriteNotAccepted => f.write_str("register write not accepted"),
            HardwareFault::InvalidConfig => f.write_str("configuration not achievable"),
            HardwareFault::Unsupported => f.write_str("not supported by this part"),
        }
    }
}

/// GPIO pin configuration
pub trait GpioDriver {
    fn configure_pin(&mut self, assignment: &PinAssignment) -> Result<(), HardwareFault>;
}

/// UART/USART line programming
pub trait UsartDriver {
    /// Program baud rate, data width and stop bits
    fn configure_line(
        &mut self,
        id: PeripheralId,
        baudrate: Bps,
        wordlength: WordLength,
        stopbits: StopBits,
    ) -> Result<(), HardwareFault>;

    fn set_parity(&mut self, id: PeripheralId, parity: Parity) -> Result<(), HardwareFault>;

    fn set_flow_control(
        &mut self,
        id: PeripheralId,
        flow_control: FlowControl,
    ) -> Result<(), HardwareFault>;

    fn set_transmit_enabled(&mut self, id: PeripheralId, enabled: bool)
        -> Result<(), HardwareFault>;

    fn set_receive_enabled(&mut self, id: PeripheralId, enabled: bool)
        -> Result<(), HardwareFault>;

    /// Whole-peripheral enable; must come after all other line settings
    fn set_peripheral_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault>;
}

/// Pin multiplexer group selection
pub trait IomuxDriver {
    fn select_remap(&mut self, selector: RemapSelector, enabled: bool)
        -> Result<(), HardwareFault>;
}

/// Everything the bring-up engine needs
pub trait Driver: GpioDriver + UsartDriver + IomuxDriver {}

impl<D> Driver for D where D: GpioDriver + UsartDriver + IomuxDriver {}

impl<D: GpioDriver + ?Sized> GpioDriver for &mut D {
    fn configure_pin(&mut self, assignment: &PinAssignment) -> Result<(), HardwareFault> {
        (**self).configure_pin(assignment)
    }
}

impl<D: UsartDriver + ?Sized> UsartDriver for &mut D {
    fn configure_line(
        &mut self,
        id: PeripheralId,
        baudrate: Bps,
        wordlength: WordLength,
        stopbits: StopBits,
    ) -> Result<(), HardwareFault> {
        (**self).configure_line(id, baudrate, wordlength, stopbits)
    }

    fn set_parity(&mut self, id: PeripheralId, parity: Parity) -> Result<(), HardwareFault> {
        (**self).set_parity(id, parity)
    }

    fn set_flow_control(
        &mut self,
        id: PeripheralId,
        flow_control: FlowControl,
    ) -> Result<(), HardwareFault> {
        (**self).set_flow_control(id, flow_control)
    }

    fn set_transmit_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        (**self).set_transmit_enabled(id, enabled)
    }

    fn set_receive_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        (**self).set_receive_enabled(id, enabled)
    }

    fn set_peripheral_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        (**self).set_peripheral_enabled(id, enabled)
    }
}

impl<D: IomuxDriver + ?Sized> IomuxDriver for &mut D {
    fn select_remap(
        &mut self,
        selector: RemapSelector,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        (**self).select_remap(selector, enabled)
    }
}
