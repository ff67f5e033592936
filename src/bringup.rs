//! Bring-up engine
//!
//! Applies [`PeripheralDescriptor`]s to hardware through a [`Driver`]. For each
//! descriptor the engine configures the TX pin, the RX pin, the optional GMUX
//! remap, then the line, and enables the controller last. Descriptors are
//! applied in table order and the first [`HardwareFault`] halts the run, so a
//! controller is never left enabled with half of its settings.
//!
//! ```
//! # use at32_uart_bringup::{bringup::BringUp, driver::*, gpio::*, iomux::*};
//! # use at32_uart_bringup::{peripheral::PeripheralId, serial::*, time::Bps};
//! # struct Nop;
//! # impl GpioDriver for Nop {
//! #     fn configure_pin(&mut self, _: &PinAssignment) -> Result<(), HardwareFault> { Ok(()) }
//! # }
//! # impl IomuxDriver for Nop {
//! #     fn select_remap(&mut self, _: RemapSelector, _: bool) -> Result<(), HardwareFault> { Ok(()) }
//! # }
//! # impl UsartDriver for Nop {
//! #     fn configure_line(&mut self, _: PeripheralId, _: Bps, _: WordLength, _: StopBits) -> Result<(), HardwareFault> { Ok(()) }
//! #     fn set_parity(&mut self, _: PeripheralId, _: Parity) -> Result<(), HardwareFault> { Ok(()) }
//! #     fn set_flow_control(&mut self, _: PeripheralId, _: FlowControl) -> Result<(), HardwareFault> { Ok(()) }
//! #     fn set_transmit_enabled(&mut self, _: PeripheralId, _: bool) -> Result<(), HardwareFault> { Ok(()) }
//! #     fn set_receive_enabled(&mut self, _: PeripheralId, _: bool) -> Result<(), HardwareFault> { Ok(()) }
//! #     fn set_peripheral_enabled(&mut self, _: PeripheralId, _: bool) -> Result<(), HardwareFault> { Ok(()) }
//! # }
//! # let driver = Nop;
//! let mut bringup = BringUp::new(driver);
//! bringup.apply_all(&at32_uart_bringup::board::DESCRIPTORS).unwrap();
//! assert!(bringup.is_configured(PeripheralId::Uart5));
//! ```
use core::fmt;

use crate::board;
use crate::descriptor::{self, Defect, PeripheralDescriptor};
use crate::driver::{Driver, HardwareFault};
use crate::gpio::PinId;
use crate::logger::{debug, error, info, trace};
use crate::peripheral::{PeripheralId, PeripheralSet};

/// One step of a descriptor's bring-up sequence, in execution order
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum Step {
    TxPin,
    RxPin,
    Remap,
    Line,
    Transmitter,
    Receiver,
    Parity,
    FlowControl,
    Enable,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::TxPin => "tx pin",
            Step::RxPin => "rx pin",
            Step::Remap => "remap",
            Step::Line => "line",
            Step::Transmitter => "transmitter",
            Step::Receiver => "receiver",
            Step::Parity => "parity",
            Step::FlowControl => "flow control",
            Step::Enable => "enable",
        })
    }
}

/// Bring-up error
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Two descriptors (or TX and RX of one descriptor) claim the same pin
    ConfigurationConflict {
        pin: PinId,
        first: PeripheralId,
        second: PeripheralId,
    },
    /// A TX pin that is not an alternate function output, or an RX pin that is not an input
    MisassignedPin { peripheral: PeripheralId, pin: PinId },
    /// The same controller is described twice
    DuplicatePeripheral { peripheral: PeripheralId },
    /// The driver rejected a step; the controller was not enabled
    HardwareFault {
        peripheral: PeripheralId,
        step: Step,
        fault: HardwareFault,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationConflict { pin, first, second } => {
                write!(f, "{} claimed by both {} and {}", pin, first, second)
            }
            Error::MisassignedPin { peripheral, pin } => {
                write!(f, "{}: {} used in the wrong role", peripheral, pin)
            }
            Error::DuplicatePeripheral { peripheral } => {
                write!(f, "{} described more than once", peripheral)
            }
            Error::HardwareFault {
                peripheral,
                step,
                fault,
            } => write!(f, "{}: {} failed: {}", peripheral, step, fault),
        }
    }
}

/// Check a descriptor table before any hardware is touched
pub fn validate(descriptors: &[PeripheralDescriptor]) -> Result<(), Error> {
    match descriptor::check(descriptors) {
        None => Ok(()),
        Some(Defect::Conflict { pin, first, second }) => Err(Error::ConfigurationConflict {
            pin,
            first: descriptors[first].id,
            second: descriptors[second].id,
        }),
        Some(Defect::Misassigned { pin, entry }) => Err(Error::MisassignedPin {
            peripheral: descriptors[entry].id,
            pin,
        }),
        Some(Defect::DuplicateId { entry, .. }) => Err(Error::DuplicatePeripheral {
            peripheral: descriptors[entry].id,
        }),
    }
}

/// Bring-up engine owning (or borrowing, via `&mut D`) a driver
pub struct BringUp<D> {
    driver: D,
    configured: PeripheralSet,
}

impl<D> BringUp<D>
where
    D: Driver,
{
    pub fn new(driver: D) -> Self {
        BringUp {
            driver,
            configured: PeripheralSet::empty(),
        }
    }

    /// Apply one descriptor.
    ///
    /// Re-applying a descriptor issues exactly the same driver calls again; the
    /// configured state is only used for reporting.
    pub fn apply(&mut self, descriptor: &PeripheralDescriptor) -> Result<(), Error> {
        let id = descriptor.id;
        let line = &descriptor.line;
        debug!("{}: tx {} rx {} line {}", id, descriptor.tx.pin, descriptor.rx.pin, line);

        self.step(id, Step::TxPin, |d| d.configure_pin(&descriptor.tx))?;
        self.step(id, Step::RxPin, |d| d.configure_pin(&descriptor.rx))?;
        if let Some(selector) = descriptor.remap {
            self.step(id, Step::Remap, |d| d.select_remap(selector, true))?;
        }
        self.step(id, Step::Line, |d| {
            d.configure_line(id, line.baudrate, line.wordlength, line.stopbits)
        })?;
        self.step(id, Step::Transmitter, |d| d.set_transmit_enabled(id, true))?;
        self.step(id, Step::Receiver, |d| d.set_receive_enabled(id, true))?;
        self.step(id, Step::Parity, |d| d.set_parity(id, line.parity))?;
        self.step(id, Step::FlowControl, |d| d.set_flow_control(id, line.flow_control))?;
        self.step(id, Step::Enable, |d| d.set_peripheral_enabled(id, true))?;

        self.configured |= id.flag();
        info!("{} configured", id);
        Ok(())
    }

    /// Validate `descriptors`, then apply them in table order.
    ///
    /// Stops at the first fault. Controllers completed before the fault stay
    /// in [`configured`](Self::configured).
    pub fn apply_all(&mut self, descriptors: &[PeripheralDescriptor]) -> Result<PeripheralSet, Error> {
        if let Err(e) = validate(descriptors) {
            error!("descriptor table rejected: {}", e);
            return Err(e);
        }
        for descriptor in descriptors {
            self.apply(descriptor)?;
        }
        Ok(self.configured)
    }

    /// Apply the board descriptor of a single controller.
    ///
    /// Returns `Ok(false)` if the board does not wire `id`.
    pub fn bring_up(&mut self, id: PeripheralId) -> Result<bool, Error> {
        match board::descriptor(id) {
            Some(descriptor) => self.apply(descriptor).map(|_| true),
            None => Ok(false),
        }
    }

    /// Controllers that completed bring-up
    pub fn configured(&self) -> PeripheralSet {
        self.configured
    }

    pub fn is_configured(&self, id: PeripheralId) -> bool {
        self.configured.contains_id(id)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Releases the driver
    pub fn release(self) -> D {
        self.driver
    }

    fn step<F>(&mut self, id: PeripheralId, step: Step, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut D) -> Result<(), HardwareFault>,
    {
        trace!("{}: {}", id, step);
        f(&mut self.driver).map_err(|fault| {
            error!("{}: {} failed: {}", id, step, fault);
            Error::HardwareFault {
                peripheral: id,
                step,
                fault,
            }
        })
    }
}

/// Apply `descriptors` in order through `driver`
pub fn apply_all<D: Driver>(
    descriptors: &[PeripheralDescriptor],
    driver: D,
) -> Result<PeripheralSet, Error> {
    BringUp::new(driver).apply_all(descriptors)
}

/// Bring up every serial controller wired on the board.
///
/// Call once during start-up, after the peripheral clocks are enabled and
/// before anything uses a serial port.
pub fn bring_up_all_serial_peripherals<D: Driver>(driver: D) -> Result<PeripheralSet, Error> {
    apply_all(&board::DESCRIPTORS, driver)
}
