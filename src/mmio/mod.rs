//! Register-level driver for the AT32F403A
//!
//! [`Mmio`] implements the [`Driver`](crate::driver::Driver) capability on top
//! of the GPIO, USART and IOMUX register blocks. Every write is read back and a
//! mismatch is reported as [`HardwareFault::WriteNotAccepted`].
//!
//! On target the blocks live at their fixed addresses ([`Mmio::steal`]). A
//! [`Shadow`] register file in RAM can stand in for them, which is how a
//! bring-up sequence can be dry-run and inspected on a host.
//!
//! Peripheral bus clocks and GPIO/IOMUX clocks must already be enabled.
use vcell::VolatileCell;

use crate::driver::{GpioDriver, HardwareFault, IomuxDriver, UsartDriver};
use crate::gpio::{PinAssignment, Port, Pull};
use crate::iomux::RemapSelector;
use crate::logger::{trace, warn};
use crate::peripheral::PeripheralId;
use crate::serial::{FlowControl, Parity, StopBits, WordLength};
use crate::time::{self, Bps, Hertz};

pub mod gpio;
pub mod iomux;
pub mod usart;

use self::usart::*;

/// IOMUX base address
pub const IOMUX: usize = 0x4001_0000;

/// GPIO base addresses, indexed by [`Port`]
pub const GPIO: [usize; Port::COUNT] = [
    0x4001_0800,
    0x4001_0C00,
    0x4001_1000,
    0x4001_1400,
    0x4001_1800,
];

/// USART/UART base addresses, indexed by [`PeripheralId`]
pub const USART: [usize; 8] = [
    0x4001_3800,
    0x4000_4400,
    0x4000_4800,
    0x4000_4C00,
    0x4000_5000,
    0x4001_6000,
    0x4001_6400,
    0x4001_6800,
];

/// Peripheral bus a controller is clocked from
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Bus {
    Apb1,
    Apb2,
}

impl Bus {
    pub const fn of(id: PeripheralId) -> Bus {
        match id {
            PeripheralId::Usart1 | PeripheralId::Usart6 | PeripheralId::Uart7 | PeripheralId::Uart8 => {
                Bus::Apb2
            }
            PeripheralId::Usart2 | PeripheralId::Usart3 | PeripheralId::Uart4 | PeripheralId::Uart5 => {
                Bus::Apb1
            }
        }
    }
}

/// Bus clock frequencies
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clocks {
    /// APB1 frequency
    pub apb1: Hertz,
    /// APB2 frequency
    pub apb2: Hertz,
}

impl Clocks {
    pub fn apb1(mut self, freq: Hertz) -> Self {
        self.apb1 = freq;
        self
    }

    pub fn apb2(mut self, freq: Hertz) -> Self {
        self.apb2 = freq;
        self
    }

    /// Kernel clock of `id`
    pub fn usart_clock(&self, id: PeripheralId) -> Hertz {
        match Bus::of(id) {
            Bus::Apb1 => self.apb1,
            Bus::Apb2 => self.apb2,
        }
    }
}

impl Default for Clocks {
    /// Both APB buses at their 120 MHz maximum
    fn default() -> Clocks {
        Clocks {
            apb1: Hertz::from_raw(120_000_000),
            apb2: Hertz::from_raw(120_000_000),
        }
    }
}

/// RAM copy of every register block the driver touches, at reset values
pub struct Shadow {
    pub gpio: [gpio::RegisterBlock; Port::COUNT],
    pub usart: [usart::RegisterBlock; 8],
    pub iomux: iomux::RegisterBlock,
}

const GPIO_RESET: gpio::RegisterBlock = gpio::RegisterBlock::reset();
const USART_RESET: usart::RegisterBlock = usart::RegisterBlock::reset();

impl Shadow {
    pub const fn new() -> Self {
        Shadow {
            gpio: [GPIO_RESET; Port::COUNT],
            usart: [USART_RESET; 8],
            iomux: iomux::RegisterBlock::reset(),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Shadow::new()
    }
}

/// Register-level driver
pub struct Mmio<'a> {
    gpio: [&'a gpio::RegisterBlock; Port::COUNT],
    usart: [&'a usart::RegisterBlock; 8],
    iomux: &'a iomux::RegisterBlock,
    clocks: Clocks,
}

impl Mmio<'static> {
    /// Driver on the real register blocks.
    ///
    /// # Safety
    ///
    /// The caller must be the only code accessing the GPIO, USART and IOMUX
    /// blocks while the driver is alive, and must run on an AT32F403A.
    pub unsafe fn steal(clocks: Clocks) -> Self {
        Mmio {
            gpio: core::array::from_fn(|i| &*(GPIO[i] as *const gpio::RegisterBlock)),
            usart: core::array::from_fn(|i| &*(USART[i] as *const usart::RegisterBlock)),
            iomux: &*(IOMUX as *const iomux::RegisterBlock),
            clocks,
        }
    }
}

impl<'a> Mmio<'a> {
    /// Driver on a RAM register file
    pub fn shadowed(shadow: &'a Shadow, clocks: Clocks) -> Self {
        Mmio {
            gpio: core::array::from_fn(|i| &shadow.gpio[i]),
            usart: core::array::from_fn(|i| &shadow.usart[i]),
            iomux: &shadow.iomux,
            clocks,
        }
    }

    pub fn clocks(&self) -> Clocks {
        self.clocks
    }

    fn usart(&self, id: PeripheralId) -> &'a usart::RegisterBlock {
        self.usart[id.index()]
    }

    fn ctrl1(&self, id: PeripheralId, bits: u32, set: bool) -> Result<(), HardwareFault> {
        modify(&self.usart(id).ctrl1, |r| if set { r | bits } else { r & !bits })
    }
}

/// Write `value` and confirm the register holds it
fn write(reg: &VolatileCell<u32>, value: u32) -> Result<(), HardwareFault> {
    reg.set(value);
    let read = reg.get();
    if read == value {
        Ok(())
    } else {
        warn!("register wrote {:#x}, read back {:#x}", value, read);
        Err(HardwareFault::WriteNotAccepted)
    }
}

fn modify<F>(reg: &VolatileCell<u32>, f: F) -> Result<(), HardwareFault>
where
    F: FnOnce(u32) -> u32,
{
    write(reg, f(reg.get()))
}

impl<'a> GpioDriver for Mmio<'a> {
    fn configure_pin(&mut self, assignment: &PinAssignment) -> Result<(), HardwareFault> {
        let pin = assignment.pin;
        let port = self.gpio[pin.port().index()];
        let bit = 1u32 << pin.index();
        let bits = gpio::config_bits(assignment)?;
        trace!("{}: cfg {:#b}", pin, bits);

        match assignment.pull {
            Pull::Up => modify(&port.odt, |r| r | bit)?,
            Pull::Down => modify(&port.odt, |r| r & !bit)?,
            Pull::None => {}
        }

        let (cfg, shift) = port.cfg(pin.index());
        modify(cfg, |r| (r & !(0xF << shift)) | (bits << shift))?;

        let huge = gpio::huge_drive(assignment);
        modify(&port.hdrv, |r| if huge { r | bit } else { r & !bit })
    }
}

impl<'a> UsartDriver for Mmio<'a> {
    fn configure_line(
        &mut self,
        id: PeripheralId,
        baudrate: Bps,
        wordlength: WordLength,
        stopbits: StopBits,
    ) -> Result<(), HardwareFault> {
        let clk = self.clocks.usart_clock(id);
        let div = time::divisor(clk, baudrate).ok_or(HardwareFault::InvalidConfig)?;
        if !(BAUDR_MIN..=BAUDR_MAX).contains(&div) {
            warn!("{}: {} unreachable from {} Hz", id, baudrate, clk.raw());
            return Err(HardwareFault::InvalidConfig);
        }
        let nine = match wordlength {
            WordLength::DataBits8 => false,
            WordLength::DataBits9 => true,
            WordLength::DataBits7 => return Err(HardwareFault::Unsupported),
        };

        let usart = self.usart(id);
        trace!("{}: baudr {}", id, div);
        write(&usart.baudr, div)?;
        modify(&usart.ctrl1, |r| if nine { r | CTRL1_DBN } else { r & !CTRL1_DBN })?;
        modify(&usart.ctrl2, |r| {
            (r & !CTRL2_STOPBN_MASK) | (stopbits.bits() << CTRL2_STOPBN_SHIFT)
        })
    }

    fn set_parity(&mut self, id: PeripheralId, parity: Parity) -> Result<(), HardwareFault> {
        let bits = match parity {
            Parity::ParityNone => 0,
            Parity::ParityEven => CTRL1_PEN,
            Parity::ParityOdd => CTRL1_PEN | CTRL1_PSEL,
        };
        modify(&self.usart(id).ctrl1, |r| {
            (r & !(CTRL1_PEN | CTRL1_PSEL)) | bits
        })
    }

    fn set_flow_control(
        &mut self,
        id: PeripheralId,
        flow_control: FlowControl,
    ) -> Result<(), HardwareFault> {
        let mut bits = 0;
        if flow_control.rts() {
            bits |= CTRL3_RTSEN;
        }
        if flow_control.cts() {
            bits |= CTRL3_CTSEN;
        }
        modify(&self.usart(id).ctrl3, |r| {
            (r & !(CTRL3_RTSEN | CTRL3_CTSEN)) | bits
        })
    }

    fn set_transmit_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        self.ctrl1(id, CTRL1_TEN, enabled)
    }

    fn set_receive_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        self.ctrl1(id, CTRL1_REN, enabled)
    }

    fn set_peripheral_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        self.ctrl1(id, CTRL1_UEN, enabled)
    }
}

impl<'a> IomuxDriver for Mmio<'a> {
    fn select_remap(
        &mut self,
        selector: RemapSelector,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        trace!("remap {} {}", selector, enabled);
        modify(self.iomux.register(selector.register), |r| {
            selector.apply(r, enabled)
        })
    }
}
