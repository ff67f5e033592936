//! General Purpose Input / Output pin assignments
//!
//! Pins are described as plain data. A [`PinAssignment`] says which pin a
//! serial function lives on and how the pin must be driven; it is applied by
//! a [`GpioDriver`](crate::driver::GpioDriver).
use core::fmt;

/// GPIO bank
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl Port {
    /// Number of banks on the part
    pub const COUNT: usize = 5;

    pub const fn index(self) -> usize {
        self as usize
    }

    const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
        }
    }
}

/// A single pin: bank plus bit index (0..=15)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct PinId {
    port: Port,
    index: u8,
}

impl PinId {
    /// Panics (at compile time in const context) if `index` is not 0..=15.
    pub const fn new(port: Port, index: u8) -> Self {
        assert!(index < 16, "GPIO pin index out of range");
        PinId { port, index }
    }

    pub const fn port(&self) -> Port {
        self.port
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Usable in const context where `PartialEq` is not
    pub const fn same_as(&self, other: &PinId) -> bool {
        self.port as u8 == other.port as u8 && self.index == other.index
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port.letter(), self.index)
    }
}

macro_rules! pins {
    ($($PXi:ident: ($port:ident, $i:expr),)+) => {
        $(
            #[doc = concat!("Pin ", stringify!($PXi))]
            pub const $PXi: PinId = PinId::new(Port::$port, $i);
        )+
    };
}

pins!(
    PA0: (A, 0),
    PA1: (A, 1),
    PA2: (A, 2),
    PA3: (A, 3),
    PA9: (A, 9),
    PA10: (A, 10),
    PB8: (B, 8),
    PB9: (B, 9),
    PC6: (C, 6),
    PC7: (C, 7),
    PD8: (D, 8),
    PD9: (D, 9),
    PE0: (E, 0),
    PE1: (E, 1),
    PE7: (E, 7),
    PE8: (E, 8),
);

/// Signal direction as seen from the MCU
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Output,
    Input,
}

/// How the pin is wired internally
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ElectricalMode {
    /// Push-pull output routed from a peripheral through the pin multiplexer
    AlternateFunction,
    /// Input buffer only; the peripheral samples the line
    PlainInput,
}

/// GPIO drive strength selection
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Speed {
    /// Stronger sourcing/sinking strength
    Stronger = 1,
    /// Moderate sourcing/sinking strength
    Moderate = 2,
    /// Maximum sourcing/sinking strength
    Maximum = 3,
}

/// Internal pull resistor
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// One GPIO pin used by a peripheral function
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PinAssignment {
    pub pin: PinId,
    pub direction: Direction,
    pub mode: ElectricalMode,
    pub speed: Speed,
    pub pull: Pull,
}

impl PinAssignment {
    /// Transmit pin: push-pull alternate function output, moderate drive, no pull
    pub const fn tx(pin: PinId) -> Self {
        PinAssignment {
            pin,
            direction: Direction::Output,
            mode: ElectricalMode::AlternateFunction,
            speed: Speed::Moderate,
            pull: Pull::None,
        }
    }

    /// Receive pin: floating input, moderate drive, no pull
    pub const fn rx(pin: PinId) -> Self {
        PinAssignment {
            pin,
            direction: Direction::Input,
            mode: ElectricalMode::PlainInput,
            speed: Speed::Moderate,
            pull: Pull::None,
        }
    }

    pub const fn is_tx(&self) -> bool {
        matches!(self.direction, Direction::Output)
            && matches!(self.mode, ElectricalMode::AlternateFunction)
    }

    pub const fn is_rx(&self) -> bool {
        matches!(self.direction, Direction::Input) && matches!(self.mode, ElectricalMode::PlainInput)
    }
}
