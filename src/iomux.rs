//! Pin multiplexer (IOMUX) remap selection
//!
//! Some controllers only reach a given TX/RX pin pair when an alternate
//! multiplexer group (GMUX) is selected. A [`RemapSelector`] names one such
//! group as a field inside one of the IOMUX remap registers. The selection must
//! be committed before the controller is enabled, otherwise the multiplexer
//! routes the controller to its default pins.
use core::fmt;

/// IOMUX remap register holding a GMUX field
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RemapRegister {
    Remap,
    Remap2,
    Remap3,
    Remap4,
    Remap5,
    Remap6,
    Remap7,
    Remap8,
}

/// One GMUX field value
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RemapSelector {
    pub register: RemapRegister,
    pub shift: u8,
    pub width: u8,
    pub value: u8,
}

impl RemapSelector {
    pub const fn new(register: RemapRegister, shift: u8, width: u8, value: u8) -> Self {
        assert!(width > 0 && width <= 8, "GMUX field width out of range");
        assert!(shift as u32 + width as u32 <= 32, "GMUX field exceeds register");
        assert!((value as u32) < (1u32 << width), "GMUX value does not fit field");
        RemapSelector {
            register,
            shift,
            width,
            value,
        }
    }

    /// Field mask in register position
    pub const fn mask(&self) -> u32 {
        ((1u32 << self.width) - 1) << self.shift
    }

    /// Register value with this field set (`enable`) or cleared, others untouched
    pub const fn apply(&self, current: u32, enable: bool) -> u32 {
        let cleared = current & !self.mask();
        if enable {
            cleared | ((self.value as u32) << self.shift)
        } else {
            cleared
        }
    }
}

impl fmt::Display for RemapSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}[{}:{}]={:#06b}",
            self.register,
            self.shift + self.width - 1,
            self.shift,
            self.value
        )
    }
}

/// USART3 TX/RX on PD8/PD9
pub const USART3_GMUX_0011: RemapSelector = RemapSelector::new(RemapRegister::Remap5, 4, 4, 0b0011);
/// UART4 TX/RX on PA0/PA1
pub const UART4_GMUX_0010: RemapSelector = RemapSelector::new(RemapRegister::Remap6, 16, 4, 0b0010);
/// UART5 TX/RX on PB9/PB8
pub const UART5_GMUX_0001: RemapSelector = RemapSelector::new(RemapRegister::Remap6, 20, 4, 0b0001);
