//! Time units

pub use fugit::{HertzU32 as Hertz, RateExtU32};

use core::fmt;

/// Baudrate
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Eq, PartialEq, PartialOrd, Clone, Copy)]
pub struct Bps(pub u32);

impl fmt::Display for Bps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

pub trait U32Ext {
    /// Wrap in `Bps`
    fn bps(self) -> Bps;
}

impl U32Ext for u32 {
    fn bps(self) -> Bps {
        assert!(self > 0);
        Bps(self)
    }
}

/// Baud rate divisor for a peripheral clocked at `clk`, rounded to nearest.
///
/// Returns `None` for a zero baud rate.
pub fn divisor(clk: Hertz, baud: Bps) -> Option<u32> {
    if baud.0 == 0 {
        return None;
    }
    let clk = clk.raw() as u64;
    let baud = baud.0 as u64;
    let div = (clk * 10 / baud + 5) / 10;
    Some(div as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_rounds_to_nearest() {
        // 120 MHz / 115200 = 1041.66..
        assert_eq!(divisor(120.MHz(), 115_200.bps()), Some(1042));
        // 72 MHz / 9600 = 7500 exactly
        assert_eq!(divisor(72.MHz(), 9_600.bps()), Some(7500));
        // 8 MHz / 115200 = 69.44..
        assert_eq!(divisor(8.MHz(), 115_200.bps()), Some(69));
    }

    #[test]
    fn zero_baud_has_no_divisor() {
        assert_eq!(divisor(120.MHz(), Bps(0)), None);
    }
}
