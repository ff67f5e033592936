//! GPIO register block and pin configuration encoding
use vcell::VolatileCell;

use crate::driver::HardwareFault;
use crate::gpio::{Direction, ElectricalMode, PinAssignment, Pull, Speed};

/// GPIO register block
#[repr(C)]
pub struct RegisterBlock {
    /// Configuration of pins 0..=7
    pub cfglr: VolatileCell<u32>,
    /// Configuration of pins 8..=15
    pub cfghr: VolatileCell<u32>,
    pub idt: VolatileCell<u32>,
    pub odt: VolatileCell<u32>,
    pub scr: VolatileCell<u32>,
    pub clr: VolatileCell<u32>,
    pub wpr: VolatileCell<u32>,
    _reserved: [VolatileCell<u32>; 8],
    /// Huge sourcing/sinking strength
    pub hdrv: VolatileCell<u32>,
}

static_assertions::assert_eq_size!(RegisterBlock, [u32; 16]);

const ZERO: VolatileCell<u32> = VolatileCell::new(0);

/// Every pin a floating input
pub const CFG_RESET: u32 = 0x4444_4444;

impl RegisterBlock {
    /// Block holding reset values
    pub const fn reset() -> Self {
        RegisterBlock {
            cfglr: VolatileCell::new(CFG_RESET),
            cfghr: VolatileCell::new(CFG_RESET),
            idt: ZERO,
            odt: ZERO,
            scr: ZERO,
            clr: ZERO,
            wpr: ZERO,
            _reserved: [ZERO; 8],
            hdrv: ZERO,
        }
    }

    /// Configuration register and bit offset of pin `index`
    pub fn cfg(&self, index: u8) -> (&VolatileCell<u32>, u32) {
        if index < 8 {
            (&self.cfglr, 4 * index as u32)
        } else {
            (&self.cfghr, 4 * (index as u32 - 8))
        }
    }
}

/// `IOFC` field: input floating
pub const IOFC_INPUT_FLOATING: u32 = 0b01;
/// `IOFC` field: input with pull resistor, direction from `ODT`
pub const IOFC_INPUT_PULL: u32 = 0b10;
/// `IOFC` field: multiplexed push-pull output
pub const IOFC_MUX_PUSH_PULL: u32 = 0b10;
/// `IOMC` field: input
pub const IOMC_INPUT: u32 = 0b00;

/// 4-bit `IOFC:IOMC` configuration of `assignment`
pub fn config_bits(assignment: &PinAssignment) -> Result<u32, HardwareFault> {
    let (iofc, iomc) = match (assignment.direction, assignment.mode) {
        (Direction::Output, ElectricalMode::AlternateFunction) => {
            (IOFC_MUX_PUSH_PULL, assignment.speed as u32)
        }
        (Direction::Input, ElectricalMode::PlainInput) => match assignment.pull {
            Pull::None => (IOFC_INPUT_FLOATING, IOMC_INPUT),
            Pull::Up | Pull::Down => (IOFC_INPUT_PULL, IOMC_INPUT),
        },
        _ => return Err(HardwareFault::Unsupported),
    };
    Ok((iofc << 2) | iomc)
}

/// Whether the pin needs the `HDRV` bit
pub fn huge_drive(assignment: &PinAssignment) -> bool {
    assignment.direction == Direction::Output && assignment.speed == Speed::Maximum
}
