//! IOMUX register block
use vcell::VolatileCell;

use crate::iomux::RemapRegister;

/// IOMUX register block
#[repr(C)]
pub struct RegisterBlock {
    pub evtout: VolatileCell<u32>,
    pub remap: VolatileCell<u32>,
    pub exintc: [VolatileCell<u32>; 4],
    _reserved: VolatileCell<u32>,
    pub remap2: VolatileCell<u32>,
    pub remap3: VolatileCell<u32>,
    pub remap4: VolatileCell<u32>,
    pub remap5: VolatileCell<u32>,
    pub remap6: VolatileCell<u32>,
    pub remap7: VolatileCell<u32>,
    pub remap8: VolatileCell<u32>,
}

static_assertions::assert_eq_size!(RegisterBlock, [u32; 14]);

const ZERO: VolatileCell<u32> = VolatileCell::new(0);

impl RegisterBlock {
    /// Block holding reset values
    pub const fn reset() -> Self {
        RegisterBlock {
            evtout: ZERO,
            remap: ZERO,
            exintc: [ZERO; 4],
            _reserved: ZERO,
            remap2: ZERO,
            remap3: ZERO,
            remap4: ZERO,
            remap5: ZERO,
            remap6: ZERO,
            remap7: ZERO,
            remap8: ZERO,
        }
    }

    pub fn register(&self, register: RemapRegister) -> &VolatileCell<u32> {
        match register {
            RemapRegister::Remap => &self.remap,
            RemapRegister::Remap2 => &self.remap2,
            RemapRegister::Remap3 => &self.remap3,
            RemapRegister::Remap4 => &self.remap4,
            RemapRegister::Remap5 => &self.remap5,
            RemapRegister::Remap6 => &self.remap6,
            RemapRegister::Remap7 => &self.remap7,
            RemapRegister::Remap8 => &self.remap8,
        }
    }
}
