//! USART register block
use vcell::VolatileCell;

/// USART register block
#[repr(C)]
pub struct RegisterBlock {
    pub sts: VolatileCell<u32>,
    pub dt: VolatileCell<u32>,
    pub baudr: VolatileCell<u32>,
    pub ctrl1: VolatileCell<u32>,
    pub ctrl2: VolatileCell<u32>,
    pub ctrl3: VolatileCell<u32>,
    pub gdiv: VolatileCell<u32>,
}

static_assertions::assert_eq_size!(RegisterBlock, [u32; 7]);

const ZERO: VolatileCell<u32> = VolatileCell::new(0);

/// Transmit data buffer empty and transmit complete
pub const STS_RESET: u32 = 0x0000_00C0;

impl RegisterBlock {
    /// Block holding reset values
    pub const fn reset() -> Self {
        RegisterBlock {
            sts: VolatileCell::new(STS_RESET),
            dt: ZERO,
            baudr: ZERO,
            ctrl1: ZERO,
            ctrl2: ZERO,
            ctrl3: ZERO,
            gdiv: ZERO,
        }
    }
}

/// Receiver enable
pub const CTRL1_REN: u32 = 1 << 2;
/// Transmitter enable
pub const CTRL1_TEN: u32 = 1 << 3;
/// Odd parity select
pub const CTRL1_PSEL: u32 = 1 << 9;
/// Parity enable
pub const CTRL1_PEN: u32 = 1 << 10;
/// 9 data bits
pub const CTRL1_DBN: u32 = 1 << 12;
/// USART enable
pub const CTRL1_UEN: u32 = 1 << 13;

pub const CTRL2_STOPBN_SHIFT: u32 = 12;
pub const CTRL2_STOPBN_MASK: u32 = 0b11 << CTRL2_STOPBN_SHIFT;

/// RTS enable
pub const CTRL3_RTSEN: u32 = 1 << 8;
/// CTS enable
pub const CTRL3_CTSEN: u32 = 1 << 9;

/// Smallest divisor giving 16x oversampling
pub const BAUDR_MIN: u32 = 16;
pub const BAUDR_MAX: u32 = 0xFFFF;
