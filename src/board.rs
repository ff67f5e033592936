//! Serial wiring of the board
//!
//! | Controller | TX   | RX   | GMUX              |
//! | ---------- | ---- | ---- | ----------------- |
//! | USART1     | PA9  | PA10 |                   |
//! | USART2     | PA2  | PA3  |                   |
//! | USART3     | PD8  | PD9  | `USART3_GMUX_0011` |
//! | UART4      | PA0  | PA1  | `UART4_GMUX_0010`  |
//! | UART5      | PB9  | PB8  | `UART5_GMUX_0001`  |
//! | USART6     | PC6  | PC7  |                   |
//! | UART7      | PE8  | PE7  |                   |
//! | UART8      | PE1  | PE0  |                   |
//!
//! Every line runs 115200-8-N-1 without flow control.
use static_assertions::const_assert;

use crate::descriptor::{self, PeripheralDescriptor};
use crate::gpio::*;
use crate::iomux::{UART4_GMUX_0010, UART5_GMUX_0001, USART3_GMUX_0011};
use crate::peripheral::PeripheralId;

pub const DESCRIPTORS: [PeripheralDescriptor; 8] = [
    PeripheralDescriptor::new(PeripheralId::Usart1, PA9, PA10),
    PeripheralDescriptor::new(PeripheralId::Usart2, PA2, PA3),
    PeripheralDescriptor::new(PeripheralId::Usart3, PD8, PD9).remap(USART3_GMUX_0011),
    PeripheralDescriptor::new(PeripheralId::Uart4, PA0, PA1).remap(UART4_GMUX_0010),
    PeripheralDescriptor::new(PeripheralId::Uart5, PB9, PB8).remap(UART5_GMUX_0001),
    PeripheralDescriptor::new(PeripheralId::Usart6, PC6, PC7),
    PeripheralDescriptor::new(PeripheralId::Uart7, PE8, PE7),
    PeripheralDescriptor::new(PeripheralId::Uart8, PE1, PE0),
];

const_assert!(descriptor::is_valid(&DESCRIPTORS));

/// Board descriptor for `id`, if the board wires that controller
pub fn descriptor(id: PeripheralId) -> Option<&'static PeripheralDescriptor> {
    DESCRIPTORS.iter().find(|d| d.id == id)
}
