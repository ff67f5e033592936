//! Serial controller identities and bring-up state
use core::fmt;

/// One of the physical serial controllers
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum PeripheralId {
    Usart1,
    Usart2,
    Usart3,
    Uart4,
    Uart5,
    Usart6,
    Uart7,
    Uart8,
}

impl PeripheralId {
    pub const ALL: [PeripheralId; 8] = [
        PeripheralId::Usart1,
        PeripheralId::Usart2,
        PeripheralId::Usart3,
        PeripheralId::Uart4,
        PeripheralId::Uart5,
        PeripheralId::Usart6,
        PeripheralId::Uart7,
        PeripheralId::Uart8,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            PeripheralId::Usart1 => "USART1",
            PeripheralId::Usart2 => "USART2",
            PeripheralId::Usart3 => "USART3",
            PeripheralId::Uart4 => "UART4",
            PeripheralId::Uart5 => "UART5",
            PeripheralId::Usart6 => "USART6",
            PeripheralId::Uart7 => "UART7",
            PeripheralId::Uart8 => "UART8",
        }
    }

    /// The state flag for this controller
    pub const fn flag(self) -> PeripheralSet {
        match self {
            PeripheralId::Usart1 => PeripheralSet::USART1,
            PeripheralId::Usart2 => PeripheralSet::USART2,
            PeripheralId::Usart3 => PeripheralSet::USART3,
            PeripheralId::Uart4 => PeripheralSet::UART4,
            PeripheralId::Uart5 => PeripheralSet::UART5,
            PeripheralId::Usart6 => PeripheralSet::USART6,
            PeripheralId::Uart7 => PeripheralSet::UART7,
            PeripheralId::Uart8 => PeripheralSet::UART8,
        }
    }
}

impl fmt::Display for PeripheralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Controllers that have reached the `Configured` state
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct PeripheralSet: u8 {
        const USART1 = 1 << 0;
        const USART2 = 1 << 1;
        const USART3 = 1 << 2;
        const UART4 = 1 << 3;
        const UART5 = 1 << 4;
        const USART6 = 1 << 5;
        const UART7 = 1 << 6;
        const UART8 = 1 << 7;
    }
}

impl PeripheralSet {
    pub fn contains_id(&self, id: PeripheralId) -> bool {
        self.contains(id.flag())
    }

    /// Controllers in the set, in `PeripheralId` order
    pub fn ids(self) -> impl Iterator<Item = PeripheralId> {
        PeripheralId::ALL
            .into_iter()
            .filter(move |id| self.contains(id.flag()))
    }
}
