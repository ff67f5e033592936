//! Peripheral descriptors and table checks
use crate::gpio::{PinAssignment, PinId};
use crate::iomux::RemapSelector;
use crate::peripheral::PeripheralId;
use crate::serial::LineConfig;

/// Everything needed to bring one serial controller up
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PeripheralDescriptor {
    pub id: PeripheralId,
    pub tx: PinAssignment,
    pub rx: PinAssignment,
    pub remap: Option<RemapSelector>,
    pub line: LineConfig,
}

impl PeripheralDescriptor {
    /// Descriptor on the default multiplexer group with default line settings
    pub const fn new(id: PeripheralId, tx: PinId, rx: PinId) -> Self {
        PeripheralDescriptor {
            id,
            tx: PinAssignment::tx(tx),
            rx: PinAssignment::rx(rx),
            remap: None,
            line: LineConfig::new(),
        }
    }

    pub const fn remap(mut self, selector: RemapSelector) -> Self {
        self.remap = Some(selector);
        self
    }

    pub const fn line(mut self, line: LineConfig) -> Self {
        self.line = line;
        self
    }

    const fn claims(&self, pin: &PinId) -> bool {
        self.tx.pin.same_as(pin) || self.rx.pin.same_as(pin)
    }
}

/// Table defect found by [`check`]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Defect {
    /// Entries `first` and `second` both claim `pin`
    Conflict {
        pin: PinId,
        first: usize,
        second: usize,
    },
    /// Entry `entry` has `pin` in the wrong role (TX not an AF output, RX not an input)
    Misassigned { pin: PinId, entry: usize },
    /// Entry `entry` names the same controller as an earlier entry `first`
    DuplicateId { first: usize, entry: usize },
}

/// First defect in `table`, in table order.
///
/// This is a `const fn` so board tables can be rejected at compile time.
pub const fn check(table: &[PeripheralDescriptor]) -> Option<Defect> {
    let mut i = 0;
    while i < table.len() {
        let d = &table[i];
        if !d.tx.is_tx() {
            return Some(Defect::Misassigned {
                pin: d.tx.pin,
                entry: i,
            });
        }
        if !d.rx.is_rx() {
            return Some(Defect::Misassigned {
                pin: d.rx.pin,
                entry: i,
            });
        }
        if d.tx.pin.same_as(&d.rx.pin) {
            return Some(Defect::Conflict {
                pin: d.tx.pin,
                first: i,
                second: i,
            });
        }
        let mut j = 0;
        while j < i {
            let e = &table[j];
            if e.id as u8 == d.id as u8 {
                return Some(Defect::DuplicateId { first: j, entry: i });
            }
            if e.claims(&d.tx.pin) {
                return Some(Defect::Conflict {
                    pin: d.tx.pin,
                    first: j,
                    second: i,
                });
            }
            if e.claims(&d.rx.pin) {
                return Some(Defect::Conflict {
                    pin: d.rx.pin,
                    first: j,
                    second: i,
                });
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// `true` if `table` has no defect
pub const fn is_valid(table: &[PeripheralDescriptor]) -> bool {
    check(table).is_none()
}
