//! Table-driven serial port bring-up for AT32F403A boards.
//!
//! The board's serial wiring is plain data ([`board::DESCRIPTORS`]). The
//! [`bringup`] engine walks that table once at start-up and programs pins,
//! pin multiplexer groups and line parameters through a [`driver::Driver`].
//! [`mmio::Mmio`] is the register-level driver for the real part.
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod bringup;
pub mod descriptor;
pub mod driver;
pub mod gpio;
pub mod iomux;
pub mod mmio;
pub mod peripheral;
pub mod serial;
pub mod time;

mod logger;

pub use crate::bringup::{bring_up_all_serial_peripherals, BringUp, Error};
pub use crate::descriptor::PeripheralDescriptor;
pub use crate::driver::{Driver, HardwareFault};
pub use crate::peripheral::{PeripheralId, PeripheralSet};
