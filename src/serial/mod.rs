//! UART serial line parameters.
//!
//! This module only describes how a serial controller should be programmed. The
//! bring-up engine hands a [`LineConfig`] to a
//! [`UsartDriver`](crate::driver::UsartDriver), which owns the register-level
//! details. Note that on the AT32F403A the peripheral clock must be at least 16
//! times faster than the requested baud rate.
pub mod config;

pub use config::*;
