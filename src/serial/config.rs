use core::fmt;

use crate::time::Bps;

/// Frame data width
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordLength {
    DataBits7,
    DataBits8,
    DataBits9,
}

impl WordLength {
    pub const fn bits(self) -> u8 {
        match self {
            WordLength::DataBits7 => 7,
            WordLength::DataBits8 => 8,
            WordLength::DataBits9 => 9,
        }
    }
}

/// Parity generation and checking
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    ParityNone,
    ParityEven,
    ParityOdd,
}

/// Stop bits
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    /// 1 stop bit
    STOP1,
    /// 0.5 stop bits
    STOP0P5,
    /// 2 stop bits
    STOP2,
    /// 1.5 stop bits
    STOP1P5,
}

impl StopBits {
    /// Encoding of the stop bit field in `CTRL2.STOPBN`
    pub const fn bits(self) -> u32 {
        match self {
            StopBits::STOP1 => 0b00,
            StopBits::STOP0P5 => 0b01,
            StopBits::STOP2 => 0b10,
            StopBits::STOP1P5 => 0b11,
        }
    }
}

/// Hardware flow control policy
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    Rts,
    Cts,
    RtsCts,
}

impl FlowControl {
    pub const fn rts(self) -> bool {
        matches!(self, FlowControl::Rts | FlowControl::RtsCts)
    }

    pub const fn cts(self) -> bool {
        matches!(self, FlowControl::Cts | FlowControl::RtsCts)
    }
}

/// Serial line parameters of one controller.
///
/// All builder methods are `const`, so descriptor tables can be written as
/// constant data:
///
/// ```
/// use at32_uart_bringup::serial::{LineConfig, StopBits};
/// use at32_uart_bringup::time::Bps;
///
/// const LINE: LineConfig = LineConfig::new()
///     .baudrate(Bps(9_600))
///     .parity_even()
///     .stopbits(StopBits::STOP2);
/// assert_eq!(LINE.baudrate, Bps(9_600));
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineConfig {
    pub baudrate: Bps,
    pub wordlength: WordLength,
    pub parity: Parity,
    pub stopbits: StopBits,
    pub flow_control: FlowControl,
}

impl LineConfig {
    /// 115200-8-N-1 without flow control
    pub const fn new() -> Self {
        LineConfig {
            baudrate: Bps(115_200),
            wordlength: WordLength::DataBits8,
            parity: Parity::ParityNone,
            stopbits: StopBits::STOP1,
            flow_control: FlowControl::None,
        }
    }

    pub const fn baudrate(mut self, baudrate: Bps) -> Self {
        self.baudrate = baudrate;
        self
    }

    pub const fn parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    pub const fn parity_none(mut self) -> Self {
        self.parity = Parity::ParityNone;
        self
    }

    pub const fn parity_even(mut self) -> Self {
        self.parity = Parity::ParityEven;
        self
    }

    pub const fn parity_odd(mut self) -> Self {
        self.parity = Parity::ParityOdd;
        self
    }

    pub const fn wordlength(mut self, wordlength: WordLength) -> Self {
        self.wordlength = wordlength;
        self
    }

    pub const fn wordlength_8(mut self) -> Self {
        self.wordlength = WordLength::DataBits8;
        self
    }

    pub const fn wordlength_9(mut self) -> Self {
        self.wordlength = WordLength::DataBits9;
        self
    }

    pub const fn stopbits(mut self, stopbits: StopBits) -> Self {
        self.stopbits = stopbits;
        self
    }

    pub const fn flow_control(mut self, flow_control: FlowControl) -> Self {
        self.flow_control = flow_control;
        self
    }
}

impl Default for LineConfig {
    fn default() -> LineConfig {
        LineConfig::new()
    }
}

impl fmt::Display for LineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parity = match self.parity {
            Parity::ParityNone => 'N',
            Parity::ParityEven => 'E',
            Parity::ParityOdd => 'O',
        };
        let stop = match self.stopbits {
            StopBits::STOP1 => "1",
            StopBits::STOP0P5 => "0.5",
            StopBits::STOP2 => "2",
            StopBits::STOP1P5 => "1.5",
        };
        write!(
            f,
            "{}-{}-{}-{}",
            self.baudrate.0,
            self.wordlength.bits(),
            parity,
            stop
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn default_is_115200_8n1() {
        let cfg = LineConfig::default();
        assert_eq!(cfg.baudrate, Bps(115_200));
        assert_eq!(cfg.wordlength, WordLength::DataBits8);
        assert_eq!(cfg.parity, Parity::ParityNone);
        assert_eq!(cfg.stopbits, StopBits::STOP1);
        assert_eq!(cfg.flow_control, FlowControl::None);
        assert_eq!(cfg.to_string(), "115200-8-N-1");
    }

    #[test]
    fn builder_overrides() {
        let cfg = LineConfig::new()
            .baudrate(Bps(57_600))
            .wordlength_9()
            .parity_odd()
            .stopbits(StopBits::STOP1P5)
            .flow_control(FlowControl::RtsCts);
        assert_eq!(cfg.to_string(), "57600-9-O-1.5");
        assert!(cfg.flow_control.rts());
        assert!(cfg.flow_control.cts());
    }

    #[test]
    fn flow_control_lines() {
        assert!(!FlowControl::None.rts());
        assert!(!FlowControl::None.cts());
        assert!(FlowControl::Rts.rts());
        assert!(!FlowControl::Rts.cts());
        assert!(FlowControl::Cts.cts());
        assert!(!FlowControl::Cts.rts());
    }
}
