use at32_uart_bringup::descriptor::PeripheralDescriptor;
use at32_uart_bringup::driver::{GpioDriver, HardwareFault, IomuxDriver, UsartDriver};
use at32_uart_bringup::gpio::PinAssignment;
use at32_uart_bringup::iomux::RemapSelector;
use at32_uart_bringup::peripheral::PeripheralId;
use at32_uart_bringup::serial::{FlowControl, Parity, StopBits, WordLength};
use at32_uart_bringup::time::Bps;

/// One driver primitive invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    ConfigurePin(PinAssignment),
    SelectRemap(RemapSelector, bool),
    ConfigureLine(PeripheralId, Bps, WordLength, StopBits),
    SetTransmitEnabled(PeripheralId, bool),
    SetReceiveEnabled(PeripheralId, bool),
    SetParity(PeripheralId, Parity),
    SetFlowControl(PeripheralId, FlowControl),
    SetPeripheralEnabled(PeripheralId, bool),
}

/// Driver that records every call, optionally failing the n-th one
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    fail_at: Option<(usize, HardwareFault)>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    /// Call number `n` (0-based) is recorded, then reported as `fault`
    pub fn failing_at(n: usize, fault: HardwareFault) -> Self {
        Recorder {
            calls: Vec::new(),
            fail_at: Some((n, fault)),
        }
    }

    fn record(&mut self, call: Call) -> Result<(), HardwareFault> {
        let n = self.calls.len();
        self.calls.push(call);
        match self.fail_at {
            Some((at, fault)) if at == n => Err(fault),
            _ => Ok(()),
        }
    }
}

impl GpioDriver for Recorder {
    fn configure_pin(&mut self, assignment: &PinAssignment) -> Result<(), HardwareFault> {
        self.record(Call::ConfigurePin(*assignment))
    }
}

impl IomuxDriver for Recorder {
    fn select_remap(&mut self, selector: RemapSelector, enabled: bool) -> Result<(), HardwareFault> {
        self.record(Call::SelectRemap(selector, enabled))
    }
}

impl UsartDriver for Recorder {
    fn configure_line(
        &mut self,
        id: PeripheralId,
        baudrate: Bps,
        wordlength: WordLength,
        stopbits: StopBits,
    ) -> Result<(), HardwareFault> {
        self.record(Call::ConfigureLine(id, baudrate, wordlength, stopbits))
    }

    fn set_parity(&mut self, id: PeripheralId, parity: Parity) -> Result<(), HardwareFault> {
        self.record(Call::SetParity(id, parity))
    }

    fn set_flow_control(
        &mut self,
        id: PeripheralId,
        flow_control: FlowControl,
    ) -> Result<(), HardwareFault> {
        self.record(Call::SetFlowControl(id, flow_control))
    }

    fn set_transmit_enabled(&mut self, id: PeripheralId, enabled: bool) -> Result<(), HardwareFault> {
        self.record(Call::SetTransmitEnabled(id, enabled))
    }

    fn set_receive_enabled(&mut self, id: PeripheralId, enabled: bool) -> Result<(), HardwareFault> {
        self.record(Call::SetReceiveEnabled(id, enabled))
    }

    fn set_peripheral_enabled(
        &mut self,
        id: PeripheralId,
        enabled: bool,
    ) -> Result<(), HardwareFault> {
        self.record(Call::SetPeripheralEnabled(id, enabled))
    }
}

/// The calls a correct engine makes for `d`
#[allow(dead_code)]
pub fn expected_calls(d: &PeripheralDescriptor) -> Vec<Call> {
    let mut calls = vec![Call::ConfigurePin(d.tx), Call::ConfigurePin(d.rx)];
    if let Some(selector) = d.remap {
        calls.push(Call::SelectRemap(selector, true));
    }
    calls.extend([
        Call::ConfigureLine(d.id, d.line.baudrate, d.line.wordlength, d.line.stopbits),
        Call::SetTransmitEnabled(d.id, true),
        Call::SetReceiveEnabled(d.id, true),
        Call::SetParity(d.id, d.line.parity),
        Call::SetFlowControl(d.id, d.line.flow_control),
        Call::SetPeripheralEnabled(d.id, true),
    ]);
    calls
}

/// Split a recorded trace into one slice per descriptor
#[allow(dead_code)]
pub fn per_descriptor<'a>(calls: &'a [Call], table: &[PeripheralDescriptor]) -> Vec<&'a [Call]> {
    let mut rest = calls;
    let mut out = Vec::new();
    for d in table {
        let (head, tail) = rest.split_at(expected_calls(d).len());
        out.push(head);
        rest = tail;
    }
    assert!(rest.is_empty(), "trailing calls: {:?}", rest);
    out
}
