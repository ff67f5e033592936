mod common;

use at32_uart_bringup::board::DESCRIPTORS;
use at32_uart_bringup::bringup::{self, BringUp, Error, Step};
use at32_uart_bringup::descriptor::PeripheralDescriptor;
use at32_uart_bringup::gpio::*;
use at32_uart_bringup::iomux::{RemapRegister, RemapSelector, UART4_GMUX_0010};
use at32_uart_bringup::serial::{FlowControl, LineConfig, Parity, StopBits, WordLength};
use at32_uart_bringup::time::Bps;
use at32_uart_bringup::{bring_up_all_serial_peripherals, HardwareFault, PeripheralId, PeripheralSet};

use common::{expected_calls, per_descriptor, Call, Recorder};

#[test]
fn single_descriptor_trace() {
    let table = [PeripheralDescriptor::new(PeripheralId::Usart1, PA9, PA10)];
    let mut recorder = Recorder::new();
    let configured = bringup::apply_all(&table, &mut recorder).unwrap();

    let tx = PinAssignment {
        pin: PA9,
        direction: Direction::Output,
        mode: ElectricalMode::AlternateFunction,
        speed: Speed::Moderate,
        pull: Pull::None,
    };
    let rx = PinAssignment {
        pin: PA10,
        direction: Direction::Input,
        mode: ElectricalMode::PlainInput,
        speed: Speed::Moderate,
        pull: Pull::None,
    };
    let id = PeripheralId::Usart1;
    assert_eq!(
        recorder.calls,
        [
            Call::ConfigurePin(tx),
            Call::ConfigurePin(rx),
            Call::ConfigureLine(id, Bps(115_200), WordLength::DataBits8, StopBits::STOP1),
            Call::SetTransmitEnabled(id, true),
            Call::SetReceiveEnabled(id, true),
            Call::SetParity(id, Parity::ParityNone),
            Call::SetFlowControl(id, FlowControl::None),
            Call::SetPeripheralEnabled(id, true),
        ]
    );
    assert_eq!(configured, PeripheralSet::USART1);
}

#[test]
fn remap_sits_between_pins_and_line() {
    let selector = RemapSelector::new(RemapRegister::Remap3, 8, 2, 0b01);
    let table = [PeripheralDescriptor::new(PeripheralId::Uart4, PA0, PA1).remap(selector)];
    let mut recorder = Recorder::new();
    bringup::apply_all(&table, &mut recorder).unwrap();

    assert_eq!(recorder.calls[0], Call::ConfigurePin(PinAssignment::tx(PA0)));
    assert_eq!(recorder.calls[1], Call::ConfigurePin(PinAssignment::rx(PA1)));
    assert_eq!(recorder.calls[2], Call::SelectRemap(selector, true));
    assert!(matches!(recorder.calls[3], Call::ConfigureLine(PeripheralId::Uart4, ..)));
}

#[test]
fn board_trace_is_table_order() {
    let mut recorder = Recorder::new();
    let configured = bring_up_all_serial_peripherals(&mut recorder).unwrap();

    let expected: Vec<Call> = DESCRIPTORS.iter().flat_map(expected_calls).collect();
    assert_eq!(recorder.calls, expected);
    assert_eq!(configured, PeripheralSet::all());
}

#[test]
fn enable_is_last_call_of_each_descriptor() {
    let mut recorder = Recorder::new();
    bring_up_all_serial_peripherals(&mut recorder).unwrap();

    for (d, calls) in DESCRIPTORS.iter().zip(per_descriptor(&recorder.calls, &DESCRIPTORS)) {
        assert_eq!(calls.last(), Some(&Call::SetPeripheralEnabled(d.id, true)));
        let enables = calls
            .iter()
            .filter(|c| matches!(c, Call::SetPeripheralEnabled(..)))
            .count();
        assert_eq!(enables, 1, "{}", d.id);
    }
}

#[test]
fn remap_precedes_enable() {
    let mut recorder = Recorder::new();
    bring_up_all_serial_peripherals(&mut recorder).unwrap();

    for (d, calls) in DESCRIPTORS.iter().zip(per_descriptor(&recorder.calls, &DESCRIPTORS)) {
        let Some(selector) = d.remap else { continue };
        let remap = calls
            .iter()
            .position(|c| *c == Call::SelectRemap(selector, true))
            .unwrap();
        let line = calls
            .iter()
            .position(|c| matches!(c, Call::ConfigureLine(..)))
            .unwrap();
        let enable = calls
            .iter()
            .position(|c| *c == Call::SetPeripheralEnabled(d.id, true))
            .unwrap();
        assert_eq!(remap, 2, "{}", d.id);
        assert!(remap < line && line < enable, "{}", d.id);
    }
}

#[test]
fn reapplying_repeats_the_same_calls() {
    for d in DESCRIPTORS.iter() {
        let mut bringup = BringUp::new(Recorder::new());
        bringup.apply(d).unwrap();
        bringup.apply(d).unwrap();
        assert!(bringup.is_configured(d.id));

        let calls = bringup.release().calls;
        let (first, second) = calls.split_at(calls.len() / 2);
        assert_eq!(first, second, "{}", d.id);
        assert_eq!(first, expected_calls(d).as_slice());
    }
}

#[test]
fn board_pins_are_disjoint() {
    for (i, a) in DESCRIPTORS.iter().enumerate() {
        for b in DESCRIPTORS.iter().skip(i + 1) {
            for pa in [a.tx.pin, a.rx.pin] {
                assert!(pa != b.tx.pin && pa != b.rx.pin, "{} shared by {} and {}", pa, a.id, b.id);
            }
        }
    }
}

#[test]
fn fault_halts_before_enable() {
    // USART1 and USART2 take 8 calls each; USART3's line setup is its 4th call
    let mut recorder = Recorder::failing_at(16 + 3, HardwareFault::InvalidConfig);
    let mut bringup = BringUp::new(&mut recorder);
    let err = bringup.apply_all(&DESCRIPTORS).unwrap_err();

    assert_eq!(
        err,
        Error::HardwareFault {
            peripheral: PeripheralId::Usart3,
            step: Step::Line,
            fault: HardwareFault::InvalidConfig,
        }
    );
    assert_eq!(bringup.configured(), PeripheralSet::USART1 | PeripheralSet::USART2);
    assert!(!bringup.is_configured(PeripheralId::Usart3));

    assert_eq!(recorder.calls.len(), 20);
    assert!(matches!(
        recorder.calls.last(),
        Some(Call::ConfigureLine(PeripheralId::Usart3, ..))
    ));
    assert!(!recorder
        .calls
        .contains(&Call::SetPeripheralEnabled(PeripheralId::Usart3, true)));
}

#[test]
fn fault_on_first_pin() {
    let mut recorder = Recorder::failing_at(0, HardwareFault::WriteNotAccepted);
    let err = bring_up_all_serial_peripherals(&mut recorder).unwrap_err();
    assert_eq!(
        err,
        Error::HardwareFault {
            peripheral: PeripheralId::Usart1,
            step: Step::TxPin,
            fault: HardwareFault::WriteNotAccepted,
        }
    );
    assert_eq!(recorder.calls.len(), 1);
}

#[test]
fn conflicting_table_touches_nothing() {
    let table = [
        PeripheralDescriptor::new(PeripheralId::Usart1, PA9, PA10),
        PeripheralDescriptor::new(PeripheralId::Uart4, PA0, PA1).remap(UART4_GMUX_0010),
        PeripheralDescriptor::new(PeripheralId::Usart2, PA2, PA9),
    ];
    let mut recorder = Recorder::new();
    let err = bringup::apply_all(&table, &mut recorder).unwrap_err();

    assert_eq!(
        err,
        Error::ConfigurationConflict {
            pin: PA9,
            first: PeripheralId::Usart1,
            second: PeripheralId::Usart2,
        }
    );
    assert!(recorder.calls.is_empty());
}

#[test]
fn misassigned_pin_is_rejected() {
    let mut d = PeripheralDescriptor::new(PeripheralId::Usart6, PC6, PC7);
    d.tx = PinAssignment::rx(PC6);
    assert_eq!(
        bringup::validate(&[d]),
        Err(Error::MisassignedPin {
            peripheral: PeripheralId::Usart6,
            pin: PC6,
        })
    );
}

#[test]
fn duplicate_peripheral_is_rejected() {
    let table = [
        PeripheralDescriptor::new(PeripheralId::Uart8, PE1, PE0),
        PeripheralDescriptor::new(PeripheralId::Uart8, PE8, PE7),
    ];
    assert_eq!(
        bringup::validate(&table),
        Err(Error::DuplicatePeripheral {
            peripheral: PeripheralId::Uart8
        })
    );
    assert_eq!(bringup::validate(&DESCRIPTORS), Ok(()));
}

#[test]
fn per_descriptor_line_settings_are_passed_through() {
    let line = LineConfig::new()
        .baudrate(Bps(921_600))
        .wordlength_9()
        .parity_even()
        .stopbits(StopBits::STOP2)
        .flow_control(FlowControl::RtsCts);
    let table = [PeripheralDescriptor::new(PeripheralId::Uart7, PE8, PE7).line(line)];
    let mut recorder = Recorder::new();
    bringup::apply_all(&table, &mut recorder).unwrap();

    let id = PeripheralId::Uart7;
    assert!(recorder.calls.contains(&Call::ConfigureLine(
        id,
        Bps(921_600),
        WordLength::DataBits9,
        StopBits::STOP2
    )));
    assert!(recorder.calls.contains(&Call::SetParity(id, Parity::ParityEven)));
    assert!(recorder
        .calls
        .contains(&Call::SetFlowControl(id, FlowControl::RtsCts)));
}

#[test]
fn bring_up_single_controller() {
    let mut bringup = BringUp::new(Recorder::new());
    assert_eq!(bringup.bring_up(PeripheralId::Uart5), Ok(true));
    assert_eq!(bringup.configured(), PeripheralSet::UART5);

    let uart5 = DESCRIPTORS
        .iter()
        .find(|d| d.id == PeripheralId::Uart5)
        .unwrap();
    assert_eq!(bringup.driver().calls, expected_calls(uart5));
}

#[test]
fn error_messages() {
    let err = Error::HardwareFault {
        peripheral: PeripheralId::Uart4,
        step: Step::Remap,
        fault: HardwareFault::WriteNotAccepted,
    };
    assert_eq!(err.to_string(), "UART4: remap failed: register write not accepted");

    let err = Error::ConfigurationConflict {
        pin: PA10,
        first: PeripheralId::Usart1,
        second: PeripheralId::Usart3,
    };
    assert_eq!(err.to_string(), "PA10 claimed by both USART1 and USART3");
}
