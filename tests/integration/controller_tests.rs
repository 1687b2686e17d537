//! PinController → ports: boot state, toggling, ignored bytes, idle polls.

use super::mock_hw::{MockHardware, RecordingSink};
use relay_toggle::app::commands::Command;
use relay_toggle::app::controller::PinController;
use relay_toggle::app::events::AppEvent;
use relay_toggle::app::state::RelayState;
use relay_toggle::config::ControllerConfig;

fn started(hw: &mut MockHardware, sink: &mut RecordingSink) -> PinController {
    let mut c = PinController::new(&ControllerConfig::default());
    c.start(hw, sink);
    c
}

#[test]
fn boots_off_with_pin_inactive() {
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    let c = started(&mut hw, &mut sink);

    assert_eq!(c.state(), RelayState::Off);
    assert_eq!(hw.pin(), Some(RelayState::Off));
    assert!(matches!(sink.events[0], AppEvent::Started(RelayState::Off)));
}

#[test]
fn single_trigger_turns_relay_on() {
    let mut hw = MockHardware::with_input(b"0");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    assert_eq!(c.poll(&mut hw, &mut sink, 100), Some(Command::Toggle));
    assert!(c.is_on());
    assert_eq!(hw.pin(), Some(RelayState::On));
    assert_eq!(sink.state_changes(), vec![(RelayState::Off, RelayState::On)]);
}

#[test]
fn two_triggers_return_to_off() {
    let mut hw = MockHardware::with_input(b"00");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    c.poll(&mut hw, &mut sink, 100);
    c.poll(&mut hw, &mut sink, 200);

    assert_eq!(c.state(), RelayState::Off);
    assert_eq!(hw.pin(), Some(RelayState::Off));
    assert_eq!(
        hw.writes,
        vec![RelayState::Off, RelayState::On, RelayState::Off]
    );
}

#[test]
fn non_trigger_bytes_never_change_state() {
    let mut hw = MockHardware::with_input(&[65; 50]);
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    for t in 0..50 {
        assert_eq!(c.poll(&mut hw, &mut sink, t), Some(Command::Ignore(65)));
    }
    assert_eq!(c.state(), RelayState::Off);
    // Only the boot write.
    assert_eq!(hw.writes, vec![RelayState::Off]);
    assert_eq!(c.ignored_count(), 50);
}

#[test]
fn empty_channel_is_a_no_op() {
    let mut hw = MockHardware::with_input(b"0");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);
    c.poll(&mut hw, &mut sink, 0);
    let writes_before = hw.writes.len();

    for t in 1..1000 {
        assert_eq!(c.poll(&mut hw, &mut sink, t), None);
    }
    assert_eq!(c.state(), RelayState::On);
    assert_eq!(hw.writes.len(), writes_before);
}

#[test]
fn one_byte_consumed_per_poll() {
    let mut hw = MockHardware::with_input(b"0A0");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    c.poll(&mut hw, &mut sink, 0);
    assert_eq!(hw.rx.len(), 2);
    c.poll(&mut hw, &mut sink, 100);
    assert_eq!(hw.rx.len(), 1);
    assert_eq!(c.state(), RelayState::On);
    c.poll(&mut hw, &mut sink, 200);
    assert!(hw.rx.is_empty());
    assert_eq!(c.state(), RelayState::Off);
}

#[test]
fn interleaved_noise_does_not_matter() {
    let mut hw = MockHardware::with_input(b"x0\r\n0yy0");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    while c.poll(&mut hw, &mut sink, 0).is_some() {}
    assert_eq!(c.toggle_count(), 3);
    assert_eq!(c.state(), RelayState::On);
}

#[test]
fn drive_failure_reported_and_recovered_on_next_flip() {
    let mut hw = MockHardware::with_input(b"00");
    let mut sink = RecordingSink::new();
    let mut c = started(&mut hw, &mut sink);

    hw.fail_writes = true;
    c.poll(&mut hw, &mut sink, 10);
    assert_eq!(c.state(), RelayState::On);
    assert_eq!(c.drive_failures(), 1);
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::DriveFailed { state: RelayState::On })));

    hw.fail_writes = false;
    c.poll(&mut hw, &mut sink, 20);
    assert_eq!(c.state(), RelayState::Off);
    assert_eq!(hw.pin(), Some(RelayState::Off));
}

#[test]
fn custom_trigger_byte() {
    let config = ControllerConfig {
        trigger_byte: b'T',
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::with_input(b"0T");
    let mut sink = RecordingSink::new();
    let mut c = PinController::new(&config);
    c.start(&mut hw, &mut sink);

    assert_eq!(c.poll(&mut hw, &mut sink, 0), Some(Command::Ignore(b'0')));
    assert_eq!(c.poll(&mut hw, &mut sink, 1), Some(Command::Toggle));
    assert!(c.is_on());
}
