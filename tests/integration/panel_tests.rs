//! Integration tests for the CarControlPanel → component pipeline.
//!
//! Recording doubles stand in for every component, so the call log is the
//! full observable behaviour of the panel.

use carpanel::app::panel::CarControlPanel;
use carpanel::app::signals::Component;
use carpanel::error::{Error, HardwareFault};

use super::mock_hw::{CallLog, MockAirConditioner, MockEngine, MockRadio};

fn make_panel(log: &CallLog) -> CarControlPanel<MockEngine, MockRadio, MockAirConditioner> {
    CarControlPanel::new(
        MockEngine::new(log),
        MockRadio::new(log),
        MockAirConditioner::new(log),
    )
}

#[test]
fn start_car_calls_each_component_once_in_order() {
    let log = CallLog::default();
    let mut panel = make_panel(&log);

    panel.start_car().unwrap();

    assert_eq!(
        *log.borrow(),
        ["engine.start", "radio.turnOn", "ac.activate"]
    );
}

#[test]
fn stop_car_calls_each_component_once_in_order() {
    let log = CallLog::default();
    let mut panel = make_panel(&log);

    panel.stop_car().unwrap();

    assert_eq!(
        *log.borrow(),
        ["engine.stop", "radio.turnOff", "ac.deactivate"]
    );
}

#[test]
fn full_cycle_yields_six_calls() {
    let log = CallLog::default();
    let mut panel = make_panel(&log);

    panel.start_car().unwrap();
    panel.stop_car().unwrap();

    assert_eq!(
        *log.borrow(),
        [
            "engine.start",
            "radio.turnOn",
            "ac.activate",
            "engine.stop",
            "radio.turnOff",
            "ac.deactivate",
        ]
    );
}

#[test]
fn radio_fault_propagates_and_ac_is_never_activated() {
    let log = CallLog::default();
    let mut panel = CarControlPanel::new(
        MockEngine::new(&log),
        MockRadio::new(&log).failing_on("radio.turnOn"),
        MockAirConditioner::new(&log),
    );

    let err = panel.start_car().unwrap_err();

    assert_eq!(
        err,
        Error::Hardware(HardwareFault::new(Component::Radio, "injected fault"))
    );
    assert_eq!(*log.borrow(), ["engine.start"]);
}

#[test]
fn fault_in_stop_does_not_block_a_later_start() {
    let log = CallLog::default();
    let mut panel = CarControlPanel::new(
        MockEngine::new(&log),
        MockRadio::new(&log),
        MockAirConditioner::new(&log).failing_on("ac.deactivate"),
    );

    assert!(panel.stop_car().is_err());
    panel.start_car().unwrap();

    assert_eq!(
        *log.borrow(),
        [
            "engine.stop",
            "radio.turnOff",
            "engine.start",
            "radio.turnOn",
            "ac.activate",
        ]
    );
}
