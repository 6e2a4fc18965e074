//! Swapping implementations behind the same port must not change what
//! the panel does.

use std::cell::RefCell;
use std::rc::Rc;

use carpanel::app::demo;
use carpanel::app::panel::CarControlPanel;
use carpanel::app::ports::{AirConditionerPort, EnginePort, RadioPort, SignalSink};
use carpanel::app::signals::Signal;
use carpanel::config::PanelConfig;
use carpanel::drivers::{AirConditioner, Engine, Radio};

use super::mock_hw::{CallLog, MockAirConditioner, MockEngine, MockRadio};

const FULL_CYCLE: [&str; 6] = [
    "engine.start",
    "radio.turnOn",
    "ac.activate",
    "engine.stop",
    "radio.turnOff",
    "ac.deactivate",
];

fn cycle<E: EnginePort, R: RadioPort, A: AirConditionerPort>(
    panel: &mut CarControlPanel<E, R, A>,
) {
    panel.start_car().unwrap();
    panel.stop_car().unwrap();
}

#[test]
fn real_drivers_match_recording_doubles() {
    let signals: Rc<RefCell<Vec<Signal>>> = Rc::default();
    let mut panel = CarControlPanel::new(
        Engine::with_sink(Rc::clone(&signals)),
        Radio::with_sink(Rc::clone(&signals)),
        AirConditioner::with_sink(Rc::clone(&signals)),
    );
    cycle(&mut panel);

    let names: Vec<&str> = signals.borrow().iter().map(|s| s.call_name()).collect();
    assert_eq!(names, FULL_CYCLE);
}

/// Mock engine call names are mirrored into the same log as the real
/// radio and AC, which report through a sink adapter.
struct CallNameSink(CallLog);

impl SignalSink for CallNameSink {
    fn emit(&mut self, signal: Signal) -> carpanel::error::Result<()> {
        self.0.borrow_mut().push(signal.call_name());
        Ok(())
    }
}

#[test]
fn mixed_real_and_mock_components_keep_order() {
    let log = CallLog::default();
    let mut panel = CarControlPanel::new(
        MockEngine::new(&log),
        Radio::with_sink(CallNameSink(Rc::clone(&log))),
        MockAirConditioner::new(&log),
    );
    cycle(&mut panel);

    assert_eq!(*log.borrow(), FULL_CYCLE);
}

#[test]
fn boxed_trait_objects_are_accepted() {
    let log = CallLog::default();
    let engine: Box<dyn EnginePort> = Box::new(MockEngine::new(&log));
    let radio: Box<dyn RadioPort> = Box::new(MockRadio::new(&log));
    let ac: Box<dyn AirConditionerPort> = Box::new(MockAirConditioner::new(&log));

    let mut panel = CarControlPanel::new(engine, radio, ac);
    cycle(&mut panel);

    assert_eq!(*log.borrow(), FULL_CYCLE);
}

#[test]
fn borrowed_components_stay_with_the_caller() {
    let signals: Rc<RefCell<Vec<Signal>>> = Rc::default();
    let mut engine = Engine::with_sink(Rc::clone(&signals));
    let mut radio = Radio::with_sink(Rc::clone(&signals));
    let mut ac = AirConditioner::with_sink(Rc::clone(&signals));

    {
        let mut panel = CarControlPanel::new(&mut engine, &mut radio, &mut ac);
        panel.start_car().unwrap();
    }

    assert!(engine.is_running());
    assert!(radio.is_on());
    assert!(ac.is_active());
    assert_eq!(*signals.borrow(), Signal::START_SEQUENCE);
}

#[test]
fn default_demo_matches_transcript() {
    let out = demo::run_configured(&PanelConfig::default(), Vec::new()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Engine started\n\
         Radio turned on\n\
         Air conditioner activated\n\
         ---\n\
         Engine stopped\n\
         Radio turned off\n\
         Air conditioner deactivated\n"
    );
}
