#![cfg(feature = "mock")]

//! Operator buttons driving the navigation loop through the public API.

use omni_rover::communication::telemetry::NullTelemetry;
use omni_rover::devices::pose::MockPoseSensor;
use omni_rover::libraries::button::{Button, ButtonPanel};
use omni_rover::libraries::motor_driver::RoverC;
use omni_rover::platform::mock::{MockGpio, MockI2c, MockTimer};
use omni_rover::platform::TimerInterface;
use omni_rover::rover::nav_loop::{LoopConfig, NavigationLoop};
use omni_rover_core::mode::Mode;

#[test]
fn mode_button_release_starts_square() {
    let mode = Button::new(MockGpio::new_pull_up()).unwrap();
    let reset = Button::new(MockGpio::new_pull_up()).unwrap();
    let mut panel = ButtonPanel::new(mode, reset);

    let mut nav = NavigationLoop::new(
        MockPoseSensor::new(),
        RoverC::new(MockI2c::default()),
        MockTimer::new(),
        NullTelemetry,
        LoopConfig::default(),
    );
    assert_eq!(nav.start(), 1);

    // Holding the button does nothing
    panel.mode_button().pin_mut().set_input_state(false);
    let frame = nav.step(panel.poll());
    assert_eq!(frame.mode, Mode::Stopped);

    // Release fires the event once
    panel.mode_button().pin_mut().set_input_state(true);
    let frame = nav.step(panel.poll());
    assert_eq!(frame.mode, Mode::Square);
    assert_eq!(frame.goal_index, 1);

    let frame = nav.step(panel.poll());
    assert_eq!(frame.mode, Mode::Square);

    // startup stop + three ticks
    let writes = nav.wheels().bus().writes();
    assert_eq!(writes.len(), 4);
    assert_eq!(writes[0], vec![0x00, 0, 0, 0, 0]);
    assert_eq!(writes[2], vec![0x00, 100, 100, 100, 100]);
}

#[test]
fn reset_button_restarts_sequence() {
    let mode = Button::new(MockGpio::new_pull_up()).unwrap();
    let reset = Button::new(MockGpio::new_pull_up()).unwrap();
    let mut panel = ButtonPanel::new(mode, reset);

    let mut nav = NavigationLoop::new(
        MockPoseSensor::new(),
        RoverC::new(MockI2c::default()),
        MockTimer::new(),
        NullTelemetry,
        LoopConfig::default(),
    );
    nav.start();

    panel.mode_button().pin_mut().set_input_state(false);
    nav.step(panel.poll());
    panel.mode_button().pin_mut().set_input_state(true);
    nav.step(panel.poll());
    assert_eq!(nav.state().goal_index, 1);

    panel.reset_button().pin_mut().set_input_state(false);
    nav.step(panel.poll());
    panel.reset_button().pin_mut().set_input_state(true);
    let frame = nav.step(panel.poll());

    // Pose is still at the origin, so the reset goal is reached immediately
    assert_eq!(frame.mode, Mode::Square);
    assert_eq!(frame.goal_index, 1);
    assert_eq!(nav.sensor().calibrate_calls(), 2);
    assert_eq!(nav.sensor().reset_calls(), 2);
    assert_eq!(nav.timer().now_ms(), 40);
}
