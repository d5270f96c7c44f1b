//! Closed-loop scenarios: the navigation loop driving the simulated plant.

use std::cell::RefCell;
use std::rc::Rc;

use omni_rover::communication::telemetry::{TelemetryFrame, TelemetrySink};
use omni_rover::libraries::button::InputEvents;
use omni_rover::libraries::motor_driver::RoverC;
use omni_rover::rover::nav_loop::{LoopConfig, NavigationLoop};
use omni_rover_core::mode::Mode;
use omni_rover_core::navigation::Pose2D;
use omni_rover_core::parameters::{NavigationParams, ParameterStore, RoverParams};

use crate::adapter::{SharedPlant, SimI2c, SimPoseSensor, SimTimer};
use crate::error::SimulatorError;
use crate::plant::{OmniPlant, PlantConfig};

/// Navigation loop wired to the simulator.
pub type SimLoop<K> = NavigationLoop<SimPoseSensor, RoverC<SimI2c>, SimTimer, K>;

/// Parse a mode name as used on the command line.
pub fn parse_mode(name: &str) -> Result<Mode, SimulatorError> {
    match name.to_ascii_lowercase().as_str() {
        "stop" | "stopped" => Ok(Mode::Stopped),
        "square" => Ok(Mode::Square),
        "triangle" => Ok(Mode::Triangle),
        "line" => Ok(Mode::Line),
        "home" | "return_home" => Ok(Mode::ReturnHome),
        _ => Err(SimulatorError::UnknownMode(name.to_string())),
    }
}

/// Load loop configuration from a parameter store with defaults registered.
pub fn loop_config_from_store(store: &mut ParameterStore) -> Result<LoopConfig, SimulatorError> {
    NavigationParams::register_defaults(store)?;
    RoverParams::register_defaults(store)?;

    let nav = NavigationParams::from_store(store);
    let rover = RoverParams::from_store(store);
    if !nav.is_valid() || !rover.is_valid() {
        return Err(SimulatorError::InvalidParameters);
    }
    Ok(LoopConfig::from_params(&nav, &rover))
}

/// Build a plant and a navigation loop attached to it.
pub fn build<K: TelemetrySink>(
    plant_config: PlantConfig,
    loop_config: LoopConfig,
    telemetry: K,
) -> Result<(SharedPlant, SimLoop<K>), SimulatorError> {
    let plant = Rc::new(RefCell::new(OmniPlant::new(plant_config)?));
    let nav = NavigationLoop::new(
        SimPoseSensor::new(plant.clone()),
        RoverC::with_address(
            SimI2c::new(plant.clone()),
            loop_config.wheel_address,
            loop_config.speed_register,
        ),
        SimTimer::new(plant.clone()),
        telemetry,
        loop_config,
    );
    Ok((plant, nav))
}

/// Scenario description.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Mode selected by pressing the mode button on the first ticks.
    pub mode: Mode,
    /// Number of ticks to run.
    pub ticks: u64,
    pub plant: PlantConfig,
    pub loop_config: LoopConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            mode: Mode::Square,
            ticks: 1_000,
            plant: PlantConfig::default(),
            loop_config: LoopConfig::default(),
        }
    }
}

/// Outcome of a scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Sensor probe attempts at startup.
    pub probe_attempts: u32,
    /// Goal changes observed after mode selection.
    pub waypoints_reached: u32,
    /// Wheel writes that did not succeed.
    pub write_failures: u32,
    /// Last telemetry frame.
    pub final_frame: TelemetryFrame,
    /// Plant pose at the end of the run (world frame).
    pub true_pose: Pose2D,
    /// Simulation time at the end of the run.
    pub sim_time_us: u64,
}

/// Run a scenario to completion.
pub fn run<K: TelemetrySink>(
    scenario: &Scenario,
    telemetry: K,
) -> Result<ScenarioReport, SimulatorError> {
    let (plant, mut nav) = build(scenario.plant.clone(), scenario.loop_config, telemetry)?;
    let probe_attempts = nav.start();

    let presses = scenario.mode.id() as u64;
    let mut waypoints_reached = 0;
    let mut write_failures = 0;
    let mut previous_index = nav.state().goal_index;

    for t in 0..scenario.ticks {
        let events = if t < presses {
            InputEvents::mode_advance()
        } else {
            InputEvents::NONE
        };
        let frame = nav.step(events);

        if !frame.write_status.is_success() {
            write_failures += 1;
        }
        if t >= presses && frame.goal_index != previous_index {
            waypoints_reached += 1;
        }
        previous_index = frame.goal_index;
    }

    let plant = plant.borrow();
    Ok(ScenarioReport {
        probe_attempts,
        waypoints_reached,
        write_failures,
        final_frame: *nav.last_frame(),
        true_pose: plant.true_pose(),
        sim_time_us: plant.sim_time_us(),
    })
}
