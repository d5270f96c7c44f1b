//! Navigation Loop
//!
//! Cooperative, single-threaded control loop for the omni rover.
//!
//! ## Per-tick sequence
//!
//! 1. Sample the pose sensor (a failed read reuses the previous pose)
//! 2. Apply a calibration reset, then a mode advance, if requested
//! 3. Schedule the goal (may advance one waypoint)
//! 4. Compute the holonomic command (zero while stopped)
//! 5. Mix into wheel speeds and write them to the base
//! 6. Publish telemetry
//!
//! `step` adds the end-of-tick delay; `run` polls inputs and steps forever.
//!
//! ## Startup
//!
//! `start` probes the sensor until it answers, with a fixed backoff between
//! attempts, then calibrates the IMU, zeroes tracking and stops the wheels.
//!
//! No collaborator failure stops the loop. Failures are logged and the loop
//! keeps running.

use crate::communication::telemetry::{TelemetryFrame, TelemetrySink};
use crate::devices::traits::PoseSensor;
use crate::libraries::button::InputEvents;
use crate::libraries::motor_driver::{WheelDriver, ROVER_C_ADDR, ROVER_C_SPEED_REG};
use crate::platform::traits::TimerInterface;
use crate::{log_debug, log_error, log_info, log_warn};
use omni_rover_core::kinematics::{MixerConfig, OmniMixer};
use omni_rover_core::mode::{NavState, SchedulerConfig, WaypointScheduler};
use omni_rover_core::navigation::{ControllerConfig, Pose2D, PositionController};
use omni_rover_core::parameters::{NavigationParams, RoverParams};

/// Nominal end-of-tick delay
pub const DEFAULT_TICK_MS: u32 = 10;

/// Delay between sensor probes at startup
pub const DEFAULT_RETRY_MS: u32 = 1000;

/// Runtime configuration of the loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// Controller gains and clamp
    pub controller: ControllerConfig,
    /// Arrival radius
    pub scheduler: SchedulerConfig,
    /// Wheel clamp
    pub mixer: MixerConfig,
    /// End-of-tick delay in milliseconds
    pub tick_ms: u32,
    /// Sensor probe backoff in milliseconds
    pub retry_ms: u32,
    /// I2C address of the wheel controller
    pub wheel_address: u8,
    /// Register offset of the wheel speed block
    pub speed_register: u8,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            scheduler: SchedulerConfig::default(),
            mixer: MixerConfig::default(),
            tick_ms: DEFAULT_TICK_MS,
            retry_ms: DEFAULT_RETRY_MS,
            wheel_address: ROVER_C_ADDR,
            speed_register: ROVER_C_SPEED_REG,
        }
    }
}

impl LoopConfig {
    /// Build from parameter groups
    ///
    /// The wheel bus fields are consumed by whoever constructs the driver,
    /// since the loop only sees the `WheelDriver` trait.
    pub fn from_params(nav: &NavigationParams, rover: &RoverParams) -> Self {
        Self {
            controller: nav.to_controller_config(),
            scheduler: nav.to_scheduler_config(),
            mixer: rover.to_mixer_config(),
            tick_ms: rover.tick_ms,
            retry_ms: rover.retry_ms,
            wheel_address: rover.i2c_addr,
            speed_register: rover.speed_reg,
        }
    }
}

/// Omni rover navigation loop
///
/// Owns the navigation state and every collaborator. Generic over the pose
/// sensor `S`, wheel driver `W`, timer `T` and telemetry sink `K`.
pub struct NavigationLoop<S, W, T, K>
where
    S: PoseSensor,
    W: WheelDriver,
    T: TimerInterface,
    K: TelemetrySink,
{
    sensor: S,
    wheels: W,
    timer: T,
    telemetry: K,
    scheduler: WaypointScheduler,
    controller: PositionController,
    mixer: OmniMixer,
    config: LoopConfig,
    state: NavState,
    last_pose: Pose2D,
    last_frame: TelemetryFrame,
    tick: u64,
    sensor_faults: u32,
}

impl<S, W, T, K> NavigationLoop<S, W, T, K>
where
    S: PoseSensor,
    W: WheelDriver,
    T: TimerInterface,
    K: TelemetrySink,
{
    /// Create a loop in the stopped state with the goal at the origin
    pub fn new(sensor: S, wheels: W, timer: T, telemetry: K, config: LoopConfig) -> Self {
        Self {
            sensor,
            wheels,
            timer,
            telemetry,
            scheduler: WaypointScheduler::with_config(config.scheduler),
            controller: PositionController::with_config(config.controller),
            mixer: OmniMixer::with_config(config.mixer),
            config,
            state: NavState::new(),
            last_pose: Pose2D::ORIGIN,
            last_frame: TelemetryFrame::default(),
            tick: 0,
            sensor_faults: 0,
        }
    }

    /// Bring up the sensor and stop the wheels
    ///
    /// Blocks until the sensor answers its probe. Returns the number of
    /// probe attempts.
    pub fn start(&mut self) -> u32 {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            if self.sensor.begin() {
                break;
            }
            log_warn!(
                "Pose sensor not connected (attempt {}), check wiring and address",
                attempts
            );
            if self.timer.delay_ms(self.config.retry_ms).is_err() {
                log_error!("Retry delay failed");
            }
        }
        log_info!("Pose sensor connected after {} attempt(s)", attempts);

        self.calibrate();

        let _status = self.wheels.stop();
        log_info!("Wheels stopped: {}", _status.as_str());

        attempts
    }

    /// Calibrate the IMU and zero tracking
    fn calibrate(&mut self) {
        log_info!("Calibrating IMU and resetting tracking");
        if let Err(_e) = self.sensor.calibrate_imu() {
            log_warn!("IMU calibration failed: {}", _e.as_str());
        }
        if let Err(_e) = self.sensor.reset_tracking() {
            log_warn!("Tracking reset failed: {}", _e.as_str());
        }
    }

    /// Sample the pose, falling back to the last good sample
    fn sample_pose(&mut self) -> Pose2D {
        match self.sensor.position() {
            Ok(raw) => {
                self.last_pose = raw.to_pose_mm();
            }
            Err(_e) => {
                self.sensor_faults = self.sensor_faults.saturating_add(1);
                log_warn!("Pose read failed ({}), reusing last pose", _e.as_str());
            }
        }
        self.last_pose
    }

    /// Sample velocity and acceleration for telemetry (zero on failure)
    fn sample_motion(&mut self) -> (Pose2D, Pose2D) {
        let velocity = match self.sensor.velocity() {
            Ok(raw) => raw.to_mm(),
            Err(_e) => {
                self.sensor_faults = self.sensor_faults.saturating_add(1);
                log_warn!("Velocity read failed ({}), reporting zero", _e.as_str());
                Pose2D::ORIGIN
            }
        };
        let acceleration = match self.sensor.acceleration() {
            Ok(raw) => raw.to_mm(),
            Err(_e) => {
                self.sensor_faults = self.sensor_faults.saturating_add(1);
                log_warn!("Acceleration read failed ({}), reporting zero", _e.as_str());
                Pose2D::ORIGIN
            }
        };
        (velocity, acceleration)
    }

    /// Run one control tick without the end-of-tick delay
    pub fn tick(&mut self, events: InputEvents) -> TelemetryFrame {
        let pose = self.sample_pose();
        let (velocity, acceleration) = self.sample_motion();

        if events.calibration_reset {
            self.calibrate();
            self.state.reset_goal();
            log_info!("Waypoint sequence restarted at origin");
        }

        if events.mode_advance {
            let _previous = self.state.advance_mode();
            log_info!(
                "Mode transition: {} -> {}",
                _previous.name(),
                self.state.mode.name()
            );
        }

        let outcome = self.scheduler.advance(&pose, &mut self.state, self.tick);
        if outcome.advanced {
            log_debug!(
                "Waypoint reached, next index {} at ({}, {})",
                self.state.goal_index,
                self.state.goal.x,
                self.state.goal.y
            );
        }

        let command = self.controller.update(self.state.mode, &pose, &self.state.goal);
        let wheels = self.mixer.mix(&command);
        let write_status = self.wheels.set_speeds(&wheels);

        let frame = TelemetryFrame {
            tick: self.tick,
            mode: self.state.mode,
            pose,
            goal: self.state.goal,
            goal_index: self.state.goal_index,
            distance: outcome.distance,
            command,
            wheels,
            velocity,
            acceleration,
            write_status,
        };
        self.telemetry.publish(&frame);

        self.last_frame = frame;
        self.tick = self.tick.wrapping_add(1);
        frame
    }

    /// Run one tick and wait out the tick period
    pub fn step(&mut self, events: InputEvents) -> TelemetryFrame {
        let frame = self.tick(events);
        if self.timer.delay_ms(self.config.tick_ms).is_err() {
            log_error!("Tick delay failed");
        }
        frame
    }

    /// Poll inputs and step forever
    pub fn run<F: FnMut() -> InputEvents>(&mut self, mut poll: F) -> ! {
        loop {
            let events = poll();
            self.step(events);
        }
    }

    /// Failed pose, velocity and acceleration reads since construction
    pub fn sensor_faults(&self) -> u32 {
        self.sensor_faults
    }

    /// Navigation state
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Pose used by the last tick
    pub fn last_pose(&self) -> Pose2D {
        self.last_pose
    }

    /// Frame produced by the last tick
    pub fn last_frame(&self) -> &TelemetryFrame {
        &self.last_frame
    }

    /// Loop configuration
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Borrow the pose sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Mutably borrow the pose sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Borrow the wheel driver
    pub fn wheels(&self) -> &W {
        &self.wheels
    }

    /// Mutably borrow the wheel driver
    pub fn wheels_mut(&mut self) -> &mut W {
        &mut self.wheels
    }

    /// Borrow the timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Borrow the telemetry sink
    pub fn telemetry(&self) -> &K {
        &self.telemetry
    }
}
