//! Kinematic omni-wheel plant.
//!
//! Integrates the four wheel speeds of an omni base into a planar pose and
//! synthesizes what the optical tracking sensor would report: pose relative
//! to the last tracking reset, in inches and degrees, with optional
//! Gaussian noise.

use omni_rover_core::navigation::{Pose2D, SensorPose, WheelSpeeds, MM_PER_INCH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SimulatorError;

/// Configuration for the omni plant.
#[derive(Debug, Clone)]
pub struct PlantConfig {
    /// Linear speed per wheel speed unit in mm/s.
    pub speed_per_unit: f32,
    /// Turn rate per rotational unit in deg/s.
    pub turn_rate_per_unit: f32,
    /// Position noise standard deviation in mm.
    pub position_noise_mm: f32,
    /// Heading noise standard deviation in degrees.
    pub heading_noise_deg: f32,
    /// Number of sensor probes that fail before the sensor answers.
    pub probe_failures: u32,
    /// RNG seed for deterministic mode. None = random.
    pub seed: Option<u64>,
    /// Integration step size in microseconds.
    pub step_size_us: u64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            speed_per_unit: 3.0,
            turn_rate_per_unit: 2.0,
            position_noise_mm: 0.0,
            heading_noise_deg: 0.0,
            probe_failures: 0,
            seed: None,
            step_size_us: 10_000, // 100 Hz
        }
    }
}

impl PlantConfig {
    /// Check that the configuration describes a usable plant.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if self.step_size_us == 0 {
            return Err(SimulatorError::InvalidConfig("step size must be positive"));
        }
        if !(self.speed_per_unit.is_finite() && self.speed_per_unit > 0.0) {
            return Err(SimulatorError::InvalidConfig("speed per unit must be positive"));
        }
        if !(self.turn_rate_per_unit.is_finite() && self.turn_rate_per_unit > 0.0) {
            return Err(SimulatorError::InvalidConfig("turn rate per unit must be positive"));
        }
        if self.position_noise_mm < 0.0 || self.heading_noise_deg < 0.0 {
            return Err(SimulatorError::InvalidConfig("noise must not be negative"));
        }
        Ok(())
    }
}

/// Body-frame motion demand recovered from wheel speeds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyMotion {
    pub forward: f32,
    pub lateral: f32,
    pub rotate: f32,
}

impl BodyMotion {
    /// Invert the omni mixing matrix.
    pub fn from_wheels(wheels: &WheelSpeeds) -> Self {
        let fl = wheels.front_left as f32;
        let fr = wheels.front_right as f32;
        let rl = wheels.rear_left as f32;
        let rr = wheels.rear_right as f32;
        Self {
            forward: (fl - fr + rl - rr) / 4.0,
            lateral: (fl + fr + rl + rr) / 4.0,
            rotate: (-fl + fr + rl - rr) / 4.0,
        }
    }
}

/// World-frame state (mm, mm, degrees).
#[derive(Debug, Clone, Copy, Default)]
struct PlantState {
    x: f32,
    y: f32,
    heading: f32,
    vx: f32,
    vy: f32,
    omega: f32,
    ax: f32,
    ay: f32,
    alpha: f32,
}

/// Omni-wheel plant with a simulated tracking sensor.
pub struct OmniPlant {
    config: PlantConfig,
    rng: StdRng,
    state: PlantState,
    wheels: WheelSpeeds,
    /// World pose at the last tracking reset.
    origin: Pose2D,
    sim_time_us: u64,
    pending_us: u64,
    probe_attempts: u32,
    calibrations: u32,
    wheel_writes: u64,
}

impl OmniPlant {
    /// Create a plant at rest at the world origin.
    pub fn new(config: PlantConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            state: PlantState::default(),
            wheels: WheelSpeeds::STOPPED,
            origin: Pose2D::ORIGIN,
            sim_time_us: 0,
            pending_us: 0,
            probe_attempts: 0,
            calibrations: 0,
            wheel_writes: 0,
        })
    }

    /// Plant configuration.
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Latch a new wheel command.
    pub fn set_wheels(&mut self, wheels: WheelSpeeds) {
        self.wheels = wheels;
        self.wheel_writes += 1;
    }

    /// Current wheel command.
    pub fn wheels(&self) -> WheelSpeeds {
        self.wheels
    }

    /// Number of wheel commands received.
    pub fn wheel_writes(&self) -> u64 {
        self.wheel_writes
    }

    /// Simulation time in microseconds.
    pub fn sim_time_us(&self) -> u64 {
        self.sim_time_us
    }

    /// Advance simulation time, integrating in fixed steps.
    ///
    /// Time shorter than a step is carried over to the next call.
    pub fn advance_us(&mut self, us: u64) {
        self.sim_time_us += us;
        self.pending_us += us;
        let step = self.config.step_size_us;
        while self.pending_us >= step {
            self.pending_us -= step;
            self.integrate(step as f32 / 1_000_000.0);
        }
    }

    fn integrate(&mut self, dt: f32) {
        let motion = BodyMotion::from_wheels(&self.wheels);
        let heading_rad = self.state.heading.to_radians();
        let (sin_h, cos_h) = heading_rad.sin_cos();

        let f = motion.forward * self.config.speed_per_unit;
        let l = motion.lateral * self.config.speed_per_unit;
        let vx = f * cos_h - l * sin_h;
        let vy = f * sin_h + l * cos_h;
        let omega = motion.rotate * self.config.turn_rate_per_unit;

        self.state.ax = (vx - self.state.vx) / dt;
        self.state.ay = (vy - self.state.vy) / dt;
        self.state.alpha = (omega - self.state.omega) / dt;
        self.state.vx = vx;
        self.state.vy = vy;
        self.state.omega = omega;

        self.state.x += vx * dt;
        self.state.y += vy * dt;
        self.state.heading = normalize_degrees(self.state.heading + omega * dt);
    }

    /// True world pose (mm, mm, degrees).
    pub fn true_pose(&self) -> Pose2D {
        Pose2D::new(self.state.x, self.state.y, self.state.heading)
    }

    /// Place the rover at a world pose, at rest.
    pub fn place(&mut self, pose: Pose2D) {
        self.state = PlantState {
            x: pose.x,
            y: pose.y,
            heading: pose.heading,
            ..PlantState::default()
        };
    }

    /// Answer a sensor probe.
    pub fn probe(&mut self) -> bool {
        self.probe_attempts += 1;
        self.probe_attempts > self.config.probe_failures
    }

    /// Number of probes so far.
    pub fn probe_attempts(&self) -> u32 {
        self.probe_attempts
    }

    /// Record an IMU calibration.
    pub fn calibrate(&mut self) {
        self.calibrations += 1;
    }

    /// Number of IMU calibrations so far.
    pub fn calibrations(&self) -> u32 {
        self.calibrations
    }

    /// Make the current pose the tracking origin.
    pub fn reset_tracking(&mut self) {
        self.origin = self.true_pose();
    }

    /// Rotate a world-frame vector into the tracking frame.
    fn to_tracking_frame(&self, x: f32, y: f32) -> (f32, f32) {
        let (sin_o, cos_o) = self.origin.heading.to_radians().sin_cos();
        (x * cos_o + y * sin_o, -x * sin_o + y * cos_o)
    }

    /// Tracked position as the sensor reports it (inches, degrees).
    pub fn tracked_position(&mut self) -> SensorPose {
        let (x, y) =
            self.to_tracking_frame(self.state.x - self.origin.x, self.state.y - self.origin.y);
        let h = normalize_degrees(self.state.heading - self.origin.heading);

        let pos_noise = self.config.position_noise_mm;
        let hdg_noise = self.config.heading_noise_deg;
        let x = x + self.gaussian_noise(pos_noise);
        let y = y + self.gaussian_noise(pos_noise);
        let h = h + self.gaussian_noise(hdg_noise);

        SensorPose::new(x / MM_PER_INCH, y / MM_PER_INCH, h)
    }

    /// Tracked velocity (inches/s, degrees/s).
    pub fn tracked_velocity(&self) -> SensorPose {
        let (vx, vy) = self.to_tracking_frame(self.state.vx, self.state.vy);
        SensorPose::new(vx / MM_PER_INCH, vy / MM_PER_INCH, self.state.omega)
    }

    /// Tracked acceleration (inches/s², degrees/s²).
    pub fn tracked_acceleration(&self) -> SensorPose {
        let (ax, ay) = self.to_tracking_frame(self.state.ax, self.state.ay);
        SensorPose::new(ax / MM_PER_INCH, ay / MM_PER_INCH, self.state.alpha)
    }

    /// Generate Gaussian noise using Box-Muller transform.
    fn gaussian_noise(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let u1: f32 = self.rng.gen::<f32>().max(f32::EPSILON);
        let u2: f32 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
        z * stddev
    }
}

/// Wrap an angle in degrees to [-180, 180].
fn normalize_degrees(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}
