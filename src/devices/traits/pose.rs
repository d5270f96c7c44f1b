//! Pose Sensor Trait
//!
//! Device-independent interface for dead-reckoning pose sensors consumed by
//! the navigation loop.
//!
//! All samples use the sensor's native units: inches for linear quantities
//! and degrees for angular ones. Conversion to control units happens in
//! [`SensorPose::to_pose_mm`].
//!
//! ## Usage
//!
//! ```ignore
//! use omni_rover::devices::traits::PoseSensor;
//!
//! fn sample<S: PoseSensor>(sensor: &mut S) {
//!     if let Ok(raw) = sensor.position() {
//!         let pose = raw.to_pose_mm();
//!         // feed the scheduler and controller
//!     }
//! }
//! ```

use omni_rover_core::navigation::SensorPose;

/// Pose sensor error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "embedded", derive(defmt::Format))]
pub enum PoseError {
    /// I2C communication failed
    I2cError,

    /// Sensor did not identify itself correctly
    NotConnected,

    /// IMU calibration did not complete
    CalibrationFailed,
}

impl PoseError {
    /// Short static description for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            PoseError::I2cError => "i2c error",
            PoseError::NotConnected => "not connected",
            PoseError::CalibrationFailed => "calibration failed",
        }
    }
}

/// Dead-reckoning pose sensor
///
/// Implementations report pose relative to the point where tracking was
/// last reset.
pub trait PoseSensor {
    /// Probe the sensor
    ///
    /// Returns `true` if the sensor responded and identified itself.
    fn begin(&mut self) -> bool;

    /// Calibrate the IMU (sensor must be flat and stationary)
    fn calibrate_imu(&mut self) -> Result<(), PoseError>;

    /// Zero the tracked pose at the current location
    fn reset_tracking(&mut self) -> Result<(), PoseError>;

    /// Read tracked position (inches, inches, degrees)
    fn position(&mut self) -> Result<SensorPose, PoseError>;

    /// Read velocity (inches/s, inches/s, degrees/s)
    fn velocity(&mut self) -> Result<SensorPose, PoseError>;

    /// Read acceleration (inches/s², inches/s², degrees/s²)
    fn acceleration(&mut self) -> Result<SensorPose, PoseError>;
}
