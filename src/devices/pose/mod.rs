//! Pose Sensor Drivers
//!
//! Drivers implementing the `PoseSensor` trait.
//!
//! ## Available Drivers
//!
//! - `mock`: Scripted pose sensor for testing (always available)
//! - `otos`: Optical tracking odometry sensor over I2C

pub mod mock;
pub mod otos;

pub use mock::MockPoseSensor;
pub use otos::Otos;
