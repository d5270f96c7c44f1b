//! Optical Tracking Odometry Sensor Driver
//!
//! I2C driver for the optical tracking odometry sensor (optical flow plus
//! onboard IMU with on-chip pose fusion). The sensor is configured for its
//! power-on units, inches and degrees.
//!
//! ## Usage
//!
//! ```ignore
//! use omni_rover::devices::pose::Otos;
//! use omni_rover::devices::traits::PoseSensor;
//!
//! let mut otos = Otos::new(i2c, timer);
//! while !otos.begin() {}
//! otos.calibrate_imu()?;
//! otos.reset_tracking()?;
//! let raw = otos.position()?;
//! ```

mod driver;
pub mod registers;

pub use driver::Otos;
