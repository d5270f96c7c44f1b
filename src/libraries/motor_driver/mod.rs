//! Motor driver abstraction
//!
//! Wheel-level output for the four-wheel omni base.
//!
//! ## Features
//!
//! - Platform-independent `WheelDriver` trait taking a full four-wheel command
//! - RoverC driver: single I2C block write of four signed speeds
//! - Every write reports a `WriteStatus`; failures are never retried here
//!
//! ## Example
//!
//! ```ignore
//! use omni_rover::libraries::motor_driver::{RoverC, WheelDriver};
//! use omni_rover::platform::mock::MockI2c;
//! use omni_rover::platform::WriteStatus;
//! use omni_rover_core::navigation::WheelSpeeds;
//!
//! let mut rover = RoverC::new(MockI2c::default());
//! let status = rover.set_speeds(&WheelSpeeds::new(100, -100, 100, -100));
//! assert_eq!(status, WriteStatus::Success);
//! ```

pub mod rover_c;

pub use rover_c::{RoverC, ROVER_C_ADDR, ROVER_C_SPEED_REG};

use crate::platform::WriteStatus;
use omni_rover_core::navigation::WheelSpeeds;

/// Four-wheel speed output
///
/// Implementations send the whole command in one transaction and report the
/// outcome. They never panic and never retry.
pub trait WheelDriver {
    /// Command all four wheels
    fn set_speeds(&mut self, speeds: &WheelSpeeds) -> WriteStatus;

    /// Command all four wheels to zero
    fn stop(&mut self) -> WriteStatus {
        self.set_speeds(&WheelSpeeds::STOPPED)
    }
}
