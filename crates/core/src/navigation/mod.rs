//! Navigation types and the position controller
//!
//! This module contains the pose/command value types and the proportional
//! controller that turns pose error into a holonomic command.

mod controller;
mod types;

pub use controller::{
    ControllerConfig, PositionController, DEFAULT_HEADING_GAIN, DEFAULT_MAX_COMMAND,
    DEFAULT_POSITION_GAIN,
};
pub use types::{HolonomicCommand, Pose2D, SensorPose, WheelSpeeds, MM_PER_INCH};
