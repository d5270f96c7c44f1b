//! Common libraries
//!
//! Vehicle-agnostic building blocks used by the rover loop.
//!
//! ## Libraries
//!
//! - `button`: Debounce-free edge detection for operator buttons
//! - `motor_driver`: Wheel driver abstraction (RoverC I2C base)

pub mod button;
pub mod motor_driver;

pub use button::{Button, ButtonPanel, InputEvents};
pub use motor_driver::{RoverC, WheelDriver};
