//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod gpio;
pub mod i2c;
pub mod timer;

pub use gpio::{GpioInterface, GpioMode};
pub use i2c::{I2cConfig, I2cInterface, WriteStatus};
pub use timer::TimerInterface;
