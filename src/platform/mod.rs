//! Platform abstraction layer
//!
//! Hardware access (I2C bus, button GPIO, timing) goes through the traits in
//! this module so the navigation loop can run against mocks or a simulator.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{PlatformError, Result};
pub use traits::{GpioInterface, I2cInterface, TimerInterface, WriteStatus};
