//! Mock platform implementation for testing
//!
//! Mock implementations of the platform traits for unit testing without
//! hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use omni_rover::platform::mock::{I2cTransaction, MockI2c};
//! use omni_rover::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::default();
//! i2c.write(0x38, &[0x00, 1, 2, 3, 4]).unwrap();
//! assert_eq!(
//!     i2c.transactions()[0],
//!     I2cTransaction::Write { addr: 0x38, data: vec![0x00, 1, 2, 3, 4] }
//! );
//! ```

mod gpio;
mod i2c;
mod timer;

pub use gpio::MockGpio;
pub use i2c::{I2cTransaction, MockI2c};
pub use timer::MockTimer;
