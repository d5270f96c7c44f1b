//! I2C interface trait
//!
//! This module defines the I2C bus interface that platform implementations
//! must provide, and the status reported for each write.

use crate::platform::error::{I2cError, PlatformError};
use crate::platform::Result;

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus frequency in Hz
    pub frequency: u32,
    /// SDA pin number
    pub sda: u8,
    /// SCL pin number
    pub scl: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100 kHz standard mode
            sda: 0,
            scl: 26,
        }
    }
}

/// I2C interface trait
///
/// # Safety Invariants
///
/// - I2C peripheral must be initialized before use
/// - Only one owner per I2C bus instance
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait I2cInterface {
    /// Write data to I2C device
    ///
    /// Performs a complete I2C write transaction:
    /// START - ADDR(W) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge, the
    /// payload is too long, or the bus fails.
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Write then read from I2C device with a repeated START
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, bus error or timeout.
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;
}

/// Outcome of a single bus write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteStatus {
    /// Write acknowledged
    #[default]
    Success,
    /// Payload exceeded the transmit buffer
    DataTooLong,
    /// Address not acknowledged
    NackOnAddress,
    /// Data not acknowledged
    NackOnData,
    /// Any other bus failure
    OtherError,
    /// Failure outside the bus layer
    Unknown,
}

impl WriteStatus {
    /// Classify a write result
    pub fn from_result(result: &Result<()>) -> Self {
        match result {
            Ok(()) => WriteStatus::Success,
            Err(PlatformError::I2c(I2cError::DataTooLong)) => WriteStatus::DataTooLong,
            Err(PlatformError::I2c(I2cError::NackOnAddress)) => WriteStatus::NackOnAddress,
            Err(PlatformError::I2c(I2cError::NackOnData)) => WriteStatus::NackOnData,
            Err(PlatformError::I2c(_)) => WriteStatus::OtherError,
            Err(_) => WriteStatus::Unknown,
        }
    }

    /// True for `WriteStatus::Success`
    pub fn is_success(&self) -> bool {
        *self == WriteStatus::Success
    }

    /// Human-readable status
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStatus::Success => "Success",
            WriteStatus::DataTooLong => "Data too long",
            WriteStatus::NackOnAddress => "NACK on address",
            WriteStatus::NackOnData => "NACK on data",
            WriteStatus::OtherError => "Other error",
            WriteStatus::Unknown => "Unknown error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::TimerError;

    #[test]
    fn test_write_status_classification() {
        assert_eq!(WriteStatus::from_result(&Ok(())), WriteStatus::Success);
        assert_eq!(
            WriteStatus::from_result(&Err(PlatformError::I2c(I2cError::DataTooLong))),
            WriteStatus::DataTooLong
        );
        assert_eq!(
            WriteStatus::from_result(&Err(PlatformError::I2c(I2cError::NackOnAddress))),
            WriteStatus::NackOnAddress
        );
        assert_eq!(
            WriteStatus::from_result(&Err(PlatformError::I2c(I2cError::NackOnData))),
            WriteStatus::NackOnData
        );
        assert_eq!(
            WriteStatus::from_result(&Err(PlatformError::I2c(I2cError::Timeout))),
            WriteStatus::OtherError
        );
        assert_eq!(
            WriteStatus::from_result(&Err(PlatformError::Timer(TimerError::Overflow))),
            WriteStatus::Unknown
        );
    }

    #[test]
    fn test_write_status_strings() {
        assert!(WriteStatus::Success.is_success());
        assert!(!WriteStatus::NackOnData.is_success());
        assert_eq!(WriteStatus::NackOnAddress.as_str(), "NACK on address");
        assert_eq!(WriteStatus::Unknown.as_str(), "Unknown error");
    }
}
