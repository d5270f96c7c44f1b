//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// I2C operation failed
    I2c(I2cError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Timer operation failed
    Timer(TimerError),
    /// Device did not respond as expected
    DeviceNotResponding,
    /// Invalid configuration provided
    InvalidConfig,
}

/// I2C-specific errors
///
/// The first three variants follow the status codes reported by a
/// two-wire transmission end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cError {
    /// Payload exceeds the transmit buffer
    DataTooLong,
    /// Address byte not acknowledged
    NackOnAddress,
    /// Data byte not acknowledged
    NackOnData,
    /// Arbitration lost or other bus error
    BusError,
    /// Timeout occurred
    Timeout,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::I2c(e) => write!(f, "I2C error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::DeviceNotResponding => write!(f, "Device not responding"),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

impl PlatformError {
    /// Short static description for log backends without `Display` support
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformError::I2c(I2cError::DataTooLong) => "i2c data too long",
            PlatformError::I2c(I2cError::NackOnAddress) => "i2c nack on address",
            PlatformError::I2c(I2cError::NackOnData) => "i2c nack on data",
            PlatformError::I2c(I2cError::BusError) => "i2c bus error",
            PlatformError::I2c(I2cError::Timeout) => "i2c timeout",
            PlatformError::Gpio(_) => "gpio error",
            PlatformError::Timer(_) => "timer error",
            PlatformError::DeviceNotResponding => "device not responding",
            PlatformError::InvalidConfig => "invalid configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = PlatformError::I2c(I2cError::NackOnAddress);
        assert_eq!(format!("{}", err), "I2C error: NackOnAddress");
        assert_eq!(
            format!("{}", PlatformError::DeviceNotResponding),
            "Device not responding"
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(
            PlatformError::I2c(I2cError::NackOnData).as_str(),
            "i2c nack on data"
        );
        assert_eq!(PlatformError::Timer(TimerError::Overflow).as_str(), "timer error");
    }
}
