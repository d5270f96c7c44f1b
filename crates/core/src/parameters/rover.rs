//! Rover Hardware and Loop Parameter Definitions
//!
//! # Parameters
//!
//! - `MOT_WHEEL_MAX` - Per-wheel speed clamp after mixing
//! - `ROVER_I2C_ADDR` - 7-bit I2C address of the motor controller
//! - `ROVER_SPD_REG` - Register offset of the four wheel-speed bytes
//! - `NAV_TICK_MS` - Delay at the end of each control tick
//! - `SNS_RETRY_MS` - Backoff between pose sensor connection attempts

use super::error::ParameterError;
use super::storage::{load_int, ParamFlags, ParamValue, ParameterStore};
use crate::kinematics::MixerConfig;

const DEFAULT_WHEEL_MAX: i32 = 120;
const DEFAULT_I2C_ADDR: i32 = 0x38;
const DEFAULT_SPEED_REG: i32 = 0x00;
const DEFAULT_TICK_MS: i32 = 10;
const DEFAULT_RETRY_MS: i32 = 1000;

const MIN_WHEEL_MAX: i32 = 1;
const MAX_WHEEL_MAX: i32 = 127;

const MIN_I2C_ADDR: i32 = 0x08;
const MAX_I2C_ADDR: i32 = 0x77;

const MIN_TICK_MS: i32 = 1;
const MAX_TICK_MS: i32 = 1000;

const MIN_RETRY_MS: i32 = 10;
const MAX_RETRY_MS: i32 = 60_000;

/// Rover parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoverParams {
    /// Per-wheel speed clamp
    pub wheel_max: i32,
    /// Motor controller I2C address
    pub i2c_addr: u8,
    /// Wheel speed register offset
    pub speed_reg: u8,
    /// End-of-tick delay in milliseconds
    pub tick_ms: u32,
    /// Sensor connection retry backoff in milliseconds
    pub retry_ms: u32,
}

impl Default for RoverParams {
    fn default() -> Self {
        Self {
            wheel_max: DEFAULT_WHEEL_MAX,
            i2c_addr: DEFAULT_I2C_ADDR as u8,
            speed_reg: DEFAULT_SPEED_REG as u8,
            tick_ms: DEFAULT_TICK_MS as u32,
            retry_ms: DEFAULT_RETRY_MS as u32,
        }
    }
}

impl RoverParams {
    /// Register rover parameters with default values
    ///
    /// The bus address and register are wiring facts and registered read-only.
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "MOT_WHEEL_MAX",
            ParamValue::Int(DEFAULT_WHEEL_MAX),
            ParamFlags::empty(),
        )?;
        store.register(
            "ROVER_I2C_ADDR",
            ParamValue::Int(DEFAULT_I2C_ADDR),
            ParamFlags::READ_ONLY,
        )?;
        store.register(
            "ROVER_SPD_REG",
            ParamValue::Int(DEFAULT_SPEED_REG),
            ParamFlags::READ_ONLY | ParamFlags::HIDDEN,
        )?;
        store.register(
            "NAV_TICK_MS",
            ParamValue::Int(DEFAULT_TICK_MS),
            ParamFlags::empty(),
        )?;
        store.register(
            "SNS_RETRY_MS",
            ParamValue::Int(DEFAULT_RETRY_MS),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load rover parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            wheel_max: load_int(
                store,
                "MOT_WHEEL_MAX",
                DEFAULT_WHEEL_MAX,
                MIN_WHEEL_MAX,
                MAX_WHEEL_MAX,
            ),
            i2c_addr: load_int(
                store,
                "ROVER_I2C_ADDR",
                DEFAULT_I2C_ADDR,
                MIN_I2C_ADDR,
                MAX_I2C_ADDR,
            ) as u8,
            speed_reg: load_int(store, "ROVER_SPD_REG", DEFAULT_SPEED_REG, 0, 0xFF) as u8,
            tick_ms: load_int(
                store,
                "NAV_TICK_MS",
                DEFAULT_TICK_MS,
                MIN_TICK_MS,
                MAX_TICK_MS,
            ) as u32,
            retry_ms: load_int(
                store,
                "SNS_RETRY_MS",
                DEFAULT_RETRY_MS,
                MIN_RETRY_MS,
                MAX_RETRY_MS,
            ) as u32,
        }
    }

    /// Mixer configuration using the standard ±100 command scale
    pub fn to_mixer_config(&self) -> MixerConfig {
        MixerConfig {
            max_wheel_speed: self.wheel_max,
            ..MixerConfig::default()
        }
    }

    /// Validate rover parameters
    pub fn is_valid(&self) -> bool {
        (MIN_WHEEL_MAX..=MAX_WHEEL_MAX).contains(&self.wheel_max)
            && (MIN_I2C_ADDR..=MAX_I2C_ADDR).contains(&(self.i2c_addr as i32))
            && (MIN_TICK_MS..=MAX_TICK_MS).contains(&(self.tick_ms as i32))
            && (MIN_RETRY_MS..=MAX_RETRY_MS).contains(&(self.retry_ms as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RoverParams::default();
        assert_eq!(params.wheel_max, 120);
        assert_eq!(params.i2c_addr, 0x38);
        assert_eq!(params.speed_reg, 0x00);
        assert_eq!(params.tick_ms, 10);
        assert_eq!(params.retry_ms, 1000);
        assert!(params.is_valid());
    }

    #[test]
    fn test_from_store_round_trip_defaults() {
        let mut store = ParameterStore::new();
        RoverParams::register_defaults(&mut store).unwrap();
        assert_eq!(RoverParams::from_store(&store), RoverParams::default());
        // Register offset is hidden from listings
        assert_eq!(store.count(), 4);
    }

    #[test]
    fn test_address_is_read_only() {
        let mut store = ParameterStore::new();
        RoverParams::register_defaults(&mut store).unwrap();
        assert_eq!(
            store.set("ROVER_I2C_ADDR", ParamValue::Int(0x40)),
            Err(ParameterError::ReadOnly)
        );
    }

    #[test]
    fn test_wheel_max_clamped_to_i8() {
        let mut store = ParameterStore::new();
        RoverParams::register_defaults(&mut store).unwrap();
        store.set("MOT_WHEEL_MAX", ParamValue::Int(500)).unwrap();
        let params = RoverParams::from_store(&store);
        assert_eq!(params.wheel_max, 127);
        assert_eq!(params.to_mixer_config().max_wheel_speed, 127);
        assert_eq!(params.to_mixer_config().command_limit, 100);
    }

    #[test]
    fn test_tick_override() {
        let mut store = ParameterStore::new();
        RoverParams::register_defaults(&mut store).unwrap();
        store.set("NAV_TICK_MS", ParamValue::Int(20)).unwrap();
        assert_eq!(RoverParams::from_store(&store).tick_ms, 20);
    }

    #[test]
    fn test_default_mixer_config() {
        assert_eq!(
            RoverParams::default().to_mixer_config(),
            MixerConfig::default()
        );
    }
}
