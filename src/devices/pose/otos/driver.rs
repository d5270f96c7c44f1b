//! Optical Tracking Odometry Sensor I2C Driver Implementation

use super::registers::{self, OTOS_ADDR};
use crate::devices::traits::{PoseError, PoseSensor};
use crate::platform::traits::{I2cInterface, TimerInterface};
use crate::{log_debug, log_warn};
use omni_rover_core::navigation::SensorPose;

/// Optical tracking odometry sensor driver
///
/// Owns the I2C bus handle and a timer used to wait out IMU calibration.
pub struct Otos<I: I2cInterface, T: TimerInterface> {
    i2c: I,
    timer: T,
    address: u8,
}

impl<I: I2cInterface, T: TimerInterface> Otos<I, T> {
    /// Create a driver at the default address
    pub fn new(i2c: I, timer: T) -> Self {
        Self::with_address(i2c, timer, OTOS_ADDR)
    }

    /// Create a driver at a custom address
    pub fn with_address(i2c: I, timer: T, address: u8) -> Self {
        Self {
            i2c,
            timer,
            address,
        }
    }

    /// Release the bus and timer
    pub fn release(self) -> (I, T) {
        (self.i2c, self.timer)
    }

    fn wait_ms(&mut self, ms: u32) {
        if let Err(_e) = self.timer.delay_ms(ms) {
            log_warn!("OTOS: delay failed: {}", _e.as_str());
        }
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, PoseError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|_| PoseError::I2cError)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), PoseError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| PoseError::I2cError)
    }

    /// Read a six-byte X/Y/H block and scale it
    fn read_block(
        &mut self,
        start: u8,
        linear_scale: f32,
        angular_scale: f32,
    ) -> Result<SensorPose, PoseError> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[start], &mut buf)
            .map_err(|_| PoseError::I2cError)?;
        Ok(Self::convert_block(&buf, linear_scale, angular_scale))
    }

    fn convert_block(buf: &[u8; 6], linear_scale: f32, angular_scale: f32) -> SensorPose {
        let x = i16::from_le_bytes([buf[0], buf[1]]);
        let y = i16::from_le_bytes([buf[2], buf[3]]);
        let h = i16::from_le_bytes([buf[4], buf[5]]);
        SensorPose::new(
            x as f32 * linear_scale,
            y as f32 * linear_scale,
            h as f32 * angular_scale,
        )
    }
}

impl<I: I2cInterface, T: TimerInterface> PoseSensor for Otos<I, T> {
    fn begin(&mut self) -> bool {
        match self.read_register(registers::PRODUCT_ID) {
            Ok(registers::PRODUCT_ID_VALUE) => true,
            Ok(_id) => {
                log_warn!("OTOS: unexpected product id {}", _id);
                false
            }
            Err(_) => false,
        }
    }

    fn calibrate_imu(&mut self) -> Result<(), PoseError> {
        let samples = registers::CALIB_SAMPLES;
        self.write_register(registers::IMU_CALIB, samples)?;

        self.wait_ms(registers::CALIB_MS_PER_SAMPLE * samples as u32);

        // Register counts down to zero as samples are taken
        for _ in 0..samples {
            if self.read_register(registers::IMU_CALIB)? == 0 {
                log_debug!("OTOS: IMU calibration complete");
                return Ok(());
            }
            self.wait_ms(registers::CALIB_MS_PER_SAMPLE);
        }
        log_warn!("OTOS: IMU calibration did not finish");
        Err(PoseError::CalibrationFailed)
    }

    fn reset_tracking(&mut self) -> Result<(), PoseError> {
        self.write_register(registers::RESET, registers::RESET_TRACKING)
    }

    fn position(&mut self) -> Result<SensorPose, PoseError> {
        self.read_block(
            registers::POS_XL,
            registers::POS_SCALE,
            registers::HEADING_SCALE,
        )
    }

    fn velocity(&mut self) -> Result<SensorPose, PoseError> {
        self.read_block(
            registers::VEL_XL,
            registers::VEL_SCALE,
            registers::ANG_VEL_SCALE,
        )
    }

    fn acceleration(&mut self) -> Result<SensorPose, PoseError> {
        self.read_block(
            registers::ACC_XL,
            registers::ACC_SCALE,
            registers::ANG_ACC_SCALE,
        )
    }
}
