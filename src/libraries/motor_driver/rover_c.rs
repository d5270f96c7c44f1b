//! RoverC omni base driver
//!
//! The base's controller accepts a register offset followed by four signed
//! 8-bit wheel speeds. Wheels are written in the controller's order
//! (front-left, front-right, rear-right, rear-left), which transposes the
//! rear pair relative to the mixer's order.

use super::WheelDriver;
use crate::platform::traits::I2cInterface;
use crate::platform::WriteStatus;
use crate::{log_trace, log_warn};
use omni_rover_core::navigation::WheelSpeeds;

/// Default 7-bit I2C address of the base controller
pub const ROVER_C_ADDR: u8 = 0x38;

/// Register offset of the wheel speed block
pub const ROVER_C_SPEED_REG: u8 = 0x00;

/// RoverC wheel driver over I2C
pub struct RoverC<I: I2cInterface> {
    i2c: I,
    address: u8,
    speed_register: u8,
    last_status: WriteStatus,
}

impl<I: I2cInterface> RoverC<I> {
    /// Create a driver at the default address and register
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, ROVER_C_ADDR, ROVER_C_SPEED_REG)
    }

    /// Create a driver at a custom address and register
    pub fn with_address(i2c: I, address: u8, speed_register: u8) -> Self {
        Self {
            i2c,
            address,
            speed_register,
            last_status: WriteStatus::Success,
        }
    }

    /// Build the payload for one write: register, then wheels in wire order
    pub fn encode(&self, speeds: &WheelSpeeds) -> [u8; 5] {
        let [fl, fr, rr, rl] = speeds.wire_order();
        [
            self.speed_register,
            fl as u8,
            fr as u8,
            rr as u8,
            rl as u8,
        ]
    }

    /// Status of the most recent write
    pub fn last_status(&self) -> WriteStatus {
        self.last_status
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Borrow the bus (test inspection)
    pub fn bus(&self) -> &I {
        &self.i2c
    }

    /// Mutably borrow the bus
    pub fn bus_mut(&mut self) -> &mut I {
        &mut self.i2c
    }
}

impl<I: I2cInterface> WheelDriver for RoverC<I> {
    fn set_speeds(&mut self, speeds: &WheelSpeeds) -> WriteStatus {
        let payload = self.encode(speeds);
        let result = self.i2c.write(self.address, &payload);
        let status = WriteStatus::from_result(&result);

        if status.is_success() {
            log_trace!("RoverC: write ok");
        } else {
            log_warn!("RoverC: write failed: {}", status.as_str());
        }

        self.last_status = status;
        status
    }
}
