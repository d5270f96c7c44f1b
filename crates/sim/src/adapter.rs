//! Platform and device adapters backed by the shared plant.
//!
//! Each adapter holds a handle to the same `OmniPlant`, so the navigation
//! loop drives the plant through its ordinary traits:
//! - `SimPoseSensor` answers `PoseSensor` calls from the plant's tracker
//! - `SimI2c` decodes RoverC wheel writes into plant wheel commands
//! - `SimTimer` advances simulation time on every delay

use std::cell::RefCell;
use std::rc::Rc;

use omni_rover::devices::traits::{PoseError, PoseSensor};
use omni_rover::libraries::motor_driver::{ROVER_C_ADDR, ROVER_C_SPEED_REG};
use omni_rover::platform::error::{I2cError, PlatformError};
use omni_rover::platform::traits::{I2cInterface, TimerInterface};
use omni_rover_core::navigation::{SensorPose, WheelSpeeds};

use crate::plant::OmniPlant;

/// Shared handle to the plant.
pub type SharedPlant = Rc<RefCell<OmniPlant>>;

/// Transmit buffer size of the motor bus.
pub const I2C_BUFFER_LEN: usize = 32;

/// Pose sensor backed by the plant's tracker.
pub struct SimPoseSensor {
    plant: SharedPlant,
    connected: bool,
}

impl SimPoseSensor {
    pub fn new(plant: SharedPlant) -> Self {
        Self {
            plant,
            connected: false,
        }
    }

    /// True once a probe has succeeded.
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl PoseSensor for SimPoseSensor {
    fn begin(&mut self) -> bool {
        self.connected = self.plant.borrow_mut().probe();
        self.connected
    }

    fn calibrate_imu(&mut self) -> Result<(), PoseError> {
        if !self.connected {
            return Err(PoseError::NotConnected);
        }
        self.plant.borrow_mut().calibrate();
        Ok(())
    }

    fn reset_tracking(&mut self) -> Result<(), PoseError> {
        if !self.connected {
            return Err(PoseError::NotConnected);
        }
        self.plant.borrow_mut().reset_tracking();
        Ok(())
    }

    fn position(&mut self) -> Result<SensorPose, PoseError> {
        if !self.connected {
            return Err(PoseError::NotConnected);
        }
        Ok(self.plant.borrow_mut().tracked_position())
    }

    fn velocity(&mut self) -> Result<SensorPose, PoseError> {
        if !self.connected {
            return Err(PoseError::NotConnected);
        }
        Ok(self.plant.borrow().tracked_velocity())
    }

    fn acceleration(&mut self) -> Result<SensorPose, PoseError> {
        if !self.connected {
            return Err(PoseError::NotConnected);
        }
        Ok(self.plant.borrow().tracked_acceleration())
    }
}

/// Motor bus emulating the RoverC controller.
pub struct SimI2c {
    plant: SharedPlant,
    fault: Option<I2cError>,
}

impl SimI2c {
    pub fn new(plant: SharedPlant) -> Self {
        Self { plant, fault: None }
    }

    /// Fail every transaction with `fault` until cleared with `None`.
    pub fn set_fault(&mut self, fault: Option<I2cError>) {
        self.fault = fault;
    }
}

impl I2cInterface for SimI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> omni_rover::platform::Result<()> {
        if let Some(fault) = self.fault {
            return Err(PlatformError::I2c(fault));
        }
        if data.len() > I2C_BUFFER_LEN {
            return Err(PlatformError::I2c(I2cError::DataTooLong));
        }
        if addr != ROVER_C_ADDR {
            return Err(PlatformError::I2c(I2cError::NackOnAddress));
        }

        // Register offset, then FL, FR, RR, RL
        if let [ROVER_C_SPEED_REG, fl, fr, rr, rl] = *data {
            let wheels = WheelSpeeds::from_wire_order([fl as i8, fr as i8, rr as i8, rl as i8]);
            self.plant.borrow_mut().set_wheels(wheels);
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        addr: u8,
        _write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> omni_rover::platform::Result<()> {
        if let Some(fault) = self.fault {
            return Err(PlatformError::I2c(fault));
        }
        if addr != ROVER_C_ADDR {
            return Err(PlatformError::I2c(I2cError::NackOnAddress));
        }
        read_buffer.fill(0);
        Ok(())
    }
}

/// Timer whose delays step the plant.
pub struct SimTimer {
    plant: SharedPlant,
}

impl SimTimer {
    pub fn new(plant: SharedPlant) -> Self {
        Self { plant }
    }
}

impl TimerInterface for SimTimer {
    fn delay_us(&mut self, us: u32) -> omni_rover::platform::Result<()> {
        self.plant.borrow_mut().advance_us(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.plant.borrow().sim_time_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::PlantConfig;

    fn shared() -> SharedPlant {
        let config = PlantConfig {
            seed: Some(3),
            ..Default::default()
        };
        Rc::new(RefCell::new(OmniPlant::new(config).unwrap()))
    }

    #[test]
    fn test_sensor_requires_probe() {
        let plant = shared();
        let mut sensor = SimPoseSensor::new(plant);
        assert_eq!(sensor.position(), Err(PoseError::NotConnected));
        assert!(sensor.begin());
        assert!(sensor.is_connected());
        assert_eq!(sensor.position().unwrap(), SensorPose::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_i2c_decodes_wire_order() {
        let plant = shared();
        let mut i2c = SimI2c::new(plant.clone());
        i2c.write(ROVER_C_ADDR, &[0x00, 1, 2, 3, 4]).unwrap();
        // wire FL, FR, RR, RL
        assert_eq!(plant.borrow().wheels(), WheelSpeeds::new(1, 2, 4, 3));
        assert_eq!(plant.borrow().wheel_writes(), 1);
    }

    #[test]
    fn test_i2c_errors() {
        let plant = shared();
        let mut i2c = SimI2c::new(plant.clone());
        assert_eq!(
            i2c.write(0x40, &[0x00, 0, 0, 0, 0]),
            Err(PlatformError::I2c(I2cError::NackOnAddress))
        );
        assert_eq!(
            i2c.write(ROVER_C_ADDR, &[0u8; 40]),
            Err(PlatformError::I2c(I2cError::DataTooLong))
        );

        i2c.set_fault(Some(I2cError::NackOnData));
        assert_eq!(
            i2c.write(ROVER_C_ADDR, &[0x00, 9, 9, 9, 9]),
            Err(PlatformError::I2c(I2cError::NackOnData))
        );
        assert_eq!(plant.borrow().wheel_writes(), 0);
    }

    #[test]
    fn test_timer_steps_plant() {
        let plant = shared();
        plant
            .borrow_mut()
            .set_wheels(WheelSpeeds::new(100, -100, 100, -100));
        let mut timer = SimTimer::new(plant.clone());
        timer.delay_ms(100).unwrap();

        assert_eq!(timer.now_ms(), 100);
        assert!((plant.borrow().true_pose().x - 30.0).abs() < 0.01);
    }
}
