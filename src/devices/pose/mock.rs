//! Mock Pose Sensor
//!
//! Scripted `PoseSensor` for unit tests. Queued position samples are
//! consumed one per read; once the queue drains the last sample is held.

use crate::devices::traits::{PoseError, PoseSensor};
use heapless::Deque;
use omni_rover_core::navigation::SensorPose;

/// Maximum number of queued position samples
pub const MOCK_QUEUE_DEPTH: usize = 64;

/// Mock pose sensor
#[derive(Debug, Default)]
pub struct MockPoseSensor {
    queued: Deque<SensorPose, MOCK_QUEUE_DEPTH>,
    position: SensorPose,
    velocity: SensorPose,
    acceleration: SensorPose,
    begin_failures: u32,
    read_failures: u32,
    motion_failures: [u32; 2],
    begin_calls: u32,
    calibrate_calls: u32,
    reset_calls: u32,
}

impl MockPoseSensor {
    /// Create a connected sensor at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sensor holding a fixed position
    pub fn at(position: SensorPose) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Queue a position sample
    ///
    /// Returns the sample back if the queue is full.
    pub fn push_position(&mut self, sample: SensorPose) -> Result<(), SensorPose> {
        self.queued.push_back(sample)
    }

    /// Replace the held position
    pub fn set_position(&mut self, sample: SensorPose) {
        self.position = sample;
    }

    /// Set velocity and acceleration samples
    pub fn set_motion(&mut self, velocity: SensorPose, acceleration: SensorPose) {
        self.velocity = velocity;
        self.acceleration = acceleration;
    }

    /// Make the next `count` probes fail
    pub fn fail_begin(&mut self, count: u32) {
        self.begin_failures = count;
    }

    /// Make the next `count` position reads fail
    pub fn fail_reads(&mut self, count: u32) {
        self.read_failures = count;
    }

    /// Make the next `count` velocity and acceleration reads fail
    pub fn fail_motion_reads(&mut self, count: u32) {
        self.motion_failures = [count; 2];
    }

    /// Number of `begin` calls
    pub fn begin_calls(&self) -> u32 {
        self.begin_calls
    }

    /// Number of `calibrate_imu` calls
    pub fn calibrate_calls(&self) -> u32 {
        self.calibrate_calls
    }

    /// Number of `reset_tracking` calls
    pub fn reset_calls(&self) -> u32 {
        self.reset_calls
    }
}

impl PoseSensor for MockPoseSensor {
    fn begin(&mut self) -> bool {
        self.begin_calls += 1;
        if self.begin_failures > 0 {
            self.begin_failures -= 1;
            return false;
        }
        true
    }

    fn calibrate_imu(&mut self) -> Result<(), PoseError> {
        self.calibrate_calls += 1;
        Ok(())
    }

    fn reset_tracking(&mut self) -> Result<(), PoseError> {
        self.reset_calls += 1;
        self.position = SensorPose::default();
        Ok(())
    }

    fn position(&mut self) -> Result<SensorPose, PoseError> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(PoseError::I2cError);
        }
        if let Some(sample) = self.queued.pop_front() {
            self.position = sample;
        }
        Ok(self.position)
    }

    fn velocity(&mut self) -> Result<SensorPose, PoseError> {
        take_failure(&mut self.motion_failures[0])?;
        Ok(self.velocity)
    }

    fn acceleration(&mut self) -> Result<SensorPose, PoseError> {
        take_failure(&mut self.motion_failures[1])?;
        Ok(self.acceleration)
    }
}

fn take_failure(remaining: &mut u32) -> Result<(), PoseError> {
    if *remaining > 0 {
        *remaining -= 1;
        return Err(PoseError::I2cError);
    }
    Ok(())
}
