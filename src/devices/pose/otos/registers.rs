//! Optical Tracking Odometry Sensor Register Definitions

/// Default 7-bit I2C address
pub const OTOS_ADDR: u8 = 0x17;

/// Product ID register
pub const PRODUCT_ID: u8 = 0x00;

/// Expected product ID value
pub const PRODUCT_ID_VALUE: u8 = 0x5F;

/// Hardware version register
pub const HW_VERSION: u8 = 0x01;

/// Firmware version register
pub const FW_VERSION: u8 = 0x02;

/// Linear scalar register
pub const SCALAR_LINEAR: u8 = 0x04;

/// Angular scalar register
pub const SCALAR_ANGULAR: u8 = 0x05;

/// IMU calibration register (write sample count, reads back remaining)
pub const IMU_CALIB: u8 = 0x06;

/// Reset register
pub const RESET: u8 = 0x07;

/// Reset register bit: zero the tracked pose
pub const RESET_TRACKING: u8 = 0x01;

/// Status register
pub const STATUS: u8 = 0x1F;

/// Position block start (X_L, X_H, Y_L, Y_H, H_L, H_H)
pub const POS_XL: u8 = 0x20;

/// Velocity block start
pub const VEL_XL: u8 = 0x26;

/// Acceleration block start
pub const ACC_XL: u8 = 0x2C;

/// IMU calibration sample count used at startup
pub const CALIB_SAMPLES: u8 = 255;

/// Time per calibration sample in milliseconds
pub const CALIB_MS_PER_SAMPLE: u32 = 3;

// ============================================================================
// Raw int16 scale factors
// ============================================================================

const INCHES_PER_METER: f32 = 39.370_08;

/// Position: +/-10 m full scale, in inches per LSB
pub const POS_SCALE: f32 = 10.0 / 32768.0 * INCHES_PER_METER;

/// Heading: +/-180 deg full scale
pub const HEADING_SCALE: f32 = 180.0 / 32768.0;

/// Velocity: +/-5 m/s full scale, in inches/s per LSB
pub const VEL_SCALE: f32 = 5.0 / 32768.0 * INCHES_PER_METER;

/// Angular velocity: +/-2000 deg/s full scale
pub const ANG_VEL_SCALE: f32 = 2000.0 / 32768.0;

/// Acceleration: +/-16 g full scale, in inches/s² per LSB
pub const ACC_SCALE: f32 = 16.0 * 9.806_65 / 32768.0 * INCHES_PER_METER;

/// Angular acceleration: +/-180000 deg/s² full scale
pub const ANG_ACC_SCALE: f32 = 180_000.0 / 32768.0;
