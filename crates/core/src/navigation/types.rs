//! Navigation type definitions
//!
//! This module contains the value types passed through one control tick:
//! - `Pose2D`: Dead-reckoning pose in millimeters and degrees
//! - `SensorPose`: Raw pose as reported by the optical tracking sensor
//! - `HolonomicCommand`: Forward/lateral/rotate demand from the controller
//! - `WheelSpeeds`: Per-wheel speed commands from the mixer

use libm::{sqrtf, truncf};

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Pose in the tracking frame
///
/// Position in millimeters, heading in degrees. Recomputed every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2D {
    /// X position (mm)
    pub x: f32,
    /// Y position (mm)
    pub y: f32,
    /// Heading (degrees)
    pub heading: f32,
}

impl Pose2D {
    /// Pose at the tracking origin
    pub const ORIGIN: Pose2D = Pose2D {
        x: 0.0,
        y: 0.0,
        heading: 0.0,
    };

    /// Create a new pose
    pub const fn new(x: f32, y: f32, heading: f32) -> Self {
        Self { x, y, heading }
    }

    /// Create a position-only goal (heading held at 0)
    pub const fn goal(x: f32, y: f32) -> Self {
        Self { x, y, heading: 0.0 }
    }

    /// Distance from this pose to `goal`
    ///
    /// Combines position error (mm) and heading error (degrees) in a single
    /// Euclidean norm.
    pub fn distance_to(&self, goal: &Pose2D) -> f32 {
        let dx = goal.x - self.x;
        let dy = goal.y - self.y;
        let dz = goal.heading - self.heading;
        sqrtf(dx * dx + dy * dy + dz * dz)
    }
}

/// Raw pose reported by the optical tracking sensor
///
/// The sensor reports linear quantities in inches and angular ones in degrees.
/// The same layout is used for position, velocity and acceleration samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorPose {
    /// X component (inches, inches/s or inches/s²)
    pub x: f32,
    /// Y component (inches, inches/s or inches/s²)
    pub y: f32,
    /// Heading component (degrees, degrees/s or degrees/s²)
    pub h: f32,
}

impl SensorPose {
    /// Create a new raw sensor sample
    pub const fn new(x: f32, y: f32, h: f32) -> Self {
        Self { x, y, h }
    }

    /// Convert to a control pose in whole millimeters and whole degrees
    ///
    /// Each component is truncated toward zero after unit conversion, so
    /// `0.99 in` becomes `25 mm` and `-12.7°` becomes `-12°`.
    pub fn to_pose_mm(&self) -> Pose2D {
        Pose2D {
            x: truncf(self.x * MM_PER_INCH),
            y: truncf(self.y * MM_PER_INCH),
            heading: truncf(self.h),
        }
    }

    /// Convert to millimeter units without truncation (telemetry only)
    pub fn to_mm(&self) -> Pose2D {
        Pose2D {
            x: self.x * MM_PER_INCH,
            y: self.y * MM_PER_INCH,
            heading: self.h,
        }
    }
}

/// Holonomic motion demand
///
/// Each component is nominally in [-100, +100] after controller clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HolonomicCommand {
    /// Forward demand (+X)
    pub forward: f32,
    /// Lateral demand (+Y)
    pub lateral: f32,
    /// Rotational demand (+heading)
    pub rotate: f32,
}

impl HolonomicCommand {
    /// All-zero command
    pub const ZERO: HolonomicCommand = HolonomicCommand {
        forward: 0.0,
        lateral: 0.0,
        rotate: 0.0,
    };

    /// Create a new command
    pub const fn new(forward: f32, lateral: f32, rotate: f32) -> Self {
        Self {
            forward,
            lateral,
            rotate,
        }
    }

    /// True if every component is exactly zero
    pub fn is_zero(&self) -> bool {
        self.forward == 0.0 && self.lateral == 0.0 && self.rotate == 0.0
    }
}

/// Per-wheel speed commands in mixing order
///
/// Values are clamped to the wheel limit by the mixer (±120 by default).
/// Note that the transport sends the rear pair in the opposite order; see
/// `WheelSpeeds::wire_order`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelSpeeds {
    /// Front-left wheel
    pub front_left: i8,
    /// Front-right wheel
    pub front_right: i8,
    /// Rear-left wheel
    pub rear_left: i8,
    /// Rear-right wheel
    pub rear_right: i8,
}

impl WheelSpeeds {
    /// All wheels stopped
    pub const STOPPED: WheelSpeeds = WheelSpeeds {
        front_left: 0,
        front_right: 0,
        rear_left: 0,
        rear_right: 0,
    };

    /// Create from mixing-order values
    pub const fn new(front_left: i8, front_right: i8, rear_left: i8, rear_right: i8) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Values in mixing order `[FL, FR, RL, RR]`
    pub const fn as_array(&self) -> [i8; 4] {
        [
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }

    /// Values in motor-controller register order `[FL, FR, RR, RL]`
    pub const fn wire_order(&self) -> [i8; 4] {
        [
            self.front_left,
            self.front_right,
            self.rear_right,
            self.rear_left,
        ]
    }

    /// Rebuild from register-order values `[FL, FR, RR, RL]`
    pub const fn from_wire_order(wire: [i8; 4]) -> Self {
        Self {
            front_left: wire[0],
            front_right: wire[1],
            rear_right: wire[2],
            rear_left: wire[3],
        }
    }

    /// True if every wheel is stopped
    pub fn is_stopped(&self) -> bool {
        *self == Self::STOPPED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_position_only() {
        let pose = Pose2D::new(0.0, 0.0, 0.0);
        let goal = Pose2D::goal(30.0, 40.0);
        assert!((pose.distance_to(&goal) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_distance_mixes_heading_degrees() {
        // 30 mm off in X and 40 degrees off in heading count as 50
        let pose = Pose2D::new(0.0, 0.0, 40.0);
        let goal = Pose2D::goal(30.0, 0.0);
        assert!((pose.distance_to(&goal) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_sensor_pose_truncates_toward_zero() {
        let raw = SensorPose::new(1.0, -1.0, -12.7);
        let pose = raw.to_pose_mm();
        assert_eq!(pose.x, 25.0);
        assert_eq!(pose.y, -25.0);
        assert_eq!(pose.heading, -12.0);
    }

    #[test]
    fn test_sensor_pose_to_mm_keeps_fraction() {
        let raw = SensorPose::new(1.0, 0.5, 3.5);
        let pose = raw.to_mm();
        assert!((pose.x - 25.4).abs() < 0.001);
        assert!((pose.y - 12.7).abs() < 0.001);
        assert!((pose.heading - 3.5).abs() < 0.001);
    }

    #[test]
    fn test_wire_order_swaps_rear_pair() {
        let wheels = WheelSpeeds::new(1, 2, 3, 4);
        assert_eq!(wheels.as_array(), [1, 2, 3, 4]);
        assert_eq!(wheels.wire_order(), [1, 2, 4, 3]);
        assert_eq!(WheelSpeeds::from_wire_order(wheels.wire_order()), wheels);
    }

    #[test]
    fn test_command_zero() {
        assert!(HolonomicCommand::ZERO.is_zero());
        assert!(!HolonomicCommand::new(0.0, 0.0, 1.0).is_zero());
        assert!(WheelSpeeds::STOPPED.is_stopped());
    }
}
