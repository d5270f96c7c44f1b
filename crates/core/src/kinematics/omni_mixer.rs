//! Four-wheel omni (X-configuration) motor mixing
//!
//! Converts a holonomic command (forward, lateral, rotate) into four
//! independent wheel speeds. The chassis can translate in any direction
//! without turning first.
//!
//! # Examples
//!
//! ```
//! use omni_rover_core::kinematics::OmniMixer;
//! use omni_rover_core::navigation::HolonomicCommand;
//!
//! let mixer = OmniMixer::new();
//!
//! // Straight forward
//! let wheels = mixer.mix(&HolonomicCommand::new(100.0, 0.0, 0.0));
//! assert_eq!(wheels.front_left, 100);
//! assert_eq!(wheels.front_right, -100);
//! assert_eq!(wheels.rear_left, 100);
//! assert_eq!(wheels.rear_right, -100);
//! ```

use crate::navigation::{HolonomicCommand, WheelSpeeds};

/// Default per-wheel speed limit
pub const DEFAULT_MAX_WHEEL_SPEED: i32 = 120;

/// Default command magnitude at which rotation takes all linear authority
pub const DEFAULT_COMMAND_LIMIT: i32 = 100;

/// Mixer configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixerConfig {
    /// Symmetric clamp applied to each wheel after mixing
    pub max_wheel_speed: i32,
    /// Command full scale; also the rotation scaling denominator
    pub command_limit: i32,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            max_wheel_speed: DEFAULT_MAX_WHEEL_SPEED,
            command_limit: DEFAULT_COMMAND_LIMIT,
        }
    }
}

/// Omni wheel mixer (stateless)
#[derive(Clone, Copy, Debug, Default)]
pub struct OmniMixer {
    config: MixerConfig,
}

impl OmniMixer {
    /// Create a mixer with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mixer with custom limits
    pub fn with_config(config: MixerConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Mix a holonomic command into wheel speeds
    ///
    /// # Algorithm
    ///
    /// 1. Truncate each component toward zero to an integer
    /// 2. If `rotate != 0`, scale forward and lateral by
    ///    `(limit - |rotate|) / limit` using integer division
    /// 3. Apply the fixed X-configuration matrix:
    ///    - `FL = lateral + forward - rotate`
    ///    - `FR = lateral - forward + rotate`
    ///    - `RL = lateral + forward + rotate`
    ///    - `RR = lateral - forward - rotate`
    /// 4. Clamp each wheel independently to `[-max_wheel_speed, max_wheel_speed]`
    ///
    /// Saturating one wheel does not rescale the others, so direction is not
    /// preserved when a wheel hits the limit.
    #[inline]
    pub fn mix(&self, cmd: &HolonomicCommand) -> WheelSpeeds {
        // A non-positive limit allows no command at all
        let limit = self.config.command_limit.max(0);

        let mut forward = to_component(cmd.forward, limit);
        let mut lateral = to_component(cmd.lateral, limit);
        let rotate = to_component(cmd.rotate, limit);

        // Rotation steals linear authority
        if rotate != 0 {
            let remaining = limit - rotate.abs();
            forward = forward * remaining / limit;
            lateral = lateral * remaining / limit;
        }

        WheelSpeeds {
            front_left: self.clamp_wheel(lateral + forward - rotate),
            front_right: self.clamp_wheel(lateral - forward + rotate),
            rear_left: self.clamp_wheel(lateral + forward + rotate),
            rear_right: self.clamp_wheel(lateral - forward - rotate),
        }
    }

    #[inline]
    fn clamp_wheel(&self, speed: i32) -> i8 {
        let max = self.config.max_wheel_speed.clamp(0, i8::MAX as i32);
        speed.clamp(-max, max) as i8
    }
}

/// Truncate toward zero and bound to the command range (NaN becomes 0)
#[inline]
fn to_component(value: f32, limit: i32) -> i32 {
    (value as i32).clamp(-limit, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mix(forward: f32, lateral: f32, rotate: f32) -> WheelSpeeds {
        OmniMixer::new().mix(&HolonomicCommand::new(forward, lateral, rotate))
    }

    #[test]
    fn test_zero_command() {
        assert!(mix(0.0, 0.0, 0.0).is_stopped());
    }

    #[test]
    fn test_pure_forward() {
        let w = mix(100.0, 0.0, 0.0);
        assert_eq!(w.front_left, 100);
        assert_eq!(w.rear_left, 100);
        assert_eq!(w.front_right, -100);
        assert_eq!(w.rear_right, -100);
    }

    #[test]
    fn test_pure_lateral() {
        let w = mix(0.0, 60.0, 0.0);
        assert_eq!(w.as_array(), [60, 60, 60, 60]);
    }

    #[test]
    fn test_pure_rotate() {
        let w = mix(0.0, 0.0, 40.0);
        assert_eq!(w.front_left, -40);
        assert_eq!(w.front_right, 40);
        assert_eq!(w.rear_left, 40);
        assert_eq!(w.rear_right, -40);
    }

    #[test]
    fn test_rotation_scales_linear() {
        // forward 100 with rotate 50 keeps half of the linear term
        let w = mix(100.0, 0.0, 50.0);
        assert_eq!(w.front_left, 0);
        assert_eq!(w.front_right, 0);
        assert_eq!(w.rear_left, 100);
        assert_eq!(w.rear_right, -100);
    }

    #[test]
    fn test_rotation_scaling_truncates() {
        // 33 * (100 - 10) / 100 = 29.7 → 29
        let w = mix(33.0, 0.0, 10.0);
        assert_eq!(w.front_left, 29 - 10);
        assert_eq!(w.rear_left, 29 + 10);

        // -33 * 90 / 100 = -29.7 → -29 (toward zero)
        let w = mix(-33.0, 0.0, 10.0);
        assert_eq!(w.front_left, -29 - 10);
    }

    #[test]
    fn test_fractional_command_truncated() {
        let w = mix(40.9, -0.9, 0.0);
        assert_eq!(w.front_left, 40);
        assert_eq!(w.front_right, -40);
    }

    #[test]
    fn test_wheel_clamp_without_rescale() {
        // lateral 100 + forward 100 = 200 on FL/RL, clamped to 120; FR/RR stay 0
        let w = mix(100.0, 100.0, 0.0);
        assert_eq!(w.front_left, 120);
        assert_eq!(w.rear_left, 120);
        assert_eq!(w.front_right, 0);
        assert_eq!(w.rear_right, 0);
    }

    #[test]
    fn test_outputs_always_in_range() {
        let values = [-1.0e9, -150.0, -100.0, -37.5, 0.0, 12.0, 99.9, 100.0, 250.0, f32::NAN];
        for &f in &values {
            for &l in &values {
                for &r in &values {
                    let w = mix(f, l, r);
                    for speed in w.as_array() {
                        assert!((-120..=120).contains(&(speed as i32)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_wheel_limit() {
        let mixer = OmniMixer::with_config(MixerConfig {
            max_wheel_speed: 50,
            command_limit: 100,
        });
        let w = mixer.mix(&HolonomicCommand::new(100.0, 0.0, 0.0));
        assert_eq!(w.as_array(), [50, -50, 50, -50]);
    }

    #[test]
    fn test_negative_command_limit_stops() {
        let mixer = OmniMixer::with_config(MixerConfig {
            command_limit: -1,
            ..MixerConfig::default()
        });
        let wheels = mixer.mix(&HolonomicCommand::new(80.0, -30.0, 40.0));
        assert!(wheels.is_stopped());
    }
}
