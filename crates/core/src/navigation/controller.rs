//! Proportional position/heading controller
//!
//! Converts the error between the current pose and the goal pose into a
//! holonomic command. The rover never turns to face its direction of travel:
//! position error maps straight onto forward/lateral demand and heading error
//! onto rotate demand.
//!
//! # Control Law
//!
//! - `forward = -(pose.x - goal.x) * position_gain`
//! - `lateral = -(pose.y - goal.y) * position_gain`
//! - `rotate  = (goal.heading - pose.heading) * heading_gain`
//!
//! Each component is clamped independently to `[-max_command, +max_command]`.
//! There is no integral or derivative term.

use crate::mode::Mode;
use crate::navigation::types::{HolonomicCommand, Pose2D};

/// Default proportional gain on position error
pub const DEFAULT_POSITION_GAIN: f32 = 0.80;

/// Default proportional gain on heading error
pub const DEFAULT_HEADING_GAIN: f32 = 0.80;

/// Default command magnitude limit
pub const DEFAULT_MAX_COMMAND: f32 = 100.0;

/// Configuration for the position controller
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Gain applied to X/Y error (per mm)
    pub position_gain: f32,
    /// Gain applied to heading error (per degree)
    pub heading_gain: f32,
    /// Symmetric clamp applied to each command component
    pub max_command: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            position_gain: DEFAULT_POSITION_GAIN,
            heading_gain: DEFAULT_HEADING_GAIN,
            max_command: DEFAULT_MAX_COMMAND,
        }
    }
}

/// Pure proportional controller
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionController {
    config: ControllerConfig,
}

impl PositionController {
    /// Create a controller with default gains
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom configuration
    pub fn with_config(config: ControllerConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Compute the clamped command that pulls `pose` toward `goal`
    pub fn compute(&self, pose: &Pose2D, goal: &Pose2D) -> HolonomicCommand {
        let limit = self.config.max_command;

        let forward = -(pose.x - goal.x) * self.config.position_gain;
        let lateral = -(pose.y - goal.y) * self.config.position_gain;
        let rotate = (goal.heading - pose.heading) * self.config.heading_gain;

        HolonomicCommand {
            forward: sanitize_output(forward, limit),
            lateral: sanitize_output(lateral, limit),
            rotate: sanitize_output(rotate, limit),
        }
    }

    /// Compute the command for the active mode
    ///
    /// `Mode::Stopped` is a hard override: the zero command is returned
    /// without looking at pose or goal.
    pub fn update(&self, mode: Mode, pose: &Pose2D, goal: &Pose2D) -> HolonomicCommand {
        if mode == Mode::Stopped {
            return HolonomicCommand::ZERO;
        }
        self.compute(pose, goal)
    }
}

/// Clamp to `[-limit, limit]`, mapping NaN and infinity to zero
///
/// A negative or NaN limit is treated as zero.
fn sanitize_output(value: f32, limit: f32) -> f32 {
    let limit = limit.max(0.0);
    if value.is_nan() || value.is_infinite() {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(cmd: &HolonomicCommand) -> bool {
        let ok = |v: f32| (-100.0..=100.0).contains(&v);
        ok(cmd.forward) && ok(cmd.lateral) && ok(cmd.rotate)
    }

    #[test]
    fn test_zero_error_zero_command() {
        let controller = PositionController::new();
        let pose = Pose2D::new(120.0, -40.0, 0.0);
        let cmd = controller.compute(&pose, &Pose2D::goal(120.0, -40.0));
        assert!(cmd.is_zero());
    }

    #[test]
    fn test_proportional_inside_limit() {
        let controller = PositionController::new();
        let pose = Pose2D::new(0.0, 0.0, 10.0);
        let cmd = controller.compute(&pose, &Pose2D::goal(50.0, -25.0));
        assert!((cmd.forward - 40.0).abs() < 0.001);
        assert!((cmd.lateral - (-20.0)).abs() < 0.001);
        // Goal heading is 0, pose heading 10 → rotate back
        assert!((cmd.rotate - (-8.0)).abs() < 0.001);
    }

    #[test]
    fn test_far_goal_clamped() {
        // 400 mm ahead: 320 raw, clamped to 100
        let controller = PositionController::new();
        let cmd = controller.compute(&Pose2D::ORIGIN, &Pose2D::goal(400.0, 0.0));
        assert_eq!(cmd.forward, 100.0);
        assert_eq!(cmd.lateral, 0.0);
        assert_eq!(cmd.rotate, 0.0);
    }

    #[test]
    fn test_negative_clamp() {
        let controller = PositionController::new();
        let pose = Pose2D::new(400.0, 300.0, 500.0);
        let cmd = controller.compute(&pose, &Pose2D::ORIGIN);
        assert_eq!(cmd.forward, -100.0);
        assert_eq!(cmd.lateral, -100.0);
        assert_eq!(cmd.rotate, -100.0);
    }

    #[test]
    fn test_outputs_always_in_range() {
        let controller = PositionController::new();
        let values = [-1.0e6, -400.0, -50.0, -0.5, 0.0, 0.5, 50.0, 400.0, 1.0e6];
        for &x in &values {
            for &y in &values {
                for &h in &values {
                    let pose = Pose2D::new(x, y, h);
                    let cmd = controller.compute(&pose, &Pose2D::goal(200.0, -200.0));
                    assert!(in_range(&cmd), "out of range for ({}, {}, {})", x, y, h);
                }
            }
        }
    }

    #[test]
    fn test_nan_pose_gives_zero() {
        let controller = PositionController::new();
        let pose = Pose2D::new(f32::NAN, 0.0, f32::INFINITY);
        let cmd = controller.compute(&pose, &Pose2D::ORIGIN);
        assert_eq!(cmd.forward, 0.0);
        assert_eq!(cmd.rotate, 0.0);
    }

    #[test]
    fn test_stopped_overrides_error() {
        let controller = PositionController::new();
        let pose = Pose2D::new(-300.0, 250.0, 45.0);
        let cmd = controller.update(Mode::Stopped, &pose, &Pose2D::goal(400.0, 0.0));
        assert!(cmd.is_zero());

        let cmd = controller.update(Mode::Square, &pose, &Pose2D::goal(400.0, 0.0));
        assert!(!cmd.is_zero());
    }

    #[test]
    fn test_custom_gains() {
        let controller = PositionController::with_config(ControllerConfig {
            position_gain: 0.5,
            heading_gain: 2.0,
            max_command: 30.0,
        });
        let cmd = controller.compute(&Pose2D::new(0.0, 0.0, -10.0), &Pose2D::goal(40.0, 0.0));
        assert!((cmd.forward - 20.0).abs() < 0.001);
        assert_eq!(cmd.rotate, 20.0);

        let cmd = controller.compute(&Pose2D::ORIGIN, &Pose2D::goal(100.0, 0.0));
        assert_eq!(cmd.forward, 30.0);
    }

    #[test]
    fn test_negative_limit_gives_zero() {
        let controller = PositionController::with_config(ControllerConfig {
            max_command: -5.0,
            ..ControllerConfig::default()
        });
        let cmd = controller.compute(&Pose2D::ORIGIN, &Pose2D::goal(400.0, -200.0));
        assert!(cmd.is_zero());
    }
}
