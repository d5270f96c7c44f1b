//! Waypoint scheduler
//!
//! Decides each tick which goal the controller should pull toward.
//!
//! # Behavior per mode
//!
//! - `Stopped`: goal frozen, no advancement
//! - `ReturnHome`: goal forced to the origin every tick
//! - `Square` / `Triangle` / `Line`: when the pose is within the arrival
//!   radius of the goal, step to the next waypoint (wrapping)
//!
//! At most one advancement happens per tick, so a single slow tick that lands
//! near two consecutive waypoints never skips one.

use super::state::{Mode, NavState};
use crate::navigation::Pose2D;

/// Default arrival radius (mm-equivalent, see `Pose2D::distance_to`)
pub const DEFAULT_ARRIVAL_RADIUS: f32 = 50.0;

/// Scheduler configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Distance at or below which the goal counts as reached
    pub arrival_radius: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            arrival_radius: DEFAULT_ARRIVAL_RADIUS,
        }
    }
}

/// Result of one scheduling step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduleOutcome {
    /// Distance from the pose to the goal held at the start of the step
    pub distance: f32,
    /// True if the goal advanced during this step
    pub advanced: bool,
}

/// Waypoint scheduler (stateless apart from configuration)
#[derive(Clone, Copy, Debug, Default)]
pub struct WaypointScheduler {
    config: SchedulerConfig,
}

impl WaypointScheduler {
    /// Create a scheduler with the default arrival radius
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler with custom configuration
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Run one scheduling step for `tick`
    ///
    /// Calling this more than once with the same `tick` advances the goal at
    /// most once.
    pub fn advance(&self, pose: &Pose2D, state: &mut NavState, tick: u64) -> ScheduleOutcome {
        let distance = pose.distance_to(&state.goal);
        let mut advanced = false;

        match state.mode {
            Mode::Stopped => {}
            Mode::ReturnHome => {
                state.goal = Pose2D::ORIGIN;
            }
            Mode::Square | Mode::Triangle | Mode::Line => {
                let already_advanced = state.last_advance_tick == Some(tick);
                if distance <= self.config.arrival_radius && !already_advanced {
                    if let Some(pattern) = state.mode.pattern() {
                        state.goal_index = pattern.next_index(state.goal_index);
                        state.goal = pattern.waypoint(state.goal_index);
                        state.last_advance_tick = Some(tick);
                        advanced = true;
                    }
                }
            }
        }

        ScheduleOutcome { distance, advanced }
    }
}
