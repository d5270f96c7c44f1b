//! Mode and navigation state types
//!
//! `NavState` is the only state that persists across control ticks. It is
//! owned by the navigation loop and mutated through explicit methods.

use super::pattern::{Pattern, LINE, SQUARE, TRIANGLE};
use crate::navigation::Pose2D;

/// Operating mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Motors held at zero; goal frozen
    #[default]
    Stopped = 0,
    /// Cycle the square pattern
    Square = 1,
    /// Cycle the triangle pattern
    Triangle = 2,
    /// Shuttle along the line pattern
    Line = 3,
    /// Hold the origin as goal
    ReturnHome = 4,
}

/// Mode-advance order; the entry after the last wraps to the first
const MODE_CYCLE: [Mode; 5] = [
    Mode::Stopped,
    Mode::Square,
    Mode::Triangle,
    Mode::Line,
    Mode::ReturnHome,
];

impl Mode {
    /// Mode selected by the next "mode advance" event
    pub fn next(self) -> Mode {
        MODE_CYCLE[(self as usize + 1) % MODE_CYCLE.len()]
    }

    /// Mode from its numeric id (0..=4)
    pub fn from_id(id: u8) -> Option<Mode> {
        MODE_CYCLE.get(id as usize).copied()
    }

    /// Numeric id used in telemetry
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Waypoint pattern driven by this mode, if any
    pub fn pattern(self) -> Option<&'static Pattern> {
        match self {
            Mode::Square => Some(&SQUARE),
            Mode::Triangle => Some(&TRIANGLE),
            Mode::Line => Some(&LINE),
            Mode::Stopped | Mode::ReturnHome => None,
        }
    }

    /// Mode name for logging and telemetry
    pub fn name(self) -> &'static str {
        match self {
            Mode::Stopped => "STOPPED",
            Mode::Square => "SQUARE",
            Mode::Triangle => "TRIANGLE",
            Mode::Line => "LINE",
            Mode::ReturnHome => "RETURN_HOME",
        }
    }
}

/// Persistent navigation state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavState {
    /// Active mode
    pub mode: Mode,
    /// Index of the current goal in the active pattern
    pub goal_index: usize,
    /// Current goal (heading always 0)
    pub goal: Pose2D,
    /// Tick on which the goal last advanced
    pub last_advance_tick: Option<u64>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Initial state: stopped, first waypoint, goal at origin
    pub const fn new() -> Self {
        Self {
            mode: Mode::Stopped,
            goal_index: 0,
            goal: Pose2D::ORIGIN,
            last_advance_tick: None,
        }
    }

    /// Handle a "mode advance" event
    ///
    /// Moves to the next mode in the cycle. The goal index is carried over
    /// rather than reset, so switching between patterns mid-sequence resumes
    /// at the same position number in the new pattern. The index is wrapped
    /// into the new pattern and the goal re-targeted to it.
    ///
    /// Returns the previous mode.
    pub fn advance_mode(&mut self) -> Mode {
        let previous = self.mode;
        self.mode = previous.next();

        if let Some(pattern) = self.mode.pattern() {
            self.goal_index = pattern.wrap(self.goal_index);
            self.goal = pattern.waypoint(self.goal_index);
        }

        previous
    }

    /// Handle a "calibration reset" event
    ///
    /// Restarts the sequence at the origin. The mode is left unchanged.
    pub fn reset_goal(&mut self) {
        self.goal_index = 0;
        self.goal = Pose2D::ORIGIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle() {
        let mut mode = Mode::Stopped;
        let expected = [
            Mode::Square,
            Mode::Triangle,
            Mode::Line,
            Mode::ReturnHome,
            Mode::Stopped,
        ];
        for want in expected {
            mode = mode.next();
            assert_eq!(mode, want);
        }
    }

    #[test]
    fn test_mode_ids_round_trip_table() {
        for id in 0..5u8 {
            assert_eq!(Mode::from_id(id).map(Mode::id), Some(id));
        }
        assert_eq!(Mode::from_id(5), None);
    }

    #[test]
    fn test_mode_patterns() {
        assert!(Mode::Stopped.pattern().is_none());
        assert!(Mode::ReturnHome.pattern().is_none());
        assert_eq!(Mode::Square.pattern().map(|p| p.name()), Some("square"));
        assert_eq!(Mode::Line.pattern().map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_nav_state_default() {
        let state = NavState::default();
        assert_eq!(state.mode, Mode::Stopped);
        assert_eq!(state.goal_index, 0);
        assert_eq!(state.goal, Pose2D::ORIGIN);
        assert!(state.last_advance_tick.is_none());
    }

    #[test]
    fn test_advance_mode_keeps_goal_index() {
        // Square at index 3 -> Triangle resumes at index 3
        let mut state = NavState {
            mode: Mode::Square,
            goal_index: 3,
            goal: SQUARE.waypoint(3),
            last_advance_tick: None,
        };
        let previous = state.advance_mode();
        assert_eq!(previous, Mode::Square);
        assert_eq!(state.mode, Mode::Triangle);
        assert_eq!(state.goal_index, 3);
        assert_eq!(state.goal, TRIANGLE.waypoint(3));
    }

    #[test]
    fn test_advance_mode_wraps_index_into_line() {
        let mut state = NavState {
            mode: Mode::Triangle,
            goal_index: 3,
            goal: TRIANGLE.waypoint(3),
            last_advance_tick: None,
        };
        state.advance_mode();
        assert_eq!(state.mode, Mode::Line);
        assert_eq!(state.goal_index, 1);
        assert_eq!(state.goal, Pose2D::goal(400.0, 0.0));
    }

    #[test]
    fn test_advance_mode_into_stopped_freezes_goal() {
        let mut state = NavState {
            mode: Mode::ReturnHome,
            goal_index: 2,
            goal: Pose2D::ORIGIN,
            last_advance_tick: None,
        };
        state.advance_mode();
        assert_eq!(state.mode, Mode::Stopped);
        assert_eq!(state.goal_index, 2);
        assert_eq!(state.goal, Pose2D::ORIGIN);
    }

    #[test]
    fn test_reset_goal_keeps_mode() {
        let mut state = NavState {
            mode: Mode::Line,
            goal_index: 1,
            goal: LINE.waypoint(1),
            last_advance_tick: Some(7),
        };
        state.reset_goal();
        assert_eq!(state.mode, Mode::Line);
        assert_eq!(state.goal_index, 0);
        assert_eq!(state.goal, Pose2D::ORIGIN);
    }
}
