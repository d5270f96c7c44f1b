//! Predefined waypoint patterns
//!
//! A pattern is a finite list of goal positions visited cyclically. Goals are
//! position-only; the heading goal is always 0.

use crate::navigation::Pose2D;

/// Cyclic waypoint pattern
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pattern {
    name: &'static str,
    waypoints: &'static [Pose2D],
}

/// 400 x 300 mm rectangle: origin, north, north-east, east
pub const SQUARE: Pattern = Pattern {
    name: "square",
    waypoints: &[
        Pose2D::goal(0.0, 0.0),
        Pose2D::goal(0.0, 300.0),
        Pose2D::goal(400.0, 300.0),
        Pose2D::goal(400.0, 0.0),
    ],
};

/// Two triangles sharing the origin: north-east lobe, then north-west lobe
pub const TRIANGLE: Pattern = Pattern {
    name: "triangle",
    waypoints: &[
        Pose2D::goal(0.0, 0.0),
        Pose2D::goal(200.0, 200.0),
        Pose2D::goal(0.0, 0.0),
        Pose2D::goal(-200.0, 200.0),
    ],
};

/// Shuttle between the origin and 400 mm east
pub const LINE: Pattern = Pattern {
    name: "line",
    waypoints: &[Pose2D::goal(0.0, 0.0), Pose2D::goal(400.0, 0.0)],
};

impl Pattern {
    /// Pattern name for logging and telemetry
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of waypoints (never zero for the predefined patterns)
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// True if the pattern has no waypoints
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Wrap an arbitrary index into the pattern
    pub fn wrap(&self, index: usize) -> usize {
        if self.waypoints.is_empty() {
            0
        } else {
            index % self.waypoints.len()
        }
    }

    /// Index following `index`, wrapping to 0 after the last waypoint
    pub fn next_index(&self, index: usize) -> usize {
        self.wrap(index.wrapping_add(1))
    }

    /// Waypoint at `index` (wrapped); the origin for an empty pattern
    pub fn waypoint(&self, index: usize) -> Pose2D {
        self.waypoints
            .get(self.wrap(index))
            .copied()
            .unwrap_or(Pose2D::ORIGIN)
    }

    /// All waypoints in visiting order
    pub fn waypoints(&self) -> &'static [Pose2D] {
        self.waypoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lengths() {
        assert_eq!(SQUARE.len(), 4);
        assert_eq!(TRIANGLE.len(), 4);
        assert_eq!(LINE.len(), 2);
    }

    #[test]
    fn test_goal_heading_is_zero() {
        for pattern in [SQUARE, TRIANGLE, LINE] {
            for wp in pattern.waypoints() {
                assert_eq!(wp.heading, 0.0);
            }
        }
    }

    #[test]
    fn test_square_vertices() {
        assert_eq!(SQUARE.waypoint(1), Pose2D::goal(0.0, 300.0));
        assert_eq!(SQUARE.waypoint(2), Pose2D::goal(400.0, 300.0));
        assert_eq!(SQUARE.waypoint(3), Pose2D::goal(400.0, 0.0));
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(SQUARE.next_index(3), 0);
        assert_eq!(LINE.next_index(1), 0);
        assert_eq!(LINE.next_index(0), 1);
    }

    #[test]
    fn test_waypoint_wraps_out_of_range_index() {
        assert_eq!(LINE.waypoint(3), Pose2D::goal(400.0, 0.0));
        assert_eq!(TRIANGLE.waypoint(7), Pose2D::goal(-200.0, 200.0));
    }
}
