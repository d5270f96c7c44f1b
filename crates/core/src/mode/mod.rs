//! Operating modes and waypoint scheduling
//!
//! This module provides the pure state machine behind the navigation loop.
//!
//! # Contents
//!
//! - `Mode`: operating mode enum with its cyclic transition table
//! - `NavState`: persistent mode/goal record owned by the loop
//! - `Pattern`: predefined cyclic waypoint patterns
//! - `WaypointScheduler`: arrival detection and goal advancement

mod pattern;
mod scheduler;
mod state;

pub use pattern::{Pattern, LINE, SQUARE, TRIANGLE};
pub use scheduler::{
    ScheduleOutcome, SchedulerConfig, WaypointScheduler, DEFAULT_ARRIVAL_RADIUS,
};
pub use state::{Mode, NavState};
