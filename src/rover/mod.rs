//! Rover vehicle implementation
//!
//! ## Modules
//!
//! - `nav_loop`: The waypoint navigation control loop (sensor → scheduler →
//!   controller → mixer → wheels → telemetry)

pub mod nav_loop;

pub use nav_loop::{LoopConfig, NavigationLoop};
