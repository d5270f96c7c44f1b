#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! omni_rover - Waypoint navigation for a four-wheel omni-directional rover
//!
//! This library provides the platform abstraction, device drivers and the
//! navigation control loop. The control algorithms themselves (scheduler,
//! controller, mixer, parameters) live in the `omni_rover_core` crate.

// Platform abstraction layer (I2C, GPIO, timer)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core infrastructure (logging)
pub mod core;

// Shared libraries (buttons, wheel drivers)
pub mod libraries;

// Telemetry output
pub mod communication;

// Vehicle logic (navigation loop)
pub mod rover;
