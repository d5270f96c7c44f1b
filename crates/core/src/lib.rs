//! omni_rover_core - Pure no_std navigation logic for omni_rover
//!
//! This crate contains the platform-agnostic control algorithms and types
//! that can be tested on host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies
//! - **Explicit state**: All persistent state lives in `mode::NavState`
//!
//! # Modules
//!
//! - [`navigation`]: Pose and command types, proportional position controller
//! - [`kinematics`]: Four-wheel omni motor mixing
//! - [`mode`]: Operating modes, waypoint patterns and the waypoint scheduler
//! - [`parameters`]: Parameter store and typed parameter groups

#![no_std]

pub mod kinematics;
pub mod mode;
pub mod navigation;
pub mod parameters;
