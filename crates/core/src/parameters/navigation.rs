//! Navigation Parameter Definitions
//!
//! Parameters consumed by the waypoint scheduler and position controller.
//!
//! # Parameters
//!
//! - `WP_RADIUS` - Arrival radius (mm-equivalent, position and heading combined)
//! - `NAV_POS_P` - Proportional gain on X/Y error
//! - `NAV_HDG_P` - Proportional gain on heading error
//! - `NAV_CMD_MAX` - Per-component command clamp

use super::error::ParameterError;
use super::storage::{load_float, ParamFlags, ParamValue, ParameterStore};
use crate::mode::SchedulerConfig;
use crate::navigation::ControllerConfig;

// --- Defaults ---

const DEFAULT_WP_RADIUS: f32 = 50.0;
const DEFAULT_POSITION_GAIN: f32 = 0.80;
const DEFAULT_HEADING_GAIN: f32 = 0.80;
const DEFAULT_MAX_COMMAND: f32 = 100.0;

// --- Ranges ---

const MIN_WP_RADIUS: f32 = 1.0;
const MAX_WP_RADIUS: f32 = 500.0;

const MIN_GAIN: f32 = 0.0;
const MAX_GAIN: f32 = 10.0;

const MIN_COMMAND: f32 = 1.0;
const MAX_COMMAND: f32 = 100.0;

/// Navigation parameters loaded from parameter store
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationParams {
    /// Arrival radius
    pub wp_radius: f32,
    /// Gain applied to position error
    pub position_gain: f32,
    /// Gain applied to heading error
    pub heading_gain: f32,
    /// Command clamp
    pub max_command: f32,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            wp_radius: DEFAULT_WP_RADIUS,
            position_gain: DEFAULT_POSITION_GAIN,
            heading_gain: DEFAULT_HEADING_GAIN,
            max_command: DEFAULT_MAX_COMMAND,
        }
    }
}

impl NavigationParams {
    /// Register navigation parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "WP_RADIUS",
            ParamValue::Float(DEFAULT_WP_RADIUS),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_POS_P",
            ParamValue::Float(DEFAULT_POSITION_GAIN),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_HDG_P",
            ParamValue::Float(DEFAULT_HEADING_GAIN),
            ParamFlags::empty(),
        )?;
        store.register(
            "NAV_CMD_MAX",
            ParamValue::Float(DEFAULT_MAX_COMMAND),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load navigation parameters from parameter store
    ///
    /// Missing entries fall back to defaults; out-of-range values are clamped.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            wp_radius: load_float(
                store,
                "WP_RADIUS",
                DEFAULT_WP_RADIUS,
                MIN_WP_RADIUS,
                MAX_WP_RADIUS,
            ),
            position_gain: load_float(
                store,
                "NAV_POS_P",
                DEFAULT_POSITION_GAIN,
                MIN_GAIN,
                MAX_GAIN,
            ),
            heading_gain: load_float(
                store,
                "NAV_HDG_P",
                DEFAULT_HEADING_GAIN,
                MIN_GAIN,
                MAX_GAIN,
            ),
            max_command: load_float(
                store,
                "NAV_CMD_MAX",
                DEFAULT_MAX_COMMAND,
                MIN_COMMAND,
                MAX_COMMAND,
            ),
        }
    }

    /// Controller configuration
    pub fn to_controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            position_gain: self.position_gain,
            heading_gain: self.heading_gain,
            max_command: self.max_command,
        }
    }

    /// Scheduler configuration
    pub fn to_scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            arrival_radius: self.wp_radius,
        }
    }

    /// Validate navigation parameters
    pub fn is_valid(&self) -> bool {
        (MIN_WP_RADIUS..=MAX_WP_RADIUS).contains(&self.wp_radius)
            && (MIN_GAIN..=MAX_GAIN).contains(&self.position_gain)
            && (MIN_GAIN..=MAX_GAIN).contains(&self.heading_gain)
            && (MIN_COMMAND..=MAX_COMMAND).contains(&self.max_command)
    }
}
