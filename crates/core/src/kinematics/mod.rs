//! Vehicle kinematics
//!
//! Wheel mixing for the four-wheel omni-directional chassis.

mod omni_mixer;

pub use omni_mixer::{MixerConfig, OmniMixer, DEFAULT_COMMAND_LIMIT, DEFAULT_MAX_WHEEL_SPEED};
