//! Parameter management
//!
//! This module provides the parameter store and the typed parameter groups
//! that configure the navigation loop. Each group registers its defaults,
//! loads itself from the store with range clamping, and converts into the
//! runtime configuration of the component it drives.

pub mod error;
pub mod navigation;
pub mod rover;
pub mod storage;

pub use error::ParameterError;
pub use navigation::NavigationParams;
pub use rover::RoverParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
