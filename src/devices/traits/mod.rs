//! Device traits
//!
//! Hardware-independent trait definitions for device drivers, so the
//! navigation loop can be tested with mock implementations.

pub mod pose;

pub use pose::{PoseError, PoseSensor};
