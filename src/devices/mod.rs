//! Device drivers
//!
//! Device drivers built on the platform abstraction traits.
//!
//! ## Modules
//!
//! - `pose`: Pose sensor drivers (optical tracking odometry sensor, mock)
//! - `traits`: Device trait definitions (`PoseSensor`)

pub mod pose;
pub mod traits;
