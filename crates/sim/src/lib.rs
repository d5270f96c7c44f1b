//! Host-side simulator for the omni rover navigation loop.
//!
//! Runs the real `NavigationLoop` against a kinematic omni-wheel plant.
//! Sensor, motor bus and timer are adapters over one shared plant, so a
//! full closed loop runs deterministically on the host.

pub mod adapter;
pub mod error;
pub mod plant;
pub mod scenario;
pub mod telemetry;

pub use adapter::{SharedPlant, SimI2c, SimPoseSensor, SimTimer};
pub use error::SimulatorError;
pub use plant::{BodyMotion, OmniPlant, PlantConfig};
pub use scenario::{build, parse_mode, run, Scenario, ScenarioReport, SimLoop};
pub use telemetry::{PrintTelemetry, RecordingTelemetry};
