//! Communication
//!
//! Operator-facing output of the rover.
//!
//! - **Telemetry**: one frame per control tick, rendered as a single text
//!   line for the serial console

pub mod telemetry;

pub use telemetry::{LogTelemetry, NullTelemetry, TelemetryFrame, TelemetrySink};
