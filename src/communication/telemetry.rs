//! Telemetry
//!
//! Per-tick snapshot of the navigation loop and its text rendering.
//!
//! # Line format
//!
//! ```text
//! mode=SQUARE idx=1 pos=(12.0,-3.0,1.0) goal=(0.0,300.0,0.0) dist=288.3 cmd=(-9,100,-0) whl=[...] vel=(...) acc=(...) i2c=Success
//! ```
//!
//! Wheel speeds are printed in mixer order (FL, FR, RL, RR).
//!
//! # Rate control
//!
//! `LogTelemetry` emits every `interval`-th frame; an interval of 0 disables
//! output.

use crate::log_info;
use crate::platform::WriteStatus;
use core::fmt::{self, Write};
use heapless::String;
use omni_rover_core::mode::Mode;
use omni_rover_core::navigation::{HolonomicCommand, Pose2D, WheelSpeeds};

/// Capacity of a rendered telemetry line
pub const TELEMETRY_LINE_LEN: usize = 256;

/// Snapshot of one control tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryFrame {
    /// Tick counter at the time of the snapshot
    pub tick: u64,
    /// Active mode after input handling
    pub mode: Mode,
    /// Control pose (whole mm, whole degrees)
    pub pose: Pose2D,
    /// Goal after scheduling
    pub goal: Pose2D,
    /// Goal index after scheduling
    pub goal_index: usize,
    /// Distance to the goal held before scheduling
    pub distance: f32,
    /// Controller output
    pub command: HolonomicCommand,
    /// Mixer output
    pub wheels: WheelSpeeds,
    /// Velocity (mm/s, mm/s, deg/s)
    pub velocity: Pose2D,
    /// Acceleration (mm/s², mm/s², deg/s²)
    pub acceleration: Pose2D,
    /// Status of this tick's wheel write
    pub write_status: WriteStatus,
}

impl Default for TelemetryFrame {
    fn default() -> Self {
        Self {
            tick: 0,
            mode: Mode::Stopped,
            pose: Pose2D::ORIGIN,
            goal: Pose2D::ORIGIN,
            goal_index: 0,
            distance: 0.0,
            command: HolonomicCommand::ZERO,
            wheels: WheelSpeeds::STOPPED,
            velocity: Pose2D::ORIGIN,
            acceleration: Pose2D::ORIGIN,
            write_status: WriteStatus::Success,
        }
    }
}

impl TelemetryFrame {
    /// Render the frame into `out`
    pub fn write_line<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(
            out,
            "mode={} idx={} pos=({:.1},{:.1},{:.1}) goal=({:.1},{:.1},{:.1}) dist={:.1} ",
            self.mode.name(),
            self.goal_index,
            self.pose.x,
            self.pose.y,
            self.pose.heading,
            self.goal.x,
            self.goal.y,
            self.goal.heading,
            self.distance,
        )?;
        write!(
            out,
            "cmd=({:.0},{:.0},{:.0}) whl=[{},{},{},{}] ",
            self.command.forward,
            self.command.lateral,
            self.command.rotate,
            self.wheels.front_left,
            self.wheels.front_right,
            self.wheels.rear_left,
            self.wheels.rear_right,
        )?;
        write!(
            out,
            "vel=({:.1},{:.1},{:.1}) acc=({:.1},{:.1},{:.1}) i2c={}",
            self.velocity.x,
            self.velocity.y,
            self.velocity.heading,
            self.acceleration.x,
            self.acceleration.y,
            self.acceleration.heading,
            self.write_status.as_str(),
        )
    }

    /// Render the frame as a fixed-capacity string
    ///
    /// A line that overflows the buffer is cut at the overflow point.
    pub fn to_line(&self) -> String<TELEMETRY_LINE_LEN> {
        let mut line = String::new();
        let _ = self.write_line(&mut line);
        line
    }
}

/// Consumer of telemetry frames
pub trait TelemetrySink {
    /// Publish one frame
    fn publish(&mut self, frame: &TelemetryFrame);
}

/// Discards every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn publish(&mut self, _frame: &TelemetryFrame) {}
}

/// Sends rendered lines through the log macros
#[derive(Debug, Clone, Copy)]
pub struct LogTelemetry {
    interval: u32,
    counter: u32,
    published: u32,
}

impl LogTelemetry {
    /// Log every `interval`-th frame (0 = disabled)
    pub const fn new(interval: u32) -> Self {
        Self {
            interval,
            counter: 0,
            published: 0,
        }
    }

    /// Number of frames logged so far
    pub fn published(&self) -> u32 {
        self.published
    }

    fn should_send(&mut self) -> bool {
        if self.interval == 0 {
            return false;
        }
        let send = self.counter == 0;
        self.counter = (self.counter + 1) % self.interval;
        send
    }
}

impl Default for LogTelemetry {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TelemetrySink for LogTelemetry {
    fn publish(&mut self, frame: &TelemetryFrame) {
        if !self.should_send() {
            return;
        }
        let _line = frame.to_line();
        log_info!("{}", _line.as_str());
        self.published += 1;
    }
}

/// Mutable references forward to the underlying sink
impl<S: TelemetrySink + ?Sized> TelemetrySink for &mut S {
    fn publish(&mut self, frame: &TelemetryFrame) {
        (**self).publish(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> TelemetryFrame {
        TelemetryFrame {
            tick: 7,
            mode: Mode::Square,
            pose: Pose2D::new(12.0, -3.0, 1.0),
            goal: Pose2D::goal(0.0, 300.0),
            goal_index: 1,
            distance: 288.3,
            command: HolonomicCommand::new(-9.0, 100.0, -0.0),
            wheels: WheelSpeeds::new(91, 109, 91, 109),
            write_status: WriteStatus::NackOnData,
            ..Default::default()
        }
    }

    #[test]
    fn test_line_contents() {
        let line = sample_frame().to_line();
        let text = line.as_str();

        assert!(text.starts_with("mode=SQUARE idx=1 "));
        assert!(text.contains("pos=(12.0,-3.0,1.0)"));
        assert!(text.contains("goal=(0.0,300.0,0.0)"));
        assert!(text.contains("dist=288.3"));
        assert!(text.contains("whl=[91,109,91,109]"));
        assert!(text.ends_with("i2c=NACK on data"));
    }

    #[test]
    fn test_line_fits_buffer_at_extremes() {
        let frame = TelemetryFrame {
            mode: Mode::ReturnHome,
            pose: Pose2D::new(-99999.0, -99999.0, -180.0),
            goal: Pose2D::new(-99999.0, -99999.0, -180.0),
            goal_index: 3,
            distance: 999999.9,
            command: HolonomicCommand::new(-100.0, -100.0, -100.0),
            wheels: WheelSpeeds::new(-120, -120, -120, -120),
            velocity: Pose2D::new(-9999.9, -9999.9, -2000.0),
            acceleration: Pose2D::new(-99999.9, -99999.9, -99999.9),
            write_status: WriteStatus::NackOnAddress,
            ..Default::default()
        };
        let mut line: String<TELEMETRY_LINE_LEN> = String::new();
        assert!(frame.write_line(&mut line).is_ok());
    }

    #[test]
    fn test_log_telemetry_interval() {
        let frame = sample_frame();
        let mut sink = LogTelemetry::new(3);
        for _ in 0..7 {
            sink.publish(&frame);
        }
        // frames 0, 3, 6
        assert_eq!(sink.published(), 3);
    }

    #[test]
    fn test_log_telemetry_disabled() {
        let mut sink = LogTelemetry::new(0);
        sink.publish(&sample_frame());
        assert_eq!(sink.published(), 0);
    }

    #[test]
    fn test_sink_by_reference() {
        fn feed<T: TelemetrySink>(mut sink: T, frame: &TelemetryFrame) {
            sink.publish(frame);
        }

        let mut sink = LogTelemetry::default();
        feed(&mut sink, &sample_frame());
        assert_eq!(sink.published(), 1);
    }
}
