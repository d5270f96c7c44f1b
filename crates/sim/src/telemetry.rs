//! Host telemetry sinks.

use omni_rover::communication::telemetry::{TelemetryFrame, TelemetrySink};

/// Prints every `interval`-th frame to stdout (0 = silent).
pub struct PrintTelemetry {
    interval: u64,
    count: u64,
}

impl PrintTelemetry {
    pub fn new(interval: u64) -> Self {
        Self { interval, count: 0 }
    }
}

impl TelemetrySink for PrintTelemetry {
    fn publish(&mut self, frame: &TelemetryFrame) {
        if self.interval != 0 && self.count % self.interval == 0 {
            println!("[{:>6}] {}", frame.tick, frame.to_line());
        }
        self.count += 1;
    }
}

/// Keeps every frame for inspection.
#[derive(Default)]
pub struct RecordingTelemetry {
    frames: Vec<TelemetryFrame>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[TelemetryFrame] {
        &self.frames
    }

    /// Goal indices in the order they were first targeted, collapsing repeats.
    pub fn goal_sequence(&self) -> Vec<usize> {
        let mut sequence: Vec<usize> = Vec::new();
        for frame in &self.frames {
            if sequence.last() != Some(&frame.goal_index) {
                sequence.push(frame.goal_index);
            }
        }
        sequence
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn publish(&mut self, frame: &TelemetryFrame) {
        self.frames.push(*frame);
    }
}
