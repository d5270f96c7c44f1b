//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Advances simulated time on every delay instead of blocking.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delay_calls: u32,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delay calls made so far
    pub fn delay_calls(&self) -> u32 {
        self.delay_calls
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        self.delay_calls += 1;
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(10).unwrap();
        assert_eq!(timer.now_ms(), 10);
        assert_eq!(timer.delay_calls(), 1);
    }
}
