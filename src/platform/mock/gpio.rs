//! Mock GPIO implementation for testing

use crate::platform::{
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO input pin
///
/// Defaults to the idle level of a pulled-up button (high).
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
}

impl MockGpio {
    /// Create a new mock GPIO input with pull-up, reading high
    pub fn new_pull_up() -> Self {
        Self {
            state: true,
            mode: GpioMode::InputPullUp,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new_pull_up()
    }
}

impl GpioInterface for MockGpio {
    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
