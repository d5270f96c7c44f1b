//! Operator button handling
//!
//! Polled edge detection for the two operator buttons. Buttons are wired
//! active-low (pressed pulls the pin to ground). An event fires once, on the
//! poll where a press is first seen released.
//!
//! ## Example
//!
//! ```ignore
//! let mut panel = ButtonPanel::new(button_a, button_b);
//! loop {
//!     let events = panel.poll();
//!     nav_loop.tick(events);
//! }
//! ```

use crate::platform::traits::{GpioInterface, GpioMode};
use crate::platform::Result;

/// Events derived from one poll of the operator buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEvents {
    /// Cycle to the next operating mode
    pub mode_advance: bool,
    /// Recalibrate the sensor and restart the waypoint sequence
    pub calibration_reset: bool,
}

impl InputEvents {
    /// No events
    pub const NONE: InputEvents = InputEvents {
        mode_advance: false,
        calibration_reset: false,
    };

    /// Only a mode advance
    pub const fn mode_advance() -> Self {
        Self {
            mode_advance: true,
            calibration_reset: false,
        }
    }

    /// Only a calibration reset
    pub const fn calibration_reset() -> Self {
        Self {
            mode_advance: false,
            calibration_reset: true,
        }
    }

    /// True if any event fired
    pub fn any(&self) -> bool {
        self.mode_advance || self.calibration_reset
    }
}

/// Single active-low button with release detection
pub struct Button<P: GpioInterface> {
    pin: P,
    pressed: bool,
}

impl<P: GpioInterface> Button<P> {
    /// Configure the pin as a pulled-up input
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin mode cannot be set.
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_mode(GpioMode::InputPullUp)?;
        let pressed = !pin.read();
        Ok(Self { pin, pressed })
    }

    /// Sample the pin; returns `true` on the poll that observes a release
    pub fn was_released(&mut self) -> bool {
        let pressed = !self.pin.read();
        let released = self.pressed && !pressed;
        self.pressed = pressed;
        released
    }

    /// Level seen at the last poll
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Mutably borrow the pin
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

/// Mode button (A) and reset button (B)
pub struct ButtonPanel<A: GpioInterface, B: GpioInterface> {
    mode: Button<A>,
    reset: Button<B>,
}

impl<A: GpioInterface, B: GpioInterface> ButtonPanel<A, B> {
    /// Create a panel from the mode and reset buttons
    pub fn new(mode: Button<A>, reset: Button<B>) -> Self {
        Self { mode, reset }
    }

    /// Poll both buttons once
    pub fn poll(&mut self) -> InputEvents {
        InputEvents {
            mode_advance: self.mode.was_released(),
            calibration_reset: self.reset.was_released(),
        }
    }

    /// Borrow the mode button
    pub fn mode_button(&mut self) -> &mut Button<A> {
        &mut self.mode
    }

    /// Borrow the reset button
    pub fn reset_button(&mut self) -> &mut Button<B> {
        &mut self.reset
    }
}
