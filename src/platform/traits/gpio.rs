//! GPIO interface traits
//!
//! [`GpioInterface`] covers plain digital outputs (the status LED) and
//! [`EdgeInput`] covers buttons that wake a task on a falling edge.

use crate::platform::Result;

/// GPIO output interface
///
/// # Safety Invariants
///
/// - Only one owner per pin
/// - Pin number must be valid for the platform
pub trait GpioInterface {
    /// Drive the pin to `high`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::HardwareError)` if the pin
    /// could not be driven.
    fn set_state(&mut self, high: bool) -> Result<()>;

    /// Whether the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Button input with async falling-edge detection
///
/// Buttons are wired active low with the internal pull-up enabled, so a press
/// is a high-to-low transition.
#[allow(async_fn_in_trait)]
pub trait EdgeInput {
    /// Wait for the next high-to-low transition
    async fn wait_for_falling_edge(&mut self);
}
