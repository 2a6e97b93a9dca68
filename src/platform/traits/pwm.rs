//! PWM interface trait
//!
//! This module defines the PWM output interface that platform implementations must provide.

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConfig {
    /// Counter wrap value; levels are in `0..=wrap`
    pub wrap: u16,
    /// Level applied when the channel is created
    pub initial_level: u16,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            wrap: crate::config::pwm::WRAP,
            initial_level: 0,
        }
    }
}

/// PWM interface trait
///
/// One instance drives one output channel. The level is the raw compare value,
/// so `0` is fully off and `wrap` is fully on.
///
/// # Safety Invariants
///
/// - PWM slice must be configured and enabled before use
/// - Only one owner per PWM channel
/// - Level must be in range `0..=wrap`
pub trait PwmInterface {
    /// Set the compare level of this channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::LevelOutOfRange)` if `level`
    /// exceeds the configured wrap value.
    fn set_level(&mut self, level: u16) -> Result<()>;

    /// Last level written to this channel
    fn level(&self) -> u16;
}
