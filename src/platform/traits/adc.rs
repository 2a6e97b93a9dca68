//! ADC interface trait
//!
//! This module defines the analog input interface that platform implementations must provide.

use crate::platform::Result;

/// Multiplexed analog-to-digital converter
///
/// One converter is shared between several input channels. A caller selects a
/// channel and then reads it; reads always return a 12-bit value in `0..=4095`.
///
/// # Safety Invariants
///
/// - Only one owner of the converter (the main loop)
/// - Channels are read sequentially, no batching is assumed
pub trait AdcInterface {
    /// Route the converter input to `channel`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::InvalidChannel)` if the channel is
    /// not wired on this board.
    fn select_channel(&mut self, channel: u8) -> Result<()>;

    /// Perform one conversion on the selected channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::ConversionFailed)` if the
    /// conversion did not complete.
    fn read(&mut self) -> Result<u16>;
}
