//! RP2350 ADC implementation
//!
//! Blocking single conversions through `embassy-rp`. A conversion takes
//! about 2 us, so there is nothing to gain from the async driver here.

use embassy_rp::adc::{Adc, Blocking, Channel};

use crate::platform::{
    Result,
    error::{AdcError, PlatformError},
    traits::AdcInterface,
};

/// The ADC with the joystick's two inputs
///
/// Channel index `n` in [`AdcInterface::select_channel`] refers to the
/// `n`-th entry of the array passed to [`Rp2350Adc::new`].
pub struct Rp2350Adc {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; 2],
    selected: u8,
}

impl Rp2350Adc {
    pub fn new(adc: Adc<'static, Blocking>, channels: [Channel<'static>; 2]) -> Self {
        Self {
            adc,
            channels,
            selected: 0,
        }
    }
}

impl AdcInterface for Rp2350Adc {
    fn select_channel(&mut self, channel: u8) -> Result<()> {
        if channel as usize >= self.channels.len() {
            return Err(PlatformError::Adc(AdcError::InvalidChannel));
        }
        self.selected = channel;
        Ok(())
    }

    fn read(&mut self) -> Result<u16> {
        let channel = &mut self.channels[self.selected as usize];
        self.adc
            .blocking_read(channel)
            .map_err(|_| PlatformError::Adc(AdcError::ConversionFailed))
    }
}
