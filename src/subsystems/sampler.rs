//! Analog joystick sampler
//!
//! Reads both joystick axes back to back through the single multiplexed ADC.

use crate::config::joystick::{ADC_MAX, CENTER, CHANNEL_X, CHANNEL_Y};
use crate::platform::{Result, traits::AdcInterface};

/// One reading of both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogSample {
    /// X axis, `0..=4095`
    pub joy_x: u16,
    /// Y axis, `0..=4095`
    pub joy_y: u16,
}

impl AnalogSample {
    /// Both axes at rest
    pub const CENTERED: Self = Self {
        joy_x: CENTER as u16,
        joy_y: CENTER as u16,
    };

    /// Build a sample, limiting each axis to the 12-bit range
    pub fn new(joy_x: u16, joy_y: u16) -> Self {
        Self {
            joy_x: joy_x.min(ADC_MAX),
            joy_y: joy_y.min(ADC_MAX),
        }
    }
}

impl Default for AnalogSample {
    fn default() -> Self {
        Self::CENTERED
    }
}

/// Samples the joystick through an [`AdcInterface`]
pub struct AnalogSampler<A> {
    adc: A,
    last: AnalogSample,
}

impl<A: AdcInterface> AnalogSampler<A> {
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            last: AnalogSample::CENTERED,
        }
    }

    /// Read X then Y
    ///
    /// On error the previous sample is kept and returned by [`last`](Self::last).
    pub fn sample(&mut self) -> Result<AnalogSample> {
        self.adc.select_channel(CHANNEL_X)?;
        let joy_x = self.adc.read()?;
        self.adc.select_channel(CHANNEL_Y)?;
        let joy_y = self.adc.read()?;

        let sample = AnalogSample::new(joy_x, joy_y);
        self.last = sample;
        Ok(sample)
    }

    /// Most recent successful sample, centered before the first one
    pub fn last(&self) -> AnalogSample {
        self.last
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockAdc;

    #[test]
    fn reads_x_then_y() {
        let mut sampler = AnalogSampler::new(MockAdc::with_sample(4095, 0));

        let sample = sampler.sample().unwrap();

        assert_eq!(sample, AnalogSample { joy_x: 4095, joy_y: 0 });
        assert_eq!(sampler.adc().read_log(), &[0, 1]);
        assert_eq!(sampler.last(), sample);
    }

    #[test]
    fn starts_centered() {
        let sampler = AnalogSampler::new(MockAdc::new());
        assert_eq!(sampler.last(), AnalogSample::CENTERED);
        assert_eq!(AnalogSample::default(), AnalogSample::new(2048, 2048));
    }

    #[test]
    fn out_of_range_reading_is_limited_to_12_bits() {
        let mut sampler = AnalogSampler::new(MockAdc::with_sample(u16::MAX, 5000));
        let sample = sampler.sample().unwrap();
        assert_eq!(sample, AnalogSample { joy_x: 4095, joy_y: 4095 });
    }

    #[test]
    fn failed_read_keeps_previous_sample() {
        let mut sampler = AnalogSampler::new(MockAdc::with_sample(100, 200));
        let first = sampler.sample().unwrap();

        sampler.adc_mut().set_sample(3000, 3000);
        sampler.adc_mut().set_fail_reads(true);

        assert!(sampler.sample().is_err());
        assert_eq!(sampler.last(), first);
    }
}
