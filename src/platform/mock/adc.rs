//! Mock ADC implementation for testing

use crate::platform::{
    Result,
    error::{AdcError, PlatformError},
    traits::AdcInterface,
};

/// Number of inputs wired on the mock multiplexer
const CHANNELS: usize = 2;

/// Mock ADC implementation
///
/// Holds one fixed conversion result per channel and records which channel
/// every read was taken from.
#[derive(Debug)]
pub struct MockAdc {
    values: [u16; CHANNELS],
    selected: u8,
    read_log: Vec<u8>,
    fail_reads: bool,
}

impl MockAdc {
    /// Create a mock with both axes at rest
    pub fn new() -> Self {
        Self::with_sample(2048, 2048)
    }

    /// Create a mock returning `x` on channel 0 and `y` on channel 1
    pub fn with_sample(x: u16, y: u16) -> Self {
        Self {
            values: [x, y],
            selected: 0,
            read_log: Vec::new(),
            fail_reads: false,
        }
    }

    /// Change both axis values at once
    pub fn set_sample(&mut self, x: u16, y: u16) {
        self.values = [x, y];
    }

    /// Make subsequent reads fail with `ConversionFailed`
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Channels read so far, in order
    pub fn read_log(&self) -> &[u8] {
        &self.read_log
    }
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl AdcInterface for MockAdc {
    fn select_channel(&mut self, channel: u8) -> Result<()> {
        if channel as usize >= CHANNELS {
            return Err(PlatformError::Adc(AdcError::InvalidChannel));
        }
        self.selected = channel;
        Ok(())
    }

    fn read(&mut self) -> Result<u16> {
        if self.fail_reads {
            return Err(PlatformError::Adc(AdcError::ConversionFailed));
        }
        self.read_log.push(self.selected);
        Ok(self.values[self.selected as usize])
    }
}
