//! Mock GPIO implementation for testing

use crate::platform::{
    Result,
    error::{GpioError, PlatformError},
    traits::GpioInterface,
};

/// Mock GPIO output pin
///
/// Tracks pin state (high/low) and how many writes it has seen.
#[derive(Debug, Default)]
pub struct MockGpio {
    state: bool,
    writes: usize,
    fail_writes: bool,
}

impl MockGpio {
    /// Create a new mock GPIO output, driven low
    pub fn new_output() -> Self {
        Self::default()
    }

    /// Make subsequent `set_state` calls fail with a hardware error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of accepted `set_state` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl GpioInterface for MockGpio {
    fn set_state(&mut self, high: bool) -> Result<()> {
        if self.fail_writes {
            return Err(PlatformError::Gpio(GpioError::HardwareError));
        }
        self.state = high;
        self.writes += 1;
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.is_set_high());

        gpio.set_state(true).unwrap();
        assert!(gpio.is_set_high());

        gpio.set_state(false).unwrap();
        assert!(!gpio.is_set_high());
        assert_eq!(gpio.write_count(), 2);
    }

    #[test]
    fn test_mock_gpio_failed_write_keeps_state() {
        let mut gpio = MockGpio::new_output();
        gpio.set_fail_writes(true);
        assert_eq!(
            gpio.set_state(true),
            Err(PlatformError::Gpio(GpioError::HardwareError))
        );
        assert!(!gpio.is_set_high());
        assert_eq!(gpio.write_count(), 0);
    }
}
