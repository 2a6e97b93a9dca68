//! Mock PWM implementation for testing

use crate::platform::{
    Result,
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
};

/// Mock PWM channel
///
/// Tracks the compare level and how many times it was written.
#[derive(Debug)]
pub struct MockPwm {
    level: u16,
    wrap: u16,
    writes: usize,
    fail_writes: bool,
}

impl MockPwm {
    /// Create a new mock PWM channel
    pub fn new(config: PwmConfig) -> Self {
        Self {
            level: config.initial_level,
            wrap: config.wrap,
            writes: 0,
            fail_writes: false,
        }
    }

    /// Make subsequent writes fail with `HardwareError`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of accepted `set_level` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new(PwmConfig::default())
    }
}

impl PwmInterface for MockPwm {
    fn set_level(&mut self, level: u16) -> Result<()> {
        if level > self.wrap {
            return Err(PlatformError::Pwm(PwmError::LevelOutOfRange));
        }
        if self.fail_writes {
            return Err(PlatformError::Pwm(PwmError::HardwareError));
        }
        self.level = level;
        self.writes += 1;
        Ok(())
    }

    fn level(&self) -> u16 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pwm_level() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.level(), 0);

        pwm.set_level(4095).unwrap();
        assert_eq!(pwm.level(), 4095);
        assert_eq!(pwm.write_count(), 1);
    }

    #[test]
    fn test_mock_pwm_rejects_level_above_wrap() {
        let mut pwm = MockPwm::new(PwmConfig {
            wrap: 255,
            initial_level: 10,
        });

        assert_eq!(
            pwm.set_level(256),
            Err(PlatformError::Pwm(PwmError::LevelOutOfRange))
        );
        assert_eq!(pwm.level(), 10);
        assert_eq!(pwm.write_count(), 0);
    }

    #[test]
    fn test_mock_pwm_hardware_failure_keeps_level() {
        let mut pwm = MockPwm::default();
        pwm.set_level(800).unwrap();
        pwm.set_fail_writes(true);

        assert_eq!(
            pwm.set_level(0),
            Err(PlatformError::Pwm(PwmError::HardwareError))
        );
        assert_eq!(pwm.level(), 800);
    }
}
