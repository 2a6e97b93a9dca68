//! RP2350 PWM implementation
//!
//! Both LEDs share PWM slice 6: blue on channel A (GPIO 12), red on
//! channel B (GPIO 13). The slice is configured once with the wrap value,
//! then split so each LED owns its channel.

use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use embedded_hal_1::pwm::SetDutyCycle;

use crate::platform::{
    Result,
    error::{PlatformError, PwmError},
    traits::{PwmConfig, PwmInterface},
};

/// Slice configuration for the LED pair
pub fn led_pwm_config(config: &PwmConfig) -> Config {
    let mut slice = Config::default();
    slice.top = config.wrap;
    slice.compare_a = config.initial_level;
    slice.compare_b = config.initial_level;
    slice
}

/// One PWM channel
pub struct Rp2350PwmChannel {
    output: PwmOutput<'static>,
    wrap: u16,
    level: u16,
}

impl Rp2350PwmChannel {
    pub fn new(output: PwmOutput<'static>, config: PwmConfig) -> Self {
        Self {
            output,
            wrap: config.wrap,
            level: config.initial_level,
        }
    }
}

impl PwmInterface for Rp2350PwmChannel {
    fn set_level(&mut self, level: u16) -> Result<()> {
        if level > self.wrap {
            return Err(PlatformError::Pwm(PwmError::LevelOutOfRange));
        }
        self.output
            .set_duty_cycle(level)
            .map_err(|_| PlatformError::Pwm(PwmError::HardwareError))?;
        self.level = level;
        Ok(())
    }

    fn level(&self) -> u16 {
        self.level
    }
}

/// Split a two-output slice into (channel A, channel B)
///
/// # Errors
///
/// `InitializationFailed` if the slice was not created with both outputs.
pub fn init_led_pwm(
    pwm: Pwm<'static>,
    config: PwmConfig,
) -> Result<(Rp2350PwmChannel, Rp2350PwmChannel)> {
    let (a, b) = pwm.split();
    match (a, b) {
        (Some(a), Some(b)) => Ok((
            Rp2350PwmChannel::new(a, config),
            Rp2350PwmChannel::new(b, config),
        )),
        _ => Err(PlatformError::InitializationFailed),
    }
}
