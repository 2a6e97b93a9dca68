//! Joystick-driven LED illumination
//!
//! Each axis' distance from center drives one PWM channel. The axes are
//! cross-wired: X deflection lights the blue LED, Y deflection the red one.

use crate::config::joystick::{CENTER, DEAD_ZONE};
use crate::config::pwm::WRAP;
use crate::platform::{Result, traits::PwmInterface};

use super::sampler::AnalogSample;

/// Compare levels for the two LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveLevel {
    pub blue: u16,
    pub red: u16,
}

impl DriveLevel {
    pub const OFF: Self = Self { blue: 0, red: 0 };
}

/// Level for one axis reading
///
/// Zero inside the dead zone, otherwise proportional to the deviation with
/// full deflection toward 0 reaching `WRAP`.
pub fn axis_level(raw: u16) -> u16 {
    let delta = (i32::from(raw) - CENTER).abs();
    if delta <= DEAD_ZONE {
        return 0;
    }
    // delta <= CENTER, so the result never exceeds WRAP
    (delta * i32::from(WRAP) / CENTER) as u16
}

/// Drive levels for a sample
///
/// Returns `None` while illumination is disabled: the outputs keep whatever
/// level they were last forced to.
pub fn map_intensity(sample: AnalogSample, pwm_enabled: bool) -> Option<DriveLevel> {
    if !pwm_enabled {
        return None;
    }
    Some(DriveLevel {
        blue: axis_level(sample.joy_x),
        red: axis_level(sample.joy_y),
    })
}

/// The blue and red PWM channels, written as a pair
pub struct IntensityOutputs<P> {
    blue: P,
    red: P,
    applied: DriveLevel,
}

impl<P: PwmInterface> IntensityOutputs<P> {
    pub fn new(blue: P, red: P) -> Self {
        let applied = DriveLevel {
            blue: blue.level(),
            red: red.level(),
        };
        Self { blue, red, applied }
    }

    /// Write both channels
    pub fn apply(&mut self, level: DriveLevel) -> Result<()> {
        self.blue.set_level(level.blue)?;
        self.red.set_level(level.red)?;
        self.applied = level;
        Ok(())
    }

    /// Turn both LEDs fully off
    ///
    /// Both channels are written even if the first write fails; the first
    /// error is returned.
    pub fn force_off(&mut self) -> Result<()> {
        let blue = self.blue.set_level(0);
        let red = self.red.set_level(0);
        self.applied = DriveLevel {
            blue: self.blue.level(),
            red: self.red.level(),
        };
        blue.and(red)
    }

    /// Levels from the last successful [`apply`](Self::apply)
    pub fn applied(&self) -> DriveLevel {
        self.applied
    }

    pub fn blue(&self) -> &P {
        &self.blue
    }

    pub fn red(&self) -> &P {
        &self.red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::{PlatformError, PwmError};
    use crate::platform::mock::MockPwm;

    #[test]
    fn dead_zone_yields_zero() {
        for raw in (2048 - 180)..=(2048 + 180) {
            assert_eq!(axis_level(raw), 0, "raw {raw}");
        }
    }

    #[test]
    fn outside_dead_zone_is_proportional() {
        for raw in (0..=4095u16).filter(|r| (i32::from(*r) - 2048).abs() > 180) {
            let delta = (i32::from(raw) - 2048).abs();
            let expected = (delta * 4095 / 2048) as u16;
            assert_eq!(axis_level(raw), expected, "raw {raw}");
            assert!(axis_level(raw) <= 4095);
        }
    }

    #[test]
    fn dead_zone_edges() {
        // 181 * 4095 / 2048
        assert_eq!(axis_level(2048 + 181), 361);
        assert_eq!(axis_level(2048 - 181), 361);
        assert_eq!(axis_level(0), 4095);
        assert_eq!(axis_level(4095), 4093);
    }

    #[test]
    fn x_axis_drives_blue_and_y_axis_drives_red() {
        let level = map_intensity(AnalogSample::new(4095, 2048), true).unwrap();
        assert_eq!(level, DriveLevel { blue: 4093, red: 0 });

        let level = map_intensity(AnalogSample::new(2048, 0), true).unwrap();
        assert_eq!(level, DriveLevel { blue: 0, red: 4095 });
    }

    #[test]
    fn centered_sample_is_dark() {
        assert_eq!(
            map_intensity(AnalogSample::CENTERED, true),
            Some(DriveLevel::OFF)
        );
    }

    #[test]
    fn disabled_illumination_produces_no_levels() {
        assert_eq!(map_intensity(AnalogSample::new(0, 0), false), None);
    }

    #[test]
    fn outputs_apply_and_force_off() {
        let mut outputs = IntensityOutputs::new(MockPwm::default(), MockPwm::default());
        assert_eq!(outputs.applied(), DriveLevel::OFF);

        outputs.apply(DriveLevel { blue: 1000, red: 3000 }).unwrap();
        assert_eq!(outputs.blue().level(), 1000);
        assert_eq!(outputs.red().level(), 3000);

        outputs.force_off().unwrap();
        assert_eq!(outputs.blue().level(), 0);
        assert_eq!(outputs.red().level(), 0);
        assert_eq!(outputs.applied(), DriveLevel::OFF);
    }

    #[test]
    fn force_off_darkens_red_when_blue_write_fails() {
        let mut outputs = IntensityOutputs::new(MockPwm::default(), MockPwm::default());
        outputs.apply(DriveLevel { blue: 1000, red: 3000 }).unwrap();
        outputs.blue.set_fail_writes(true);

        assert_eq!(
            outputs.force_off(),
            Err(PlatformError::Pwm(PwmError::HardwareError))
        );
        assert_eq!(outputs.red().level(), 0);
        assert_eq!(outputs.blue().level(), 1000);
        assert_eq!(outputs.applied(), DriveLevel { blue: 1000, red: 0 });
    }

    #[test]
    fn rejected_level_is_not_recorded() {
        let mut outputs = IntensityOutputs::new(MockPwm::default(), MockPwm::default());
        assert!(outputs.apply(DriveLevel { blue: 5000, red: 0 }).is_err());
        assert_eq!(outputs.applied(), DriveLevel::OFF);
    }
}
