//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits so the
//! sampler, illumination and cursor logic can be exercised without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use pico_joystick::platform::mock::MockAdc;
//! use pico_joystick::platform::traits::AdcInterface;
//!
//! let mut adc = MockAdc::with_sample(4095, 2048);
//! adc.select_channel(0).unwrap();
//! assert_eq!(adc.read().unwrap(), 4095);
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod display;
mod gpio;
mod pwm;

pub use adc::MockAdc;
pub use display::{MockDisplay, MockFrameBuffer};
pub use gpio::MockGpio;
pub use pwm::MockPwm;
