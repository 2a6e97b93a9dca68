//! RP2350 platform implementation for Raspberry Pi Pico 2
//!
//! Concrete implementations of the platform traits on top of `embassy-rp`,
//! plus the embassy tasks that run the panel.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! pico_joystick = { version = "0.1", features = ["pico2_w"] }
//! ```

mod adc;
mod display;
mod gpio;
mod pwm;
pub mod tasks;

pub use adc::Rp2350Adc;
pub use display::{Rp2350Oled, init_oled};
pub use gpio::{Rp2350Button, Rp2350Output};
pub use pwm::{Rp2350PwmChannel, init_led_pwm, led_pwm_config};
