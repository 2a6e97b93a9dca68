//! Platform abstraction traits
//!
//! This module defines the peripheral contracts the control loop consumes.

pub mod adc;
pub mod display;
pub mod gpio;
pub mod pwm;

// Re-export trait interfaces
pub use adc::AdcInterface;
pub use display::DisplayInterface;
pub use gpio::{EdgeInput, GpioInterface};
pub use pwm::{PwmConfig, PwmInterface};
