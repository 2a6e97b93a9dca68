//! Platform abstraction layer
//!
//! The control logic never touches a HAL type directly. It talks to the
//! peripheral traits in [`traits`]; [`rp2350`] implements them on the Pico 2
//! and [`mock`] implements them on the host for tests.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcInterface, DisplayInterface, EdgeInput, GpioInterface, PwmConfig, PwmInterface};
