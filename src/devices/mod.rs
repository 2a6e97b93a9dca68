//! Device drivers
//!
//! Drivers written against the platform abstraction traits rather than a HAL.
//!
//! ## Modules
//!
//! - `oled`: adapts any embedded-graphics monochrome target (the SSD1306 on
//!   the board, a RAM frame buffer in tests) to [`DisplayInterface`]
//!
//! [`DisplayInterface`]: crate::platform::traits::DisplayInterface

pub mod oled;
