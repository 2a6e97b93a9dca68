//! Core infrastructure
//!
//! Logging macros and the runtime-agnostic traits the subsystems are written
//! against.

pub mod logging;
pub mod traits;
