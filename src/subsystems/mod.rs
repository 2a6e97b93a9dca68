//! Panel subsystems
//!
//! ```text
//!   buttons ──► input ──► ModeState ◄── read ──┐
//!                 │                           │
//!                 └─ forces LEDs off      ┌───┴────────┐
//!                                         │  app tick  │
//!   joystick ──► sampler ──► AnalogSample ┤            │
//!                                         └─┬────────┬─┘
//!                              illumination ◄┘        └► cursor
//!                              (blue/red PWM)            (OLED)
//! ```

pub mod cursor;
pub mod illumination;
pub mod input;
pub mod sampler;
