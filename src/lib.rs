#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! pico_joystick - Joystick-driven OLED cursor and LED panel for the Raspberry Pi Pico 2
//!
//! An analog joystick moves a cursor on a 128x64 SSD1306 and drives two PWM
//! LEDs; two buttons toggle the panel's modes from an interrupt-priority task
//! while the main loop keeps ticking.

// Board wiring and tuning constants
pub mod config;

// Platform abstraction layer (traits, mocks, RP2350)
pub mod platform;

// Drivers written against the platform traits
pub mod devices;

// Logging macros and runtime-agnostic traits
pub mod core;

// Input, sampling, illumination and cursor logic
pub mod subsystems;

// Shared context and main-loop tick
pub mod app;
