//! Board wiring and tuning constants
//!
//! Everything the panel needs to know about the board lives here, grouped by
//! concern. Changing a pin or a timing only ever touches this file.

/// GPIO assignments (BitDogLab-style RP2350 board)
pub mod pins {
    /// Joystick push-button, active low with pull-up
    pub const BUTTON_JOYSTICK: u8 = 22;
    /// Button A, active low with pull-up
    pub const BUTTON_A: u8 = 5;
    /// Green status LED, digital output
    pub const LED_GREEN: u8 = 11;
    /// Blue LED, PWM slice 6 channel A
    pub const LED_BLUE: u8 = 12;
    /// Red LED, PWM slice 6 channel B
    pub const LED_RED: u8 = 13;
    /// Joystick X axis (ADC0)
    pub const JOYSTICK_X: u8 = 26;
    /// Joystick Y axis (ADC1)
    pub const JOYSTICK_Y: u8 = 27;
    /// Display bus data line (I2C1)
    pub const DISPLAY_SDA: u8 = 14;
    /// Display bus clock line (I2C1)
    pub const DISPLAY_SCL: u8 = 15;
}

/// Analog joystick
pub mod joystick {
    /// ADC input for the X axis
    pub const CHANNEL_X: u8 = 0;
    /// ADC input for the Y axis
    pub const CHANNEL_Y: u8 = 1;
    /// Largest 12-bit conversion result
    pub const ADC_MAX: u16 = 4095;
    /// Nominal reading at rest
    pub const CENTER: i32 = 2048;
    /// Deviations up to and including this are treated as centered
    pub const DEAD_ZONE: i32 = 180;
}

/// LED PWM
pub mod pwm {
    /// Counter wrap value; levels range over `0..=WRAP`
    pub const WRAP: u16 = 4095;
}

/// Push-button handling
pub mod input {
    /// Edges arriving within this many milliseconds of the last accepted
    /// edge are discarded. The window is shared by both buttons.
    pub const DEBOUNCE_WINDOW_MS: u64 = 200;
}

/// Main loop timing
pub mod timing {
    /// Sleep between the end of one tick and the start of the next
    pub const TICK_PERIOD_MS: u64 = 20;
}

/// SSD1306 panel geometry and cursor rendering
pub mod display {
    use crate::subsystems::cursor::BorderPolicy;

    pub const WIDTH: u32 = 128;
    pub const HEIGHT: u32 = 64;
    pub const HALF_WIDTH: i32 = 64;
    pub const HALF_HEIGHT: i32 = 32;
    /// Side of the square cursor in pixels
    pub const CURSOR_SIZE: u32 = 8;
    /// Scale from ADC counts to pixel offsets
    pub const CURSOR_DIVISOR: i32 = 16;
    /// Horizontal spacing of the zig-zag border lines
    pub const ZIGZAG_STEP: usize = 16;
    /// 7-bit I2C address
    pub const I2C_ADDRESS: u8 = 0x3C;
    pub const I2C_FREQUENCY_HZ: u32 = 400_000;
    /// Whether the main loop keeps the border on screen after a redraw
    pub const BORDER_POLICY: BorderPolicy = BorderPolicy::Transient;
}
