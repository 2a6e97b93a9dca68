//! Mode flags and the debounce gate

use crate::config::input::DEBOUNCE_WINDOW_MS;

/// Border drawn around the cursor on a joystick-button redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// One-pixel outline around the whole panel
    Solid,
    /// Diagonal lines sweeping across the panel
    ZigZag,
}

impl BorderStyle {
    /// The other style
    pub const fn toggled(self) -> Self {
        match self {
            BorderStyle::Solid => BorderStyle::ZigZag,
            BorderStyle::ZigZag => BorderStyle::Solid,
        }
    }
}

/// Operator-selected modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeState {
    /// Joystick deflection drives the blue/red LEDs
    pub pwm_enabled: bool,
    pub border_style: BorderStyle,
    /// Status LED, toggled together with the border style
    pub green_led_on: bool,
}

impl ModeState {
    /// Power-on modes
    pub const fn new() -> Self {
        Self {
            pwm_enabled: true,
            border_style: BorderStyle::Solid,
            green_led_on: false,
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounce gate shared by both buttons
///
/// An edge at `now_ms` is accepted only if strictly more than the window has
/// passed since the last accepted edge. Rejected edges do not move the
/// reference point, so a bouncing switch cannot extend the window forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTimer {
    last_accepted_ms: u64,
    window_ms: u64,
}

impl DebounceTimer {
    /// Gate with the reference point at boot
    ///
    /// Edges within the first window after boot are rejected.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            last_accepted_ms: 0,
            window_ms,
        }
    }

    /// Try to accept an edge at `now_ms`
    ///
    /// Returns `true` and moves the reference point if the edge is accepted.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        let elapsed = now_ms.saturating_sub(self.last_accepted_ms);
        if elapsed <= self.window_ms {
            return false;
        }
        self.last_accepted_ms = now_ms;
        true
    }

    pub fn last_accepted_ms(&self) -> u64 {
        self.last_accepted_ms
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_MS)
    }
}

/// Everything the edge context writes, kept under one lock
///
/// The debounce check and the toggle it gates happen in the same critical
/// section, so two edges can never both pass the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState {
    pub mode: ModeState,
    pub debounce: DebounceTimer,
}

impl InputState {
    pub const fn new() -> Self {
        Self {
            mode: ModeState::new(),
            debounce: DebounceTimer::new(DEBOUNCE_WINDOW_MS),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
