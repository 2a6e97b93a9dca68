//! Debounced edge handling
//!
//! [`process_edge`] is the whole state transition for one falling edge: it
//! runs the debounce gate and flips the flags in a single access to the
//! shared state, then reports what changed. Driving the status LED, zeroing
//! the PWM outputs and requesting a redraw are left to the caller, which does
//! them after the lock is released.

use crate::config::pins;
use crate::core::traits::SharedState;

use super::mode::{BorderStyle, InputState};

/// The two buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Joystick push-button: toggles status LED and border style
    Joystick,
    /// Button A: toggles joystick-driven LED illumination
    A,
}

impl Button {
    /// GPIO the button is wired to
    pub const fn gpio(self) -> u8 {
        match self {
            Button::Joystick => pins::BUTTON_JOYSTICK,
            Button::A => pins::BUTTON_A,
        }
    }
}

/// Result of an accepted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeChange {
    /// Joystick button: new border style and status LED state
    Display {
        border_style: BorderStyle,
        green_led_on: bool,
    },
    /// Button A: new illumination state
    Illumination { pwm_enabled: bool },
}

/// Debounce an edge from `button` at `now_ms` and apply its toggle
///
/// Returns `None` when the edge falls inside the debounce window; the state
/// is then left untouched.
pub fn process_edge<S>(state: &S, button: Button, now_ms: u64) -> Option<ModeChange>
where
    S: SharedState<InputState>,
{
    state.with_mut(|input| {
        if !input.debounce.accept(now_ms) {
            return None;
        }

        let mode = &mut input.mode;
        Some(match button {
            Button::Joystick => {
                mode.green_led_on = !mode.green_led_on;
                mode.border_style = mode.border_style.toggled();
                ModeChange::Display {
                    border_style: mode.border_style,
                    green_led_on: mode.green_led_on,
                }
            }
            Button::A => {
                mode.pwm_enabled = !mode.pwm_enabled;
                ModeChange::Illumination {
                    pwm_enabled: mode.pwm_enabled,
                }
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockState;
    use crate::subsystems::input::ModeState;

    fn state() -> MockState<InputState> {
        MockState::new(InputState::new())
    }

    #[test]
    fn buttons_report_their_gpio() {
        assert_eq!(Button::Joystick.gpio(), 22);
        assert_eq!(Button::A.gpio(), 5);
    }

    #[test]
    fn joystick_edge_flips_led_and_border() {
        let state = state();

        let change = process_edge(&state, Button::Joystick, 1_000);

        assert_eq!(
            change,
            Some(ModeChange::Display {
                border_style: BorderStyle::ZigZag,
                green_led_on: true,
            })
        );
        let mode = state.snapshot().mode;
        assert_eq!(mode.border_style, BorderStyle::ZigZag);
        assert!(mode.green_led_on);
        assert!(mode.pwm_enabled);
    }

    #[test]
    fn two_accepted_joystick_edges_restore_flags() {
        let state = state();

        assert!(process_edge(&state, Button::Joystick, 1_000).is_some());
        assert!(process_edge(&state, Button::Joystick, 1_300).is_some());

        assert_eq!(state.snapshot().mode, ModeState::new());
    }

    #[test]
    fn button_a_edge_flips_pwm_only() {
        let state = state();

        let change = process_edge(&state, Button::A, 1_000);

        assert_eq!(
            change,
            Some(ModeChange::Illumination { pwm_enabled: false })
        );
        let mode = state.snapshot().mode;
        assert!(!mode.pwm_enabled);
        assert_eq!(mode.border_style, BorderStyle::Solid);
        assert!(!mode.green_led_on);
    }

    #[test]
    fn bounce_50ms_later_is_discarded() {
        let state = state();

        assert!(process_edge(&state, Button::Joystick, 1_000).is_some());
        assert_eq!(process_edge(&state, Button::Joystick, 1_050), None);

        let input = state.snapshot();
        assert!(input.mode.green_led_on);
        assert_eq!(input.debounce.last_accepted_ms(), 1_000);
    }

    #[test]
    fn press_on_one_button_suppresses_other_within_window() {
        // The gate is shared: a press on A right after the joystick button
        // is dropped even though it is a different switch.
        let state = state();

        assert!(process_edge(&state, Button::Joystick, 1_000).is_some());
        assert_eq!(process_edge(&state, Button::A, 1_100), None);
        assert!(state.snapshot().mode.pwm_enabled);

        assert!(process_edge(&state, Button::A, 1_201).is_some());
        assert!(!state.snapshot().mode.pwm_enabled);
    }

    #[test]
    fn burst_of_edges_yields_one_toggle_per_window() {
        let state = state();
        let accepted = (0..20u64)
            .filter(|i| process_edge(&state, Button::A, 1_000 + i * 50).is_some())
            .count();

        // 1000, 1250, 1500, 1750 over 1000..=1950
        assert_eq!(accepted, 4);
        assert!(state.snapshot().mode.pwm_enabled);
    }
}
