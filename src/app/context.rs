//! State shared between the button handler and the main loop

use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "embassy")]
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

use crate::core::traits::SharedState;
use crate::platform::traits::{GpioInterface, PwmInterface};
use crate::subsystems::illumination::{DriveLevel, IntensityOutputs};
use crate::subsystems::input::{Button, InputState, ModeChange, ModeState, process_edge};
use crate::{log_debug, log_info, log_warn};

/// Pending border redraw, raised by the button handler
///
/// The display has a single owner, the main loop. The handler only raises
/// this flag; the main loop picks it up with [`take`](Self::take) and draws
/// the border itself. On embassy targets raising it also wakes the main loop
/// out of its tick sleep.
pub struct RedrawRequest {
    pending: AtomicBool,
    #[cfg(feature = "embassy")]
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl RedrawRequest {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            #[cfg(feature = "embassy")]
            signal: Signal::new(),
        }
    }

    /// Ask the main loop for a border redraw
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
        #[cfg(feature = "embassy")]
        self.signal.signal(());
    }

    /// Clear and return the pending flag
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Wait until a redraw has been requested
    ///
    /// May also return for a request that was already taken; check with
    /// [`take`](Self::take).
    #[cfg(feature = "embassy")]
    pub async fn wait(&self) {
        self.signal.wait().await
    }
}

impl Default for RedrawRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything reachable from both the button handler and the main loop
///
/// - `input`: modes and debounce gate, written only by [`handle_edge`](Self::handle_edge)
/// - `outputs`: blue/red PWM, written by the main loop every tick and by the
///   handler when illumination is switched off
/// - `redraw`: border redraw hand-off to the display owner
pub struct DeviceContext<M, O, P> {
    pub input: M,
    pub outputs: O,
    pub redraw: RedrawRequest,
    _pwm: PhantomData<fn() -> P>,
}

impl<M, O, P> DeviceContext<M, O, P>
where
    M: SharedState<InputState>,
    O: SharedState<IntensityOutputs<P>>,
    P: PwmInterface,
{
    pub fn new(input: M, outputs: O) -> Self {
        Self {
            input,
            outputs,
            redraw: RedrawRequest::new(),
            _pwm: PhantomData,
        }
    }

    /// Current modes, read in one access
    pub fn mode(&self) -> ModeState {
        self.input.snapshot().mode
    }

    /// Handle a falling edge from `button` at `now_ms`
    ///
    /// Runs the debounce gate and toggle under the input lock, then performs
    /// the side effects with that lock released:
    ///
    /// - joystick button: drive the status LED and request a border redraw
    /// - button A switched off: zero both LED channels immediately
    ///
    /// Returns the accepted change, or `None` if the edge was debounced away.
    pub fn handle_edge<L: GpioInterface>(
        &self,
        button: Button,
        now_ms: u64,
        status_led: &mut L,
    ) -> Option<ModeChange> {
        let Some(change) = process_edge(&self.input, button, now_ms) else {
            log_debug!("Edge on GPIO {} ignored (debounce)", button.gpio());
            return None;
        };

        match change {
            ModeChange::Display {
                border_style,
                green_led_on,
            } => {
                if let Err(e) = status_led.set_state(green_led_on) {
                    log_warn!("Status LED write failed: {:?}", e);
                }
                log_info!("Green LED: {}", if green_led_on { "on" } else { "off" });
                log_debug!("Border style: {:?}", border_style);
                self.redraw.request();
            }
            ModeChange::Illumination { pwm_enabled } => {
                log_info!("PWM LEDs: {}", if pwm_enabled { "enabled" } else { "disabled" });
                if !pwm_enabled {
                    if let Err(e) = self.outputs.with_mut(|outputs| outputs.force_off()) {
                        log_warn!("Failed to switch LEDs off: {:?}", e);
                    }
                }
            }
        }

        Some(change)
    }

    /// Apply tick levels, unless illumination was switched off meanwhile
    ///
    /// The enable flag is re-read while the outputs are held, so a level
    /// computed before the button handler disabled illumination can never
    /// overwrite the zeroed outputs. Returns whether the levels were written.
    pub fn apply_levels(&self, level: DriveLevel) -> crate::platform::Result<bool> {
        self.outputs.with_mut(|outputs| {
            if !self.input.with(|input| input.mode.pwm_enabled) {
                return Ok(false);
            }
            outputs.apply(level).map(|()| true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockState;
    use crate::platform::mock::{MockGpio, MockPwm};
    use crate::subsystems::input::BorderStyle;

    type TestContext = DeviceContext<MockState<InputState>, MockState<IntensityOutputs<MockPwm>>, MockPwm>;

    fn context() -> TestContext {
        DeviceContext::new(
            MockState::new(InputState::new()),
            MockState::new(IntensityOutputs::new(MockPwm::default(), MockPwm::default())),
        )
    }

    #[test]
    fn redraw_request_is_taken_once() {
        let redraw = RedrawRequest::new();
        assert!(!redraw.take());

        redraw.request();
        redraw.request();
        assert!(redraw.is_pending());
        assert!(redraw.take());
        assert!(!redraw.take());
    }

    #[test]
    fn joystick_edge_drives_led_and_requests_redraw() {
        let ctx = context();
        let mut led = MockGpio::new_output();

        let change = ctx.handle_edge(Button::Joystick, 1_000, &mut led);

        assert_eq!(
            change,
            Some(ModeChange::Display {
                border_style: BorderStyle::ZigZag,
                green_led_on: true
            })
        );
        assert!(led.is_set_high());
        assert!(ctx.redraw.is_pending());
    }

    #[test]
    fn failed_status_led_write_still_requests_redraw() {
        let ctx = context();
        let mut led = MockGpio::new_output();
        led.set_fail_writes(true);

        assert!(ctx.handle_edge(Button::Joystick, 1_000, &mut led).is_some());
        assert!(ctx.mode().green_led_on);
        assert!(!led.is_set_high());
        assert!(ctx.redraw.is_pending());
    }

    #[test]
    fn debounced_edge_has_no_side_effects() {
        let ctx = context();
        let mut led = MockGpio::new_output();

        ctx.handle_edge(Button::Joystick, 1_000, &mut led);
        ctx.redraw.take();

        assert_eq!(ctx.handle_edge(Button::Joystick, 1_050, &mut led), None);
        assert!(led.is_set_high());
        assert_eq!(led.write_count(), 1);
        assert!(!ctx.redraw.is_pending());
    }

    #[test]
    fn disabling_illumination_zeroes_outputs_immediately() {
        let ctx = context();
        let mut led = MockGpio::new_output();
        ctx.apply_levels(DriveLevel { blue: 4000, red: 2500 }).unwrap();

        ctx.handle_edge(Button::A, 1_000, &mut led);

        ctx.outputs.with(|outputs| {
            assert_eq!(outputs.blue().level(), 0);
            assert_eq!(outputs.red().level(), 0);
        });
        assert!(!ctx.mode().pwm_enabled);
        // Status LED untouched by button A
        assert_eq!(led.write_count(), 0);
    }

    #[test]
    fn enabling_illumination_leaves_outputs_for_next_tick() {
        let ctx = context();
        let mut led = MockGpio::new_output();

        ctx.handle_edge(Button::A, 1_000, &mut led);
        let writes = ctx.outputs.with(|o| o.blue().write_count());
        ctx.handle_edge(Button::A, 1_300, &mut led);

        assert!(ctx.mode().pwm_enabled);
        assert_eq!(ctx.outputs.with(|o| o.blue().write_count()), writes);
    }

    #[test]
    fn stale_levels_are_dropped_after_disable() {
        let ctx = context();
        let mut led = MockGpio::new_output();

        // Main loop computed levels, then the handler preempts it
        let level = DriveLevel { blue: 4093, red: 0 };
        ctx.handle_edge(Button::A, 1_000, &mut led);

        assert_eq!(ctx.apply_levels(level), Ok(false));
        assert_eq!(ctx.outputs.with(|o| o.applied()), DriveLevel::OFF);
    }
}
