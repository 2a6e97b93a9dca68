//! Embassy tasks running the panel
//!
//! - [`control_loop_task`] runs on the thread-mode executor and owns the
//!   ADC and the display.
//! - [`button_task`] runs on an interrupt executor, so an edge is handled
//!   even while the control loop is in the middle of a tick.

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};

use crate::app::{ControlLoop, DeviceContext};
use crate::config::timing::TICK_PERIOD_MS;
use crate::core::traits::{EmbassyState, EmbassyTime, TimeSource};
use crate::devices::oled::GraphicsDisplay;
use crate::log_info;
use crate::platform::traits::EdgeInput;
use crate::subsystems::illumination::IntensityOutputs;
use crate::subsystems::input::{Button, InputState};

use super::{Rp2350Adc, Rp2350Button, Rp2350Oled, Rp2350Output, Rp2350PwmChannel};

/// Shared state as laid out on the board
pub type PanelContext = DeviceContext<
    EmbassyState<InputState>,
    EmbassyState<IntensityOutputs<Rp2350PwmChannel>>,
    Rp2350PwmChannel,
>;

/// Main loop as laid out on the board
pub type PanelControlLoop = ControlLoop<Rp2350Adc, GraphicsDisplay<Rp2350Oled>>;

/// Main loop: tick, then sleep for the tick period
///
/// The sleep is cut short to service a border redraw as soon as the button
/// task requests one; the tick deadline itself does not move.
#[embassy_executor::task]
pub async fn control_loop_task(mut control: PanelControlLoop, ctx: &'static PanelContext) -> ! {
    log_info!("Control loop started ({} ms tick)", TICK_PERIOD_MS);
    control.start();

    let period = Duration::from_millis(TICK_PERIOD_MS);
    loop {
        control.tick(ctx);

        let deadline = Timer::at(Instant::now() + period);
        control.idle_until(ctx, deadline, move || ctx.redraw.wait()).await;
    }
}

/// Button handler: waits for a falling edge on either button
#[embassy_executor::task]
pub async fn button_task(
    mut joystick: Rp2350Button,
    mut button_a: Rp2350Button,
    mut status_led: Rp2350Output,
    ctx: &'static PanelContext,
) -> ! {
    let time = EmbassyTime;
    log_info!(
        "Buttons armed on GPIO {} and GPIO {}",
        Button::Joystick.gpio(),
        Button::A.gpio()
    );

    loop {
        let button = match select(
            joystick.wait_for_falling_edge(),
            button_a.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => Button::Joystick,
            Either::Second(()) => Button::A,
        };

        ctx.handle_edge(button, time.now_ms(), &mut status_led);
    }
}
