//! Main-loop tick
//!
//! One tick samples the joystick, updates the LED levels if illumination is
//! enabled and redraws the cursor. Peripheral failures are logged and the
//! tick carries on; there is nothing to retry that the next tick won't redo.

use core::future::Future;
use core::pin::pin;

use embassy_futures::select::{Either, select};

use crate::config::display::BORDER_POLICY;
use crate::core::traits::SharedState;
use crate::platform::traits::{AdcInterface, DisplayInterface, PwmInterface};
use crate::subsystems::cursor::{BorderPolicy, CursorPosition, render_frame};
use crate::subsystems::illumination::{DriveLevel, IntensityOutputs, map_intensity};
use crate::subsystems::input::InputState;
use crate::subsystems::sampler::{AnalogSample, AnalogSampler};
use crate::{log_debug, log_warn};

use super::context::DeviceContext;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub sample: AnalogSample,
    /// Levels written to the LEDs, `None` while illumination is off
    pub level: Option<DriveLevel>,
    pub cursor: CursorPosition,
}

/// Owner of the sampler and the display
pub struct ControlLoop<A, D> {
    sampler: AnalogSampler<A>,
    display: D,
    policy: BorderPolicy,
    cursor: CursorPosition,
    ticks: u32,
}

impl<A, D> ControlLoop<A, D>
where
    A: AdcInterface,
    D: DisplayInterface,
{
    pub fn new(sampler: AnalogSampler<A>, display: D) -> Self {
        Self::with_border_policy(sampler, display, BORDER_POLICY)
    }

    pub fn with_border_policy(sampler: AnalogSampler<A>, display: D, policy: BorderPolicy) -> Self {
        Self {
            sampler,
            display,
            policy,
            cursor: CursorPosition::CENTER,
            ticks: 0,
        }
    }

    /// Blank the panel before the first tick
    pub fn start(&mut self) {
        let result = self.display.clear().and_then(|()| self.display.flush());
        if let Err(e) = result {
            log_warn!("Display clear failed: {:?}", e);
        }
    }

    /// Run one tick against the shared state
    pub fn tick<M, O, P>(&mut self, ctx: &DeviceContext<M, O, P>) -> TickReport
    where
        M: SharedState<InputState>,
        O: SharedState<IntensityOutputs<P>>,
        P: PwmInterface,
    {
        let sample = match self.sampler.sample() {
            Ok(sample) => sample,
            Err(e) => {
                log_warn!("Joystick sample failed: {:?}", e);
                self.sampler.last()
            }
        };

        let mode = ctx.mode();

        let mut level = None;
        if let Some(target) = map_intensity(sample, mode.pwm_enabled) {
            match ctx.apply_levels(target) {
                Ok(true) => level = Some(target),
                Ok(false) => log_debug!("LED levels dropped, illumination switched off"),
                Err(e) => log_warn!("LED update failed: {:?}", e),
            }
        }

        let cursor = CursorPosition::from_sample(sample);
        self.cursor = cursor;
        let border = self.policy.tick_border(mode.border_style);
        if let Err(e) = render_frame(&mut self.display, cursor, border) {
            log_warn!("Display update failed: {:?}", e);
        }

        self.ticks = self.ticks.wrapping_add(1);
        TickReport {
            sample,
            level,
            cursor,
        }
    }

    /// Draw the border frame if the button handler asked for one
    ///
    /// Uses the cursor from the last tick; the joystick is not resampled.
    /// Returns whether a redraw was pending.
    pub fn service_redraw<M, O, P>(&mut self, ctx: &DeviceContext<M, O, P>) -> bool
    where
        M: SharedState<InputState>,
        O: SharedState<IntensityOutputs<P>>,
        P: PwmInterface,
    {
        if !ctx.redraw.take() {
            return false;
        }

        let style = ctx.mode().border_style;
        if let Err(e) = render_frame(&mut self.display, self.cursor, Some(style)) {
            log_warn!("Border redraw failed: {:?}", e);
        }
        true
    }

    /// Sleep until `deadline` completes, servicing redraws as they are signalled
    ///
    /// `redraw_wake` is called for a fresh wake-up future after each one
    /// fires. The same `deadline` future is polled throughout, so redraws
    /// never push the next tick back. Returns the number of redraws drawn.
    pub async fn idle_until<M, O, P, T, W>(
        &mut self,
        ctx: &DeviceContext<M, O, P>,
        deadline: T,
        mut redraw_wake: impl FnMut() -> W,
    ) -> u32
    where
        M: SharedState<InputState>,
        O: SharedState<IntensityOutputs<P>>,
        P: PwmInterface,
        T: Future<Output = ()>,
        W: Future<Output = ()>,
    {
        let mut deadline = pin!(deadline);
        let mut redraws = 0;
        loop {
            match select(deadline.as_mut(), redraw_wake()).await {
                Either::First(()) => return redraws,
                Either::Second(()) => {
                    if self.service_redraw(ctx) {
                        redraws += 1;
                    }
                }
            }
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn sampler_mut(&mut self) -> &mut AnalogSampler<A> {
        &mut self.sampler
    }
}
