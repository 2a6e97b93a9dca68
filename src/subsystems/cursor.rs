//! Cursor mapping and frame rendering
//!
//! The joystick positions an 8x8 square on the 128x64 panel. The axes are
//! swapped and Y is inverted so the cursor follows the stick as mounted on
//! the board: the Y axis moves it horizontally, the X axis vertically.
//!
//! Positions are not clamped. Full deflection puts part (or all) of the
//! square off-panel and the display adapter clips it.

use crate::config::display::{
    CURSOR_DIVISOR, CURSOR_SIZE, HALF_HEIGHT, HALF_WIDTH, HEIGHT, WIDTH, ZIGZAG_STEP,
};
use crate::config::joystick::CENTER;
use crate::platform::{Result, traits::DisplayInterface};
use crate::subsystems::input::BorderStyle;

use super::sampler::AnalogSample;

/// Top-left corner of the cursor square in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl CursorPosition {
    /// Position for a centered stick
    pub const CENTER: Self = Self {
        x: HALF_WIDTH,
        y: HALF_HEIGHT,
    };

    /// Map a sample to panel coordinates (division truncates toward zero)
    pub fn from_sample(sample: AnalogSample) -> Self {
        let joy_x = i32::from(sample.joy_x);
        let joy_y = i32::from(sample.joy_y);
        Self {
            x: (joy_y - CENTER) / CURSOR_DIVISOR + HALF_WIDTH,
            y: (CENTER - joy_x) / CURSOR_DIVISOR + HALF_HEIGHT,
        }
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// How long a border drawn by the joystick button stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderPolicy {
    /// Only the button redraw shows the border; the next tick's frame
    /// clears it again, so it flashes briefly.
    Transient,
    /// Every tick frame repeats the current border style.
    Persistent,
}

impl BorderPolicy {
    /// Border to include in a regular tick frame
    pub fn tick_border(self, style: BorderStyle) -> Option<BorderStyle> {
        match self {
            BorderPolicy::Transient => None,
            BorderPolicy::Persistent => Some(style),
        }
    }
}

/// Draw `style` into the frame buffer (no flush)
pub fn draw_border<D: DisplayInterface>(display: &mut D, style: BorderStyle) -> Result<()> {
    match style {
        BorderStyle::Solid => display.draw_outline_rect(0, 0, WIDTH, HEIGHT),
        BorderStyle::ZigZag => {
            let width = WIDTH as i32;
            let height = HEIGHT as i32;
            for i in (0..width).step_by(ZIGZAG_STEP) {
                display.draw_line(i, 0, width - i, height)?;
            }
            Ok(())
        }
    }
}

/// Redraw the whole panel: clear, optional border, cursor square, flush
pub fn render_frame<D: DisplayInterface>(
    display: &mut D,
    cursor: CursorPosition,
    border: Option<BorderStyle>,
) -> Result<()> {
    display.clear()?;
    if let Some(style) = border {
        draw_border(display, style)?;
    }
    display.draw_filled_rect(cursor.x, cursor.y, CURSOR_SIZE, CURSOR_SIZE)?;
    display.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockDisplay, MockFrameBuffer};

    fn display() -> MockDisplay {
        MockDisplay::new(MockFrameBuffer::new())
    }

    #[test]
    fn centered_stick_maps_to_panel_center() {
        assert_eq!(
            CursorPosition::from_sample(AnalogSample::CENTERED),
            CursorPosition { x: 64, y: 32 }
        );
    }

    #[test]
    fn full_x_deflection_moves_cursor_up_off_panel() {
        let cursor = CursorPosition::from_sample(AnalogSample::new(4095, 2048));
        // (2048 - 4095) / 16 truncates to -127
        assert_eq!(cursor, CursorPosition { x: 64, y: -95 });
    }

    #[test]
    fn axes_are_swapped_and_x_inverted() {
        let cursor = CursorPosition::from_sample(AnalogSample::new(0, 4095));
        assert_eq!(cursor, CursorPosition { x: 191, y: 160 });

        let cursor = CursorPosition::from_sample(AnalogSample::new(2048, 0));
        assert_eq!(cursor, CursorPosition { x: -64, y: 32 });
    }

    #[test]
    fn small_deflections_truncate_toward_zero() {
        // -15 / 16 == 0 and 15 / 16 == 0
        let cursor = CursorPosition::from_sample(AnalogSample::new(2063, 2033));
        assert_eq!(cursor, CursorPosition::CENTER);
    }

    #[test]
    fn transient_policy_omits_border_on_ticks() {
        assert_eq!(BorderPolicy::Transient.tick_border(BorderStyle::ZigZag), None);
        assert_eq!(
            BorderPolicy::Persistent.tick_border(BorderStyle::ZigZag),
            Some(BorderStyle::ZigZag)
        );
    }

    #[test]
    fn tick_frame_is_only_the_cursor() {
        let mut display = display();
        render_frame(&mut display, CursorPosition::CENTER, None).unwrap();

        let fb = display.target();
        assert_eq!(fb.lit_panel_pixels(), 64);
        assert!(fb.panel_pixel(64, 32));
        assert!(fb.panel_pixel(71, 39));
        assert_eq!(fb.flush_count(), 1);
    }

    #[test]
    fn frame_replaces_previous_contents() {
        let mut display = display();
        render_frame(&mut display, CursorPosition { x: 0, y: 0 }, Some(BorderStyle::Solid))
            .unwrap();
        render_frame(&mut display, CursorPosition::CENTER, None).unwrap();

        let fb = display.target();
        assert!(!fb.panel_pixel(0, 0));
        assert!(!fb.panel_pixel(127, 63));
        assert_eq!(fb.lit_panel_pixels(), 64);
    }

    #[test]
    fn solid_border_outlines_panel() {
        let mut display = display();
        render_frame(&mut display, CursorPosition::CENTER, Some(BorderStyle::Solid)).unwrap();

        let fb = display.target();
        assert!(fb.panel_pixel(0, 0));
        assert!(fb.panel_pixel(127, 0));
        assert!(fb.panel_pixel(0, 63));
        assert!(fb.panel_pixel(127, 63));
        assert!(!fb.panel_pixel(1, 1));
        assert!(fb.panel_pixel(64, 32));
    }

    #[test]
    fn zigzag_border_starts_lines_every_16_pixels() {
        let mut display = display();
        render_frame(&mut display, CursorPosition::CENTER, Some(BorderStyle::ZigZag)).unwrap();

        let fb = display.target();
        for x in (0..128).step_by(16) {
            assert!(fb.panel_pixel(x, 0), "line from x={x}");
        }
        assert!(!fb.panel_pixel(8, 0));
        // No outline
        assert!(!fb.panel_pixel(0, 63));
    }

    #[test]
    fn off_panel_cursor_still_flushes() {
        let mut display = display();
        let cursor = CursorPosition::from_sample(AnalogSample::new(4095, 2048));
        render_frame(&mut display, cursor, None).unwrap();

        assert_eq!(display.target().lit_panel_pixels(), 0);
        assert_eq!(display.target().flush_count(), 1);
    }
}
