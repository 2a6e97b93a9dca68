//! Display interface trait
//!
//! This module defines the drawing primitives the renderer needs from a
//! 128x64 monochrome panel with a RAM frame buffer.

use crate::platform::Result;

/// Monochrome frame-buffered display
///
/// All primitives draw "on" pixels into the frame buffer; nothing reaches the
/// panel until [`flush`](DisplayInterface::flush). Coordinates outside the
/// panel are clipped by the implementation and are never an error.
pub trait DisplayInterface {
    /// Panel width in pixels
    fn width(&self) -> u32;

    /// Panel height in pixels
    fn height(&self) -> u32;

    /// Turn every pixel of the frame buffer off
    fn clear(&mut self) -> Result<()>;

    /// Fill a `w` x `h` rectangle with its top-left corner at `(x, y)`
    fn draw_filled_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw the one-pixel outline of a `w` x `h` rectangle at `(x, y)`
    fn draw_outline_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw a one-pixel line from `(x0, y0)` to `(x1, y1)`
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()>;

    /// Transfer the frame buffer to the panel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Display(DisplayError::FlushFailed)` if the bus
    /// transfer fails.
    fn flush(&mut self) -> Result<()>;
}
