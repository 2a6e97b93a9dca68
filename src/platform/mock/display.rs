//! Mock display implementation for testing

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::config::display::{HEIGHT, WIDTH};
use crate::devices::oled::{FrameFlush, GraphicsDisplay};
use crate::platform::{
    Result,
    error::{DisplayError, PlatformError},
};

const W: usize = WIDTH as usize;
const H: usize = HEIGHT as usize;

/// RAM stand-in for a 128x64 monochrome panel
///
/// Drawing goes to the frame buffer; [`FrameFlush::flush_frame`] copies it to
/// a second buffer representing what the panel shows.
#[derive(Debug, Clone)]
pub struct MockFrameBuffer {
    frame: [[bool; W]; H],
    panel: [[bool; W]; H],
    flushes: usize,
    fail_flush: bool,
}

/// Display adapter over the mock frame buffer
pub type MockDisplay = GraphicsDisplay<MockFrameBuffer>;

impl MockFrameBuffer {
    pub fn new() -> Self {
        Self {
            frame: [[false; W]; H],
            panel: [[false; W]; H],
            flushes: 0,
            fail_flush: false,
        }
    }

    /// Frame buffer pixel; out-of-range coordinates read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::get(&self.frame, x, y)
    }

    /// Pixel as last flushed to the panel
    pub fn panel_pixel(&self, x: i32, y: i32) -> bool {
        Self::get(&self.panel, x, y)
    }

    /// Number of lit pixels in the frame buffer
    pub fn lit_pixels(&self) -> usize {
        self.frame.iter().flatten().filter(|&&on| on).count()
    }

    /// Number of lit pixels on the panel
    pub fn lit_panel_pixels(&self) -> usize {
        self.panel.iter().flatten().filter(|&&on| on).count()
    }

    /// Number of successful flushes
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Make subsequent flushes fail with `FlushFailed`
    pub fn set_fail_flush(&mut self, fail: bool) {
        self.fail_flush = fail;
    }

    fn get(buffer: &[[bool; W]; H], x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        buffer
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }
}

impl Default for MockFrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for MockFrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for MockFrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x < W && y < H {
                self.frame[y][x] = color.is_on();
            }
        }
        Ok(())
    }
}

impl FrameFlush for MockFrameBuffer {
    fn flush_frame(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(PlatformError::Display(DisplayError::FlushFailed));
        }
        self.panel = self.frame;
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_frame_buffer_starts_dark() {
        let fb = MockFrameBuffer::new();
        assert_eq!(fb.lit_pixels(), 0);
        assert_eq!(fb.lit_panel_pixels(), 0);
        assert_eq!(fb.flush_count(), 0);
    }

    #[test]
    fn test_mock_frame_buffer_ignores_off_panel_pixels() {
        let mut fb = MockFrameBuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(128, 10), BinaryColor::On),
            Pixel(Point::new(3, 4), BinaryColor::On),
        ])
        .unwrap();

        assert_eq!(fb.lit_pixels(), 1);
        assert!(fb.pixel(3, 4));
        assert!(!fb.pixel(-1, 0));
    }

    #[test]
    fn test_mock_frame_buffer_failed_flush_keeps_panel() {
        let mut fb = MockFrameBuffer::new();
        fb.draw_iter([Pixel(Point::new(0, 0), BinaryColor::On)]).unwrap();
        fb.set_fail_flush(true);

        assert_eq!(
            fb.flush_frame(),
            Err(PlatformError::Display(DisplayError::FlushFailed))
        );
        assert!(!fb.panel_pixel(0, 0));
        assert_eq!(fb.flush_count(), 0);
    }
}
