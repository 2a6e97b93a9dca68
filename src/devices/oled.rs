//! Monochrome OLED driver on top of embedded-graphics
//!
//! [`GraphicsDisplay`] turns any `DrawTarget<Color = BinaryColor>` that can
//! also push its frame buffer to a panel into a [`DisplayInterface`]. The
//! buffered SSD1306 driver satisfies both on the target; the host mock frame
//! buffer does in tests.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};

use crate::platform::{
    Result,
    error::{DisplayError, PlatformError},
    traits::DisplayInterface,
};

const FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::On);
const STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// A frame buffer that can be transferred to a physical panel
pub trait FrameFlush {
    /// Send the whole frame buffer to the panel
    fn flush_frame(&mut self) -> Result<()>;
}

/// [`DisplayInterface`] over an embedded-graphics draw target
pub struct GraphicsDisplay<D> {
    target: D,
}

impl<D> GraphicsDisplay<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the underlying draw target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

fn draw_failed<E>(_: E) -> PlatformError {
    PlatformError::Display(DisplayError::DrawFailed)
}

impl<D> DisplayInterface for GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor> + FrameFlush,
{
    fn width(&self) -> u32 {
        self.target.bounding_box().size.width
    }

    fn height(&self) -> u32 {
        self.target.bounding_box().size.height
    }

    fn clear(&mut self) -> Result<()> {
        self.target.clear(BinaryColor::Off).map_err(draw_failed)
    }

    fn draw_filled_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(FILL)
            .draw(&mut self.target)
            .map_err(draw_failed)
    }

    fn draw_outline_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(STROKE)
            .draw(&mut self.target)
            .map_err(draw_failed)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(STROKE)
            .draw(&mut self.target)
            .map_err(draw_failed)
    }

    fn flush(&mut self) -> Result<()> {
        self.target.flush_frame()
    }
}
