//! RP2350 SSD1306 display
//!
//! The panel sits on I2C1 and is driven in buffered graphics mode: drawing
//! only touches the 1 KiB RAM buffer and [`FrameFlush::flush_frame`] sends
//! it over the bus.

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use crate::config::display::I2C_ADDRESS;
use crate::devices::oled::{FrameFlush, GraphicsDisplay};
use crate::log_warn;
use crate::platform::{
    Result,
    error::{DisplayError, PlatformError},
};

/// Buffered SSD1306 on I2C1
pub type Rp2350Oled = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

impl FrameFlush for Rp2350Oled {
    fn flush_frame(&mut self) -> Result<()> {
        self.flush()
            .map_err(|_| PlatformError::Display(DisplayError::FlushFailed))
    }
}

/// Bring up the panel
///
/// An init failure is logged rather than returned: the panel stays dark but
/// the LEDs and buttons keep working.
pub fn init_oled(i2c: I2c<'static, I2C1, Blocking>) -> GraphicsDisplay<Rp2350Oled> {
    let interface = I2CDisplayInterface::new_custom_address(i2c, I2C_ADDRESS);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    if oled.init().is_err() {
        log_warn!("SSD1306 init failed at 0x{:x}", I2C_ADDRESS);
    }

    GraphicsDisplay::new(oled)
}
