//! RP2350 GPIO implementation

use embassy_rp::gpio::{Input, Output};

use crate::platform::{
    Result,
    traits::{EdgeInput, GpioInterface},
};

/// Push-pull output (status LED)
pub struct Rp2350Output {
    pin: Output<'static>,
}

impl Rp2350Output {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Output {
    fn set_state(&mut self, high: bool) -> Result<()> {
        if high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Active-low button on a pulled-up input
pub struct Rp2350Button {
    input: Input<'static>,
}

impl Rp2350Button {
    pub fn new(input: Input<'static>) -> Self {
        Self { input }
    }
}

impl EdgeInput for Rp2350Button {
    async fn wait_for_falling_edge(&mut self) {
        self.input.wait_for_falling_edge().await
    }
}
