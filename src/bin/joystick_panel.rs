//! Joystick panel firmware
//!
//! Joystick deflection moves a cursor on the OLED and, while illumination is
//! on, lights the blue/red LEDs. The joystick button toggles the status LED
//! and the border style; button A toggles the LED illumination.
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --features pico2_w --bin joystick_panel
//! # or with logs on USB CDC instead of RTT
//! cargo build --release --features usb_serial --bin joystick_panel
//! ```

#![no_std]
#![no_main]

const BUILD_ID: &str = env!("BUILD_ID");

use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use hal::adc::{Adc, Channel as AdcChannel, Config as AdcConfig};
use hal::gpio::{Input, Level, Output, Pull};
use hal::i2c::{Config as I2cConfig, I2c};
use hal::pwm::Pwm;
use static_cell::StaticCell;

#[cfg(feature = "usb_serial")]
use embassy_rp::usb::{Driver, InterruptHandler};
#[cfg(feature = "usb_serial")]
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
#[cfg(feature = "usb_serial")]
use embassy_usb::{Builder, Config as UsbConfig};

#[cfg(feature = "usb_serial")]
use panic_halt as _;

#[cfg(not(feature = "usb_serial"))]
use {defmt_rtt as _, panic_probe as _};

use pico_joystick::app::{ControlLoop, DeviceContext};
use pico_joystick::config::display::{BORDER_POLICY, I2C_FREQUENCY_HZ};
use pico_joystick::config::input::DEBOUNCE_WINDOW_MS;
use pico_joystick::core::traits::EmbassyState;
use pico_joystick::platform::rp2350::tasks::{PanelContext, button_task, control_loop_task};
use pico_joystick::platform::rp2350::{
    Rp2350Adc, Rp2350Button, Rp2350Output, init_led_pwm, init_oled, led_pwm_config,
};
use pico_joystick::platform::traits::PwmConfig;
use pico_joystick::subsystems::illumination::IntensityOutputs;
use pico_joystick::subsystems::input::InputState;
use pico_joystick::subsystems::sampler::AnalogSampler;
use pico_joystick::{log_error, log_info};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Program metadata for `picotool info`
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"joystick_panel"),
    embassy_rp::binary_info::rp_program_description!(
        c"Joystick cursor on SSD1306 with PWM LEDs and debounced mode buttons"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(feature = "usb_serial")]
hal::bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<hal::peripherals::USB>;
});

/// Runs the button task above thread mode
static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EDGE_EXECUTOR.on_interrupt()
}

#[cfg(feature = "usb_serial")]
#[embassy_executor::task]
async fn usb_task(mut usb: embassy_usb::UsbDevice<'static, Driver<'static, hal::peripherals::USB>>) {
    usb.run().await;
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = hal::init(Default::default());

    #[cfg(feature = "usb_serial")]
    {
        let driver = Driver::new(p.USB, Irqs);

        let mut usb_config = UsbConfig::new(0x2e8a, 0x000a);
        usb_config.manufacturer = Some("Raspberry Pi");
        usb_config.product = Some("Joystick Panel");
        usb_config.serial_number = Some("12345678");
        usb_config.max_power = 100;
        usb_config.max_packet_size_0 = 64;

        static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
        static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
        static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
        static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
        static STATE: StaticCell<State> = StaticCell::new();

        let mut builder = Builder::new(
            driver,
            usb_config,
            CONFIG_DESCRIPTOR.init([0; 256]),
            BOS_DESCRIPTOR.init([0; 256]),
            MSOS_DESCRIPTOR.init([0; 256]),
            CONTROL_BUF.init([0; 64]),
        );

        let cdc_class = CdcAcmClass::new(
            &mut builder,
            STATE.init(State::new()),
            pico_joystick::core::logging::USB_PACKET_SIZE,
        );
        let usb = builder.build();

        spawner.spawn(usb_task(usb).unwrap());
        spawner.spawn(pico_joystick::core::logging::usb_logger_task(cdc_class).unwrap());
    }

    log_info!("Joystick panel [BUILD_ID: {}]", BUILD_ID);
    log_info!(
        "Debounce {} ms, border policy {:?}",
        DEBOUNCE_WINDOW_MS,
        BORDER_POLICY
    );

    // SSD1306 on I2C1: SDA GPIO 14, SCL GPIO 15
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let display = init_oled(i2c);

    // Joystick on ADC0 (GPIO 26) and ADC1 (GPIO 27)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let joy_x = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let joy_y = AdcChannel::new_pin(p.PIN_27, Pull::None);
    let sampler = AnalogSampler::new(Rp2350Adc::new(adc, [joy_x, joy_y]));

    // Blue (GPIO 12) and red (GPIO 13) share PWM slice 6
    let pwm_config = PwmConfig::default();
    let pwm = Pwm::new_output_ab(
        p.PWM_SLICE6,
        p.PIN_12,
        p.PIN_13,
        led_pwm_config(&pwm_config),
    );
    let (blue, red) = match init_led_pwm(pwm, pwm_config) {
        Ok(channels) => channels,
        Err(e) => {
            log_error!("LED PWM setup failed: {:?}", e);
            return;
        }
    };

    let joystick_button = Rp2350Button::new(Input::new(p.PIN_22, Pull::Up));
    let button_a = Rp2350Button::new(Input::new(p.PIN_5, Pull::Up));
    let status_led = Rp2350Output::new(Output::new(p.PIN_11, Level::Low));

    static CONTEXT: StaticCell<PanelContext> = StaticCell::new();
    let ctx: &'static PanelContext = CONTEXT.init(DeviceContext::new(
        EmbassyState::new(InputState::new()),
        EmbassyState::new(IntensityOutputs::new(blue, red)),
    ));

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI_IRQ_1);
    edge_spawner.spawn(button_task(joystick_button, button_a, status_led, ctx).unwrap());

    let control = ControlLoop::new(sampler, display);
    spawner.spawn(control_loop_task(control, ctx).unwrap());

    log_info!("Joystick panel running");
}
