//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (pico2_w + usb_serial feature): Uses USB Serial
//! - Embedded (pico2_w): Uses defmt over RTT
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Format strings must be valid for both `core::fmt` and defmt, so stick to
//! `{}` and `{:?}` placeholders.
//!
//! ## USB Serial Logging
//!
//! When the `usb_serial` feature is enabled, log lines are formatted into a
//! fixed-size buffer and queued for [`usb_logger_task`]. Messages are dropped
//! (never blocked on) when the queue is full, so logging from the button
//! handler cannot stall it.

#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
use embassy_sync::channel::Channel;

/// Log message buffer size
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
const LOG_MSG_SIZE: usize = 128;

/// Log channel capacity
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
const LOG_CHANNEL_SIZE: usize = 16;

/// Full-speed CDC bulk endpoint packet size
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
pub const USB_PACKET_SIZE: u16 = 64;

/// Log message type
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: heapless::String<LOG_MSG_SIZE>,
}

/// Log level
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    Trace,
}

#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Error => "[ERROR]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

/// Global log channel
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
static LOG_CHANNEL: Channel<CriticalSectionRawMutex, LogMessage, LOG_CHANNEL_SIZE> = Channel::new();

// Embassy crates still emit defmt frames with usb_serial enabled. This sink
// satisfies the linker and discards them; our own log_*! output goes to USB.
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
#[defmt::global_logger]
struct DiscardDefmt;

#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
unsafe impl defmt::Logger for DiscardDefmt {
    fn acquire() {}

    unsafe fn flush() {}

    unsafe fn release() {}

    unsafe fn write(_bytes: &[u8]) {}
}

/// Format a log line and queue it for the USB logger task
///
/// Lines longer than the message buffer are truncated.
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
pub fn send_log(level: LogLevel, args: core::fmt::Arguments<'_>) {
    let mut message = heapless::String::new();
    let _ = core::fmt::write(&mut message, args);

    // Drop the line if the channel is full
    let _ = LOG_CHANNEL.try_send(LogMessage { level, message });
}

/// USB Serial logger task
///
/// Drains the log channel and writes each line to the CDC-ACM class,
/// split into endpoint-sized packets.
///
/// # Example
///
/// ```ignore
/// let class = CdcAcmClass::new(&mut builder, state, USB_PACKET_SIZE);
/// spawner.spawn(usb_logger_task(class).unwrap());
/// ```
#[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
#[embassy_executor::task]
pub async fn usb_logger_task(
    mut usb_class: embassy_usb::class::cdc_acm::CdcAcmClass<
        'static,
        embassy_rp::usb::Driver<'static, embassy_rp::peripherals::USB>,
    >,
) {
    loop {
        usb_class.wait_connection().await;

        loop {
            let log_msg = LOG_CHANNEL.receive().await;

            let mut line = heapless::String::<{ LOG_MSG_SIZE + 16 }>::new();
            let _ = core::fmt::write(
                &mut line,
                format_args!("{} {}\r\n", log_msg.level.tag(), log_msg.message),
            );

            let mut disconnected = false;
            for chunk in line.as_bytes().chunks(USB_PACKET_SIZE as usize) {
                if usb_class.write_packet(chunk).await.is_err() {
                    disconnected = true;
                    break;
                }
            }
            if disconnected {
                break;
            }
        }
    }
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Info,
            format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico2_w", not(feature = "usb_serial")))]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Warn,
            format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico2_w", not(feature = "usb_serial")))]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Error,
            format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico2_w", not(feature = "usb_serial")))]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Debug,
            format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico2_w", not(feature = "usb_serial")))]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico2_w", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Trace,
            format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico2_w", not(feature = "usb_serial")))]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "pico2_w"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_arguments() {
        let level = 4093u16;
        let enabled = true;
        crate::log_info!("PWM LEDs: {}", if enabled { "on" } else { "off" });
        crate::log_warn!("level {} clamped", level);
        crate::log_error!("display flush failed: {:?}", "FlushFailed");
        crate::log_debug!("tick {}", 1u32);
        crate::log_trace!("edge discarded");
    }
}
