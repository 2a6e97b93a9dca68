//! Time abstraction for the debounce gate and the tick loop.
//!
//! The button handler stamps every edge with [`TimeSource::now_ms`]; on the
//! target that is the embassy time driver, on the host it is [`MockTime`],
//! which tests advance by hand.

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since boot.
    fn now_ms(&self) -> u64;
}

// ============================================================================
// Embassy Implementation
// ============================================================================

/// Time source backed by the embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

#[cfg(feature = "embassy")]
impl TimeSource for EmbassyTime {
    fn now_ms(&self) -> u64 {
        embassy_time::Instant::now().as_millis()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with manual advancement.
///
/// # Example
///
/// ```
/// use pico_joystick::core::traits::time::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_ms(250);
/// assert_eq!(time.now_ms(), 250);
/// ```
#[derive(Clone, Default)]
pub struct MockTime {
    current_ms: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` starting at boot (time 0).
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at `ms` milliseconds after boot.
    pub fn starting_at_ms(ms: u64) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Advances the current time by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get() + ms);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}
