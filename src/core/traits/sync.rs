//! Synchronized state abstraction for state shared across execution contexts.
//!
//! The button handler runs on an interrupt-priority executor and may preempt
//! the main loop at any instruction. Everything both contexts touch goes
//! through [`SharedState`], so the synchronization mechanism can be swapped
//! between a critical-section mutex (target) and a `RefCell` (host tests).

/// Platform-agnostic synchronized state access.
///
/// Implementations:
/// - `EmbassyState<T>` for embedded targets (critical-section mutex)
/// - `MockState<T>` for host testing (single-threaded `RefCell`)
///
/// Closures passed to `with`/`with_mut` must stay short: they run with
/// interrupts masked on the target. Do not perform bus I/O inside them unless
/// the state *is* the peripheral and the write is a register store.
///
/// # Example
///
/// ```ignore
/// fn toggle_led<S: SharedState<ModeState>>(state: &S) -> bool {
///     state.with_mut(|mode| {
///         mode.green_led_on = !mode.green_led_on;
///         mode.green_led_on
///     })
/// }
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;

    /// Copy the whole state out in one access, so a reader never observes a
    /// half-applied update.
    fn snapshot(&self) -> T
    where
        T: Copy,
    {
        self.with(|value| *value)
    }
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Embassy-based synchronized state using a critical-section mutex.
///
/// Taking the lock masks interrupts, so the interrupt executor can never
/// observe (or produce) a torn update, and the lock can never be contended:
/// whoever holds it cannot be preempted.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    /// Creates a new `EmbassyState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active on the same state). This indicates a bug in the caller.
///
/// # Example
///
/// ```
/// use pico_joystick::core::traits::sync::{MockState, SharedState};
///
/// let state = MockState::new(false);
/// state.with_mut(|on| *on = !*on);
/// assert!(state.snapshot());
/// ```
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Flags {
        pwm_enabled: bool,
        green_led_on: bool,
    }

    #[test]
    fn mock_state_with_read() {
        let state = MockState::new(42u32);
        assert_eq!(state.with(|v| *v), 42);
    }

    #[test]
    fn mock_state_with_mut_returns_closure_value() {
        let state = MockState::new(Flags {
            pwm_enabled: true,
            green_led_on: false,
        });

        let now_on = state.with_mut(|f| {
            f.green_led_on = !f.green_led_on;
            f.green_led_on
        });

        assert!(now_on);
        assert!(state.with(|f| f.green_led_on));
        assert!(state.with(|f| f.pwm_enabled));
    }

    #[test]
    fn snapshot_copies_all_fields_at_once() {
        let state = MockState::new(Flags {
            pwm_enabled: true,
            green_led_on: false,
        });

        let before = state.snapshot();
        state.with_mut(|f| {
            f.pwm_enabled = false;
            f.green_led_on = true;
        });

        // The earlier snapshot is unaffected by the later write
        assert!(before.pwm_enabled);
        assert!(!before.green_led_on);
        assert_eq!(
            state.snapshot(),
            Flags {
                pwm_enabled: false,
                green_led_on: true
            }
        );
    }

    #[test]
    fn nested_access_to_distinct_states_is_allowed() {
        let mode = MockState::new(true);
        let level = MockState::new(0u16);

        level.with_mut(|l| {
            if mode.with(|enabled| *enabled) {
                *l = 4095;
            }
        });

        assert_eq!(level.snapshot(), 4095);
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn mock_state_double_borrow_panics() {
        let state = MockState::new(0u32);

        state.with(|_v| {
            let _ = state.inner.borrow_mut();
        });
    }
}
