//! Core traits decoupling the control logic from the runtime.
//!
//! ```text
//!   edge context (interrupt executor)      main loop (thread executor)
//!              │                                      │
//!              └──────────────┬───────────────────────┘
//!                             ▼
//!          SharedState<T>  +  TimeSource   (no feature gates)
//!                             │
//!           ┌─────────────────┴─────────────────┐
//!           ▼                                   ▼
//!   EmbassyState, EmbassyTime            MockState, MockTime
//!   #[cfg(feature = "embassy")]          (always available)
//! ```

pub mod sync;
pub mod time;

// Re-export traits and mock implementations (always available)
pub use sync::{MockState, SharedState};
pub use time::{MockTime, TimeSource};

// Re-export Embassy implementations when embassy feature is enabled
#[cfg(feature = "embassy")]
pub use sync::EmbassyState;

#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
