//! Push-button input
//!
//! Two active-low buttons toggle the panel's modes. Every falling edge goes
//! through a single debounce gate shared by both buttons, and accepted edges
//! flip flags in [`ModeState`]. The edge context is the only writer of
//! [`InputState`]; the main loop only ever reads a snapshot of it.

pub mod edge;
pub mod mode;

pub use edge::{Button, ModeChange, process_edge};
pub use mode::{BorderStyle, DebounceTimer, InputState, ModeState};
