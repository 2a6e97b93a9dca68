//! Panel application
//!
//! Ties the subsystems together across the two execution contexts:
//!
//! - [`DeviceContext`] holds the state both contexts share and implements
//!   the edge handler the button task calls.
//! - [`ControlLoop`] owns the sampler and the display and runs one main-loop
//!   tick at a time.
//!
//! Both are plain structs so the whole flow runs on the host against mocks;
//! the embassy tasks in `platform::rp2350::tasks` only add the waiting.

pub mod context;
pub mod control_loop;

pub use context::{DeviceContext, RedrawRequest};
pub use control_loop::{ControlLoop, TickReport};
