//! Application module - the UiRuntime composition root.
//!
//! - `state` - The UiRuntime struct definition
//! - `lifecycle` - Construction, the one-shot initialization sequence, and
//!   the timer poll loop

mod lifecycle;
mod state;

pub use lifecycle::PollOutcome;
pub use state::UiRuntime;
