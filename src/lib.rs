//! Per-title mouse hooks for an Xbox 360 emulation host.
//!
//! Each supported title family implements [`HookableGame`]. The host feeds
//! every input poll to a [`Hookables`] registry, which finds the title that is
//! currently running and lets it write mouse motion straight into the
//! emulated game's camera variables.
pub mod shared;

mod hookable;
pub use hookable::{HookableGame, Hookables};

#[cfg(feature = "gears")]
pub mod gears;
