//! Combo definition and matching.
//!
//! This module provides:
//! - [`KeyPress`]: one timed symbol constraint within a sequence
//! - [`ComboEngine`]: the registry plus the tick-driven matching state machine
//! - [`ListenerId`]: handle for removing a registered combo listener

mod engine;
mod keypress;

pub use engine::{ComboEngine, ListenerId};
pub use keypress::KeyPress;
