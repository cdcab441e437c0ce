//! Input sensing for the combo engine.
//!
//! This module provides:
//! - [`InputFrame`]: one per-tick observation (symbol, empty, or suppressed)
//! - [`InputSource`]: the per-tick polling contract
//! - [`DebouncedSource`]: rate-limits empty frames so holds survive key gaps
//! - [`DeviceSource`]: config-driven translation of raw device state
//! - [`ScriptedSource`]: fixed playback for tests and benchmarks

mod debounce;
mod device;
mod frame;
mod scripted;
mod source;

pub use debounce::DebouncedSource;
pub use device::{DeviceSource, DeviceState, direction};
pub use frame::InputFrame;
pub use scripted::ScriptedSource;
pub use source::{InputSource, NullSource};
