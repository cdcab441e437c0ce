//! Bindings and input tuning, persisted as JSON.

mod bindings;

pub use bindings::{ButtonLayout, DEFAULT_DEBOUNCE_DELAY, InputSettings};
