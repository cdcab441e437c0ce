use crate::input::frame::InputFrame;

/// Abstraction over input sources.
/// Implementations: DeviceSource (host device state), DebouncedSource
/// (rate-limiting decorator), ScriptedSource (testing/replay).
pub trait InputSource<S> {
    /// Sense input for this tick. `dt` is the host-supplied elapsed time in
    /// seconds since the previous tick.
    ///
    /// Returns `None` when no frame should be considered at all this tick
    /// (used by decorators to suppress noise); an empty frame when nothing
    /// was pressed; a symbol frame for a recognized press or axis threshold
    /// crossing.
    fn poll(&mut self, dt: f32) -> Option<InputFrame<S>>;
}

/// Source that never produces a frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

impl<S> InputSource<S> for NullSource {
    fn poll(&mut self, _dt: f32) -> Option<InputFrame<S>> {
        None
    }
}
