use crate::input::frame::InputFrame;
use crate::input::source::InputSource;

/// Decorator that rate-limits empty frames from the wrapped source.
///
/// Symbol frames pass through immediately and reset the cooldown. An empty
/// frame is swallowed (reported as a suppressed tick) while the cooldown is
/// still running, so in-progress holds are not reset by a flood of "nothing
/// pressed" observations between key taps. At most one empty frame comes
/// through per `delay` seconds.
pub struct DebouncedSource<I> {
    inner: I,
    delay: f32,
    cooldown: f32,
}

impl<I> DebouncedSource<I> {
    pub fn new(inner: I, delay: f32) -> Self {
        Self {
            inner,
            delay,
            cooldown: delay,
        }
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Change the delay. Also restarts the cooldown.
    pub fn set_delay(&mut self, delay: f32) {
        self.delay = delay;
        self.cooldown = delay;
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<S, I: InputSource<S>> InputSource<S> for DebouncedSource<I> {
    fn poll(&mut self, dt: f32) -> Option<InputFrame<S>> {
        let frame = self.inner.poll(dt)?;

        if frame.is_empty() {
            self.cooldown -= dt;
            if self.cooldown <= 0.0 {
                self.cooldown = self.delay;
                Some(frame)
            } else {
                None
            }
        } else {
            self.cooldown = self.delay;
            Some(frame)
        }
    }
}
