use std::collections::VecDeque;

use crate::input::frame::InputFrame;
use crate::input::source::InputSource;

/// Replays a fixed schedule of frames, one per tick.
///
/// Used by tests and benchmarks in place of a device-backed source. Once the
/// schedule is exhausted every further tick is suppressed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource<S> {
    frames: VecDeque<Option<InputFrame<S>>>,
}

impl<S> ScriptedSource<S> {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
        }
    }

    /// Append a tick carrying `symbol`.
    pub fn press(mut self, symbol: S) -> Self {
        self.frames.push_back(Some(InputFrame::new(symbol)));
        self
    }

    /// Append an explicitly empty tick.
    pub fn release(mut self) -> Self {
        self.frames.push_back(Some(InputFrame::empty()));
        self
    }

    /// Append a suppressed tick (no frame at all).
    pub fn skip(mut self) -> Self {
        self.frames.push_back(None);
        self
    }

    /// Append `count` ticks carrying `symbol`.
    pub fn hold(mut self, symbol: S, count: usize) -> Self
    where
        S: Clone,
    {
        for _ in 0..count {
            self.frames.push_back(Some(InputFrame::new(symbol.clone())));
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl<S> InputSource<S> for ScriptedSource<S> {
    fn poll(&mut self, _dt: f32) -> Option<InputFrame<S>> {
        self.frames.pop_front().flatten()
    }
}
