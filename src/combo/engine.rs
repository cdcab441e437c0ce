use tracing::{debug, trace};

use crate::combo::keypress::KeyPress;
use crate::input::{InputFrame, InputSource, NullSource};

/// Identifies one registered listener so it can later be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<S> = Box<dyn FnMut(&[KeyPress<S>])>;

/// A registered combo: its constraint sequence, its listeners, and the
/// matching cursor (current step index plus per-step accumulated hold time).
struct ComboEntry<S> {
    sequence: Vec<KeyPress<S>>,
    listeners: Vec<(ListenerId, Listener<S>)>,
    index: usize,
    elapsed: Vec<f32>,
}

impl<S> ComboEntry<S> {
    fn new(sequence: Vec<KeyPress<S>>) -> Self {
        let elapsed = vec![0.0; sequence.len()];
        Self {
            sequence,
            listeners: Vec::new(),
            index: 0,
            elapsed,
        }
    }

    fn reset(&mut self) {
        self.index = 0;
        for duration in &mut self.elapsed {
            *duration = 0.0;
        }
    }
}

/// Recognizes registered combo sequences in a per-tick input stream.
///
/// Every registered combo keeps independent progress, so overlapping combos
/// of different lengths and timing profiles are tracked concurrently. The
/// engine is single-threaded and tick-driven: the host calls [`poll`] once
/// per simulation step with that step's elapsed time.
///
/// [`poll`]: ComboEngine::poll
pub struct ComboEngine<S> {
    source: Box<dyn InputSource<S>>,
    combos: Vec<ComboEntry<S>>,
    next_listener: u64,
}

impl<S: Clone + PartialEq> ComboEngine<S> {
    /// Create an engine with no input attached (a [`NullSource`]).
    pub fn new() -> Self {
        Self::with_source(Box::new(NullSource))
    }

    pub fn with_source(source: Box<dyn InputSource<S>>) -> Self {
        Self {
            source,
            combos: Vec::new(),
            next_listener: 0,
        }
    }

    /// Swap the input source. Combo progress is unaffected.
    pub fn set_source(&mut self, source: Box<dyn InputSource<S>>) {
        self.source = source;
    }

    /// Register a combo sequence without a listener. Silent no-op on an
    /// empty sequence; registering an existing sequence is idempotent.
    pub fn register(&mut self, sequence: Vec<KeyPress<S>>) {
        self.entry_for(sequence);
    }

    /// Register `listener` for `sequence`, creating the combo entry if it
    /// does not exist yet. Returns the listener's handle, or `None` when
    /// the sequence is empty (silent no-op, matching `register`).
    pub fn on(
        &mut self,
        sequence: Vec<KeyPress<S>>,
        listener: impl FnMut(&[KeyPress<S>]) + 'static,
    ) -> Option<ListenerId> {
        let id = ListenerId(self.next_listener);
        let entry = self.entry_for(sequence)?;
        entry.listeners.push((id, Box::new(listener)));
        self.next_listener += 1;
        Some(id)
    }

    /// Remove one listener from the combo matching `sequence`. The combo
    /// entry itself stays registered even if no listeners remain.
    pub fn off(&mut self, sequence: &[KeyPress<S>], id: ListenerId) -> bool {
        let Some(entry) = self.combos.iter_mut().find(|c| c.sequence == sequence) else {
            return false;
        };
        let before = entry.listeners.len();
        entry.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != entry.listeners.len()
    }

    /// Remove the whole combo entry for `sequence`, listeners included.
    pub fn unregister(&mut self, sequence: &[KeyPress<S>]) -> bool {
        let before = self.combos.len();
        self.combos.retain(|c| c.sequence != sequence);
        if self.combos.len() != before {
            debug!(len = sequence.len(), "unregistered combo");
            true
        } else {
            false
        }
    }

    pub fn combo_count(&self) -> usize {
        self.combos.len()
    }

    /// Advance the engine by one tick.
    ///
    /// Polls the input source once; a suppressed tick (`None` frame)
    /// advances nothing, including in-progress hold durations. Otherwise
    /// every combo's cursor is advanced against the frame, completions are
    /// resolved (longest sequence wins, first one found on a tie), the
    /// winner's listeners are invoked with the completed sequence, and the
    /// sequence is returned. Mismatches are progress resets, never errors.
    pub fn poll(&mut self, dt: f32) -> Option<Vec<KeyPress<S>>> {
        let frame = self.source.poll(dt)?;
        let winner = self.advance_all(&frame, dt)?;

        let sequence = self.combos[winner].sequence.clone();
        debug!(combo = winner, len = sequence.len(), "combo matched");
        for (_, listener) in &mut self.combos[winner].listeners {
            listener(&sequence);
        }
        Some(sequence)
    }

    fn advance_all(&mut self, frame: &InputFrame<S>, dt: f32) -> Option<usize> {
        let mut winner: Option<(usize, usize)> = None;

        for i in 0..self.combos.len() {
            let entry = &mut self.combos[i];
            Self::advance(entry, frame, dt);

            if entry.index == entry.sequence.len() {
                let len = entry.sequence.len();
                trace!(combo = i, len, "combo completed this tick");
                // Completions reset immediately, winner or not.
                entry.reset();
                match winner {
                    Some((_, best_len)) if best_len >= len => {}
                    _ => winner = Some((i, len)),
                }
            }
        }

        winner.map(|(index, _)| index)
    }

    /// Advance one combo's cursor against this tick's frame.
    fn advance(entry: &mut ComboEntry<S>, frame: &InputFrame<S>, dt: f32) {
        let step = &entry.sequence[entry.index];

        if step.is_instant() {
            if frame.symbol() == Some(step.symbol()) {
                entry.index += 1;
            } else {
                entry.reset();
            }
        } else if frame.symbol() == Some(step.symbol()) {
            entry.elapsed[entry.index] += dt;
            if step.has_timeout() && entry.elapsed[entry.index] > step.max_duration() {
                trace!(index = entry.index, "hold exceeded max duration");
                entry.reset();
            }
        } else if entry.elapsed[entry.index] >= step.min_duration() {
            // Hold satisfied; this tick's frame is spent as the next step's
            // check. A timed next step starts accumulating on the following
            // tick, an instantaneous one is consumed right away.
            entry.index += 1;
            if entry.index < entry.sequence.len() {
                let next = &entry.sequence[entry.index];
                if frame.symbol() != Some(next.symbol()) {
                    entry.reset();
                } else if next.is_instant() {
                    entry.index += 1;
                }
            }
        } else {
            entry.reset();
        }
    }

    fn entry_for(&mut self, sequence: Vec<KeyPress<S>>) -> Option<&mut ComboEntry<S>> {
        if sequence.is_empty() {
            return None;
        }
        if let Some(pos) = self.combos.iter().position(|c| c.sequence == sequence) {
            return Some(&mut self.combos[pos]);
        }

        debug!(len = sequence.len(), "registered combo");
        self.combos.push(ComboEntry::new(sequence));
        let last = self.combos.len() - 1;
        Some(&mut self.combos[last])
    }
}

impl<S: Clone + PartialEq> Default for ComboEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}
