use tracing::trace;

use crate::game::moves::Move;

/// Which corner a fighter occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    pub fn both() -> [Side; 2] {
        [Side::P1, Side::P2]
    }
}

/// Presentation-facing notifications emitted by a bout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FightEvent {
    HealthChanged { side: Side, current: i32, max: i32 },
    ExChanged { side: Side, current: i32, max: i32 },
    MoveLanded { side: Side, mv: Move },
    BoutEnded { winner: Side },
}

/// Handle for removing a subscriber from an [`EventChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&FightEvent)>;

/// Typed event channel with explicit observer registration.
///
/// Subscribers are notified synchronously, in subscription order, from
/// whichever update emitted the event. Subscriber lifetime is explicit:
/// nothing is delivered before `subscribe` or after `unsubscribe`.
#[derive(Default)]
pub struct EventChannel {
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&FightEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    pub fn emit(&mut self, event: FightEvent) {
        trace!(?event, "fight event");
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
