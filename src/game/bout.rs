use tracing::{debug, info};

use crate::combo::ComboEngine;
use crate::config::ButtonLayout;
use crate::game::events::{EventChannel, FightEvent, Side};
use crate::game::health::Vitals;
use crate::game::moves::{Move, MoveList};
use crate::input::InputSource;

/// One player's input stack: a combo engine pre-loaded with the stock move
/// set for their button layout.
pub struct Fighter {
    engine: ComboEngine<String>,
    moves: MoveList,
}

impl Fighter {
    pub fn new(layout: &ButtonLayout, source: Box<dyn InputSource<String>>) -> Self {
        let mut engine = ComboEngine::with_source(source);
        let moves = MoveList::default_for(layout);
        for (sequence, _) in moves.entries() {
            engine.register(sequence.clone());
        }
        Self { engine, moves }
    }

    /// The underlying engine, for attaching presentation listeners
    /// (animation triggers, sound playback) to individual combos.
    pub fn engine_mut(&mut self) -> &mut ComboEngine<String> {
        &mut self.engine
    }

    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Advance this fighter's input by one tick and resolve any completed
    /// combo to a move.
    pub fn poll(&mut self, dt: f32) -> Option<Move> {
        let sequence = self.engine.poll(dt)?;
        self.moves.identify(&sequence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoutState {
    InProgress,
    Finished { winner: Side },
}

/// A two-fighter match: input stacks, vitals, and the event channel that
/// notifies presentation code (health/EX bars, announcer) of changes.
///
/// Driven by an explicit simulation loop: the host calls [`update`] once per
/// fixed tick. Projectile or body collisions resolved by the host land
/// through [`register_hit`].
///
/// [`update`]: Bout::update
/// [`register_hit`]: Bout::register_hit
pub struct Bout {
    fighters: [Fighter; 2],
    vitals: [Vitals; 2],
    events: EventChannel,
    state: BoutState,
}

impl Bout {
    pub fn new(p1: Fighter, p2: Fighter) -> Self {
        Self {
            fighters: [p1, p2],
            vitals: [Vitals::new(), Vitals::new()],
            events: EventChannel::new(),
            state: BoutState::InProgress,
        }
    }

    pub fn state(&self) -> BoutState {
        self.state
    }

    pub fn vitals(&self, side: Side) -> &Vitals {
        &self.vitals[side.index()]
    }

    pub fn events_mut(&mut self) -> &mut EventChannel {
        &mut self.events
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    /// Advance the bout by one tick. Each fighter's engine is polled once;
    /// a resolved move spends EX (specials), lands damage on the opponent,
    /// and emits events. A finished bout ignores further updates.
    pub fn update(&mut self, dt: f32) {
        for side in Side::both() {
            if self.state != BoutState::InProgress {
                return;
            }
            if let Some(mv) = self.fighters[side.index()].poll(dt) {
                self.perform(side, mv);
            }
        }
    }

    /// Apply `damage` to `target`, as from a connecting hit or projectile.
    pub fn register_hit(&mut self, target: Side, damage: i32) {
        if self.state != BoutState::InProgress {
            return;
        }

        let vitals = &mut self.vitals[target.index()];
        vitals.health.deplete(damage);
        let (current, max) = (vitals.health.current(), vitals.health.max());
        self.events.emit(FightEvent::HealthChanged {
            side: target,
            current,
            max,
        });

        if self.vitals[target.index()].is_dead() {
            let winner = target.opponent();
            info!(?winner, "bout ended");
            self.state = BoutState::Finished { winner };
            self.events.emit(FightEvent::BoutEnded { winner });
        }
    }

    fn perform(&mut self, side: Side, mv: Move) {
        debug!(?side, ?mv, "move performed");

        if mv.ex_cost() > 0 {
            let vitals = &mut self.vitals[side.index()];
            vitals.ex.deplete(mv.ex_cost());
            let (current, max) = (vitals.ex.current(), vitals.ex.max());
            self.events.emit(FightEvent::ExChanged { side, current, max });
        }

        self.events.emit(FightEvent::MoveLanded { side, mv });

        if mv.damage() > 0 {
            self.register_hit(side.opponent(), mv.damage());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{NullSource, ScriptedSource};

    fn scripted_fighter(layout: &ButtonLayout, source: ScriptedSource<String>) -> Fighter {
        Fighter::new(layout, Box::new(source))
    }

    fn idle_fighter(layout: &ButtonLayout) -> Fighter {
        Fighter::new(layout, Box::new(NullSource))
    }

    #[test]
    fn test_fighter_resolves_normals() {
        let layout = ButtonLayout::player1();
        let source = ScriptedSource::new().press("LightPunch".to_string());
        let mut fighter = scripted_fighter(&layout, source);

        assert_eq!(fighter.poll(0.016), Some(Move::LightPunch));
    }

    #[test]
    fn test_landed_move_damages_opponent() {
        let p1 = scripted_fighter(
            &ButtonLayout::player1(),
            ScriptedSource::new().press("HeavyKick".to_string()),
        );
        let p2 = idle_fighter(&ButtonLayout::player2());
        let mut bout = Bout::new(p1, p2);

        bout.update(0.016);
        assert_eq!(bout.vitals(Side::P2).health.current(), 90);
        assert_eq!(bout.vitals(Side::P1).health.current(), 100);
    }

    #[test]
    fn test_taunt_deals_no_damage() {
        let p1 = scripted_fighter(
            &ButtonLayout::player1(),
            ScriptedSource::new().press("Taunt1".to_string()),
        );
        let p2 = idle_fighter(&ButtonLayout::player2());
        let mut bout = Bout::new(p1, p2);

        bout.update(0.016);
        assert_eq!(bout.vitals(Side::P2).health.current(), 100);
    }

    #[test]
    fn test_ko_finishes_bout() {
        let p1 = idle_fighter(&ButtonLayout::player1());
        let p2 = idle_fighter(&ButtonLayout::player2());
        let mut bout = Bout::new(p1, p2);

        bout.register_hit(Side::P2, 100);
        assert_eq!(bout.state(), BoutState::Finished { winner: Side::P1 });

        // Further hits are ignored once the bout is over.
        bout.register_hit(Side::P1, 100);
        assert_eq!(bout.vitals(Side::P1).health.current(), 100);
    }
}
