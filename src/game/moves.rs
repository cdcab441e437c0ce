use crate::combo::KeyPress;
use crate::config::ButtonLayout;
use crate::input::direction;

/// Damage dealt by any connecting normal or special.
pub const HIT_DAMAGE: i32 = 10;
/// EX gauge drained by a special move.
pub const SPECIAL_EX_COST: i32 = 10;

/// The moves a fighter can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    LightPunch,
    HeavyPunch,
    LightKick,
    HeavyKick,
    Hadouken,
    Waterfall,
    Taunt1,
    Taunt2,
}

impl Move {
    pub fn all() -> &'static [Move] {
        &[
            Move::LightPunch,
            Move::HeavyPunch,
            Move::LightKick,
            Move::HeavyKick,
            Move::Hadouken,
            Move::Waterfall,
            Move::Taunt1,
            Move::Taunt2,
        ]
    }

    /// Specials spend EX gauge when performed.
    pub fn is_special(&self) -> bool {
        matches!(self, Move::Hadouken | Move::Waterfall)
    }

    pub fn is_taunt(&self) -> bool {
        matches!(self, Move::Taunt1 | Move::Taunt2)
    }

    pub fn damage(&self) -> i32 {
        if self.is_taunt() { 0 } else { HIT_DAMAGE }
    }

    pub fn ex_cost(&self) -> i32 {
        if self.is_special() { SPECIAL_EX_COST } else { 0 }
    }
}

/// Ordered table mapping combo sequences to moves.
///
/// Entry order doubles as registration order, so the engine's tie-break
/// (first discovered wins equal lengths) is deterministic per layout.
#[derive(Debug, Clone)]
pub struct MoveList {
    entries: Vec<(Vec<KeyPress<String>>, Move)>,
}

impl MoveList {
    /// The stock move set for a player, expressed in that player's button
    /// names: each button as a one-step combo, plus the two motion specials.
    pub fn default_for(layout: &ButtonLayout) -> Self {
        let down = || direction::DOWN.to_string();
        let right = || direction::RIGHT.to_string();
        let up = || direction::UP.to_string();

        let entries = vec![
            (
                vec![KeyPress::instant(layout.light_punch.clone())],
                Move::LightPunch,
            ),
            (
                vec![KeyPress::instant(layout.heavy_punch.clone())],
                Move::HeavyPunch,
            ),
            (
                vec![KeyPress::instant(layout.light_kick.clone())],
                Move::LightKick,
            ),
            (
                vec![KeyPress::instant(layout.heavy_kick.clone())],
                Move::HeavyKick,
            ),
            (
                vec![
                    KeyPress::held_within(down(), 0.0, 1.0),
                    KeyPress::held_within(right(), 0.0, 1.0),
                    KeyPress::instant(layout.heavy_punch.clone()),
                ],
                Move::Hadouken,
            ),
            (
                vec![
                    KeyPress::held(down(), 1.0),
                    KeyPress::held_within(up(), 0.0, 1.0),
                    KeyPress::instant(layout.heavy_kick.clone()),
                ],
                Move::Waterfall,
            ),
            (
                vec![KeyPress::instant(layout.taunt1.clone())],
                Move::Taunt1,
            ),
            (
                vec![KeyPress::instant(layout.taunt2.clone())],
                Move::Taunt2,
            ),
        ];

        Self { entries }
    }

    /// Look a completed sequence back up.
    pub fn identify(&self, sequence: &[KeyPress<String>]) -> Option<Move> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == sequence)
            .map(|(_, mv)| *mv)
    }

    pub fn entries(&self) -> &[(Vec<KeyPress<String>>, Move)] {
        &self.entries
    }
}
