//! Fight glue around the combo engine: moves, vitals, bouts, and the typed
//! event channel that presentation code subscribes to.

mod bout;
mod events;
mod health;
mod moves;

pub use bout::{Bout, BoutState, Fighter};
pub use events::{EventChannel, FightEvent, Side, SubscriberId};
pub use health::{MAX_EX, MAX_HEALTH, Meter, Vitals};
pub use moves::{HIT_DAMAGE, Move, MoveList, SPECIAL_EX_COST};
