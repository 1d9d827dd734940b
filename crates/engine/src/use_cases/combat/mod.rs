//! Combat use cases.
//!
//! Creature fights, duels between players, and opponent discovery.

use std::sync::Arc;

mod attack_creature;
mod duel;
mod error;
mod opponents;

pub use attack_creature::{AttackCreature, AttackResult};
pub use duel::{Duel, DuelResult};
pub use error::CombatError;
pub use opponents::{ListDuelOpponents, ListOpponents};

/// Container for combat use cases.
pub struct CombatUseCases {
    pub attack: Arc<AttackCreature>,
    pub duel: Arc<Duel>,
    pub opponents: Arc<ListOpponents>,
    pub duel_opponents: Arc<ListDuelOpponents>,
}

impl CombatUseCases {
    pub fn new(
        attack: Arc<AttackCreature>,
        duel: Arc<Duel>,
        opponents: Arc<ListOpponents>,
        duel_opponents: Arc<ListDuelOpponents>,
    ) -> Self {
        Self {
            attack,
            duel,
            opponents,
            duel_opponents,
        }
    }
}
