//! Combat errors.

use crate::infrastructure::ports::RepoError;
use bravura_domain::{CharacterId, CreatureId};

#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Creature not found: {0}")]
    CreatureNotFound(CreatureId),
    #[error("Creature level {level} is above the allowed {max_level}")]
    CreatureOutOfReach { level: u32, max_level: u32 },
    #[error("Level {defender_level} is not a worthy opponent for level {attacker_level}")]
    UnworthyOpponent {
        attacker_level: u32,
        defender_level: u32,
    },
    #[error("A character cannot duel itself")]
    SelfDuel,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
