//! Opponent discovery: creatures in reach and players worth dueling.

use std::sync::Arc;

use bravura_domain::{eligible_creature_level, Character, CharacterId, Creature};

use crate::infrastructure::ports::{CharacterRepo, CreatureRepo};

use super::error::CombatError;

/// Creatures up to one level above the character, strongest first.
pub struct ListOpponents {
    character_repo: Arc<dyn CharacterRepo>,
    creature_repo: Arc<dyn CreatureRepo>,
}

impl ListOpponents {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        creature_repo: Arc<dyn CreatureRepo>,
    ) -> Self {
        Self {
            character_repo,
            creature_repo,
        }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<Vec<Creature>, CombatError> {
        let character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(character_id))?;

        let creatures = self
            .creature_repo
            .list_up_to_level(eligible_creature_level(&character))
            .await?;
        Ok(creatures)
    }
}

/// Other characters within ten levels, closest level first.
pub struct ListDuelOpponents {
    character_repo: Arc<dyn CharacterRepo>,
}

impl ListDuelOpponents {
    pub fn new(character_repo: Arc<dyn CharacterRepo>) -> Self {
        Self { character_repo }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<Vec<Character>, CombatError> {
        let character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(character_id))?;

        let mut rivals: Vec<Character> = self
            .character_repo
            .list_all()
            .await?
            .into_iter()
            .filter(|other| other.id() != character_id && character.is_worthy_opponent(other))
            .collect();
        rivals.sort_by_key(|other| other.level().abs_diff(character.level()));
        Ok(rivals)
    }
}
