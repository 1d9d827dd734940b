//! Regenerate use case - one resource recovery tick.

use std::sync::Arc;

use bravura_domain::{Character, CharacterId};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::CharacterRepo;

use super::error::ProgressionError;

/// Apply one recovery tick: health by strength, mana by intelligence, +5 stamina.
pub struct Regenerate {
    character_repo: Arc<dyn CharacterRepo>,
    locks: Arc<CharacterLocks>,
}

impl Regenerate {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, locks: Arc<CharacterLocks>) -> Self {
        Self {
            character_repo,
            locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, character_id: CharacterId) -> Result<Character, ProgressionError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(ProgressionError::CharacterNotFound(character_id))?;

        character.increase_health();
        character.increase_mana();
        character.increase_stamina();
        self.character_repo.save(&character).await?;

        tracing::debug!(
            health = character.health().current(),
            mana = character.mana().current(),
            stamina = character.stamina().current(),
            "Resources regenerated"
        );

        Ok(character)
    }
}
