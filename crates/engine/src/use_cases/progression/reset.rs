//! Reset character use case.

use std::sync::Arc;

use bravura_domain::{Character, CharacterId, DomainEvent};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, EventPublisherPort};
use crate::use_cases::publish_event;

use super::error::ProgressionError;

/// Return a character to the baseline apprentice.
pub struct ResetCharacter {
    character_repo: Arc<dyn CharacterRepo>,
    events: Arc<dyn EventPublisherPort>,
    locks: Arc<CharacterLocks>,
}

impl ResetCharacter {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        events: Arc<dyn EventPublisherPort>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            character_repo,
            events,
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

        character.reset();
        self.character_repo.save(&character).await?;

        tracing::info!(character_id = %character_id, "Character reset");
        publish_event(
            self.events.as_ref(),
            DomainEvent::CharacterReset { character_id },
        )
        .await;

        Ok(character)
    }
}
