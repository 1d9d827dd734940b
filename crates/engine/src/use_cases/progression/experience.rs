//! Experience gain and level-up use cases.

use std::sync::Arc;

use bravura_domain::{
    Character, CharacterId, DomainEvent, ExperienceOutcome, LevelUpOutcome,
};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, EventPublisherPort};
use crate::use_cases::publish_event;

use super::error::ProgressionError;

/// Add experience; a full bar triggers a level-up.
pub struct GainExperience {
    character_repo: Arc<dyn CharacterRepo>,
    events: Arc<dyn EventPublisherPort>,
    locks: Arc<CharacterLocks>,
    config: EngineConfig,
}

impl GainExperience {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        events: Arc<dyn EventPublisherPort>,
        locks: Arc<CharacterLocks>,
        config: EngineConfig,
    ) -> Self {
        Self {
            character_repo,
            events,
            locks,
            config,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
        amount: u32,
    ) -> Result<ExperienceOutcome, ProgressionError> {
        let _guard = self.locks.acquire(character_id).await;
        let mut character = load(self.character_repo.as_ref(), character_id).await?;

        let outcome = character.gain_experience(amount, self.config.max_level);
        self.character_repo.save(&character).await?;

        if let Some(level_up) = outcome.level_up {
            announce(self.events.as_ref(), &character, level_up).await;
        }

        Ok(outcome)
    }
}

/// Force a level-up attempt regardless of experience.
pub struct LevelUp {
    character_repo: Arc<dyn CharacterRepo>,
    events: Arc<dyn EventPublisherPort>,
    locks: Arc<CharacterLocks>,
    config: EngineConfig,
}

impl LevelUp {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        events: Arc<dyn EventPublisherPort>,
        locks: Arc<CharacterLocks>,
        config: EngineConfig,
    ) -> Self {
        Self {
            character_repo,
            events,
            locks,
            config,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
    ) -> Result<LevelUpOutcome, ProgressionError> {
        let _guard = self.locks.acquire(character_id).await;
        let mut character = load(self.character_repo.as_ref(), character_id).await?;

        let outcome = character.level_up(self.config.max_level);
        if let LevelUpOutcome::LeveledUp { .. } = outcome {
            self.character_repo.save(&character).await?;
        }

        announce(self.events.as_ref(), &character, outcome).await;
        Ok(outcome)
    }
}

async fn load(
    repo: &dyn CharacterRepo,
    character_id: CharacterId,
) -> Result<Character, ProgressionError> {
    repo.get(character_id)
        .await?
        .ok_or(ProgressionError::CharacterNotFound(character_id))
}

async fn announce(events: &dyn EventPublisherPort, character: &Character, outcome: LevelUpOutcome) {
    match outcome {
        LevelUpOutcome::LeveledUp {
            new_level,
            total_health,
            ..
        } => {
            tracing::info!(
                character_id = %character.id(),
                new_level,
                total_health,
                "Character leveled up"
            );
            publish_event(
                events,
                DomainEvent::CharacterLeveledUp {
                    character_id: character.id(),
                    new_level,
                },
            )
            .await;
        }
        LevelUpOutcome::MaxLevelReached { level } => {
            tracing::debug!(character_id = %character.id(), level, "Level cap reached");
        }
    }
}
