//! Start training use case.

use std::sync::Arc;

use bravura_domain::{CharacterId, MasteryId, TrainingStarted};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, ClockPort, MasteryRepo};

use super::error::TrainingError;

/// Begin a timed training session for one mastery.
pub struct StartTraining {
    character_repo: Arc<dyn CharacterRepo>,
    mastery_repo: Arc<dyn MasteryRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<CharacterLocks>,
}

impl StartTraining {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        mastery_repo: Arc<dyn MasteryRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            character_repo,
            mastery_repo,
            clock,
            locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
        mastery_id: MasteryId,
    ) -> Result<TrainingStarted, TrainingError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(TrainingError::CharacterNotFound(character_id))?;

        if let Some(active) = character.training().mastery_id() {
            return Err(TrainingError::AlreadyTraining(active));
        }

        let mastery = self
            .mastery_repo
            .get(mastery_id)
            .await?
            .ok_or(TrainingError::MasteryNotFound(mastery_id))?;

        let started = character.start_training(&mastery, self.clock.now())?;
        self.character_repo.save(&character).await?;

        tracing::info!(
            mastery = %mastery.name,
            field = %mastery.field,
            duration_secs = started.duration_secs,
            ends_at = %started.ends_at,
            "Training started"
        );

        Ok(started)
    }
}
