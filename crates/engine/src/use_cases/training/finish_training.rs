//! Finish training use case.

use std::sync::Arc;

use bravura_domain::{CharacterId, DomainEvent, TrainingCompleted};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, ClockPort, EventPublisherPort, MasteryRepo};
use crate::use_cases::publish_event;

use super::error::TrainingError;

/// Collect a finished session: the trained mastery goes up by one.
///
/// Holds the character lock across load -> finish -> save, so two concurrent
/// collections credit the mastery once.
pub struct FinishTraining {
    character_repo: Arc<dyn CharacterRepo>,
    mastery_repo: Arc<dyn MasteryRepo>,
    clock: Arc<dyn ClockPort>,
    events: Arc<dyn EventPublisherPort>,
    locks: Arc<CharacterLocks>,
}

impl FinishTraining {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        mastery_repo: Arc<dyn MasteryRepo>,
        clock: Arc<dyn ClockPort>,
        events: Arc<dyn EventPublisherPort>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            character_repo,
            mastery_repo,
            clock,
            events,
            locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
    ) -> Result<TrainingCompleted, TrainingError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(TrainingError::CharacterNotFound(character_id))?;

        let training = character.training();
        let (mastery_id, ends_at) = training
            .mastery_id()
            .zip(training.ends_at())
            .ok_or(TrainingError::NotTraining)?;

        if !character.train_finished(self.clock.now()) {
            return Err(TrainingError::TrainingNotFinished { ends_at });
        }

        let mastery = self
            .mastery_repo
            .get(mastery_id)
            .await?
            .ok_or(TrainingError::MasteryNotFound(mastery_id))?;

        let completed = character.finish_training(&mastery)?;
        self.character_repo.save(&character).await?;

        tracing::info!(
            mastery = %mastery.name,
            new_value = completed.new_value,
            "Training finished"
        );

        publish_event(
            self.events.as_ref(),
            DomainEvent::TrainingCompleted {
                character_id,
                mastery_id: completed.mastery_id,
                field: completed.field,
                new_value: completed.new_value,
            },
        )
        .await;

        Ok(completed)
    }
}
