//! Training status query. Read-only, takes no lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use bravura_domain::{CharacterId, MasteryId, TrainingState};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};

use super::error::TrainingError;

/// Training as seen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TrainingStatusView {
    Idle,
    InProgress {
        mastery_id: MasteryId,
        ends_at: DateTime<Utc>,
        remaining_secs: i64,
    },
    /// End time reached; waiting for `FinishTraining`.
    Finished { mastery_id: MasteryId },
}

pub struct TrainingStatus {
    character_repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl TrainingStatus {
    pub fn new(character_repo: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            character_repo,
            clock,
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
    ) -> Result<TrainingStatusView, TrainingError> {
        let character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(TrainingError::CharacterNotFound(character_id))?;

        let now = self.clock.now();
        let view = match character.training() {
            TrainingState::Idle => TrainingStatusView::Idle,
            TrainingState::Training { mastery_id, .. } if character.train_finished(now) => {
                TrainingStatusView::Finished { mastery_id }
            }
            TrainingState::Training {
                mastery_id,
                ends_at,
            } => TrainingStatusView::InProgress {
                mastery_id,
                ends_at,
                remaining_secs: (ends_at - now).num_seconds(),
            },
        };

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockCharacterRepo;
    use crate::test_fixtures::{apprentice, fixed_time};
    use bravura_domain::Character;
    use chrono::Duration;

    async fn status_of(character: Character) -> TrainingStatusView {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        TrainingStatus::new(Arc::new(repo), Arc::new(FixedClock(fixed_time())))
            .execute(CharacterId::new())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn idle_character() {
        assert_eq!(status_of(apprentice()).await, TrainingStatusView::Idle);
    }

    #[tokio::test]
    async fn running_session_reports_remaining_time() {
        let ends_at = fixed_time() + Duration::seconds(45);
        let character = apprentice().with_training(TrainingState::Training {
            mastery_id: MasteryId::new(2),
            ends_at,
        });

        assert_eq!(
            status_of(character).await,
            TrainingStatusView::InProgress {
                mastery_id: MasteryId::new(2),
                ends_at,
                remaining_secs: 45
            }
        );
    }

    #[tokio::test]
    async fn elapsed_session_is_finished_exactly_at_end_time() {
        let character = apprentice().with_training(TrainingState::Training {
            mastery_id: MasteryId::new(2),
            ends_at: fixed_time(),
        });

        assert_eq!(
            status_of(character).await,
            TrainingStatusView::Finished {
                mastery_id: MasteryId::new(2)
            }
        );
    }
}
