//! Use potion use case.

use std::sync::Arc;

use bravura_domain::{CharacterId, PotionId, PotionUseOutcome};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, PotionRepo};

use super::error::EconomyError;

/// Drink one potion from stock.
pub struct UsePotion {
    character_repo: Arc<dyn CharacterRepo>,
    potion_repo: Arc<dyn PotionRepo>,
    locks: Arc<CharacterLocks>,
}

impl UsePotion {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        potion_repo: Arc<dyn PotionRepo>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            character_repo,
            potion_repo,
            locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
        potion_id: PotionId,
    ) -> Result<PotionUseOutcome, EconomyError> {
        let _guard = self.locks.acquire(character_id).await;

        let mut character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(EconomyError::CharacterNotFound(character_id))?;

        let potion = self
            .potion_repo
            .get(potion_id)
            .await?
            .ok_or(EconomyError::PotionNotFound(potion_id))?;

        let outcome = character.use_potion(&potion);
        match outcome {
            PotionUseOutcome::Consumed { kind, restored } => {
                self.character_repo.save(&character).await?;
                tracing::debug!(?kind, restored, "Potion consumed");
            }
            PotionUseOutcome::OutOfStock { kind } => {
                tracing::debug!(?kind, "Potion out of stock");
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterRepo, MockPotionRepo};
    use crate::test_fixtures::{apprentice, life_potion};
    use bravura_domain::{Character, PotionKind, PotionStock, ResourcePool};

    fn potion_repo() -> MockPotionRepo {
        let mut repo = MockPotionRepo::new();
        repo.expect_get().returning(|_| Ok(Some(life_potion())));
        repo
    }

    #[tokio::test]
    async fn consumed_potion_is_saved() {
        let character = apprentice().with_health(ResourcePool::new(20, 150));
        let id = character.id();
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        character_repo
            .expect_save()
            .withf(|c: &Character| c.health().current() == 80)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = UsePotion::new(
            Arc::new(character_repo),
            Arc::new(potion_repo()),
            Arc::new(CharacterLocks::new()),
        )
        .execute(id, life_potion().id)
        .await
        .unwrap();

        assert_eq!(
            outcome,
            PotionUseOutcome::Consumed {
                kind: PotionKind::Life,
                restored: 60
            }
        );
    }

    #[tokio::test]
    async fn empty_stock_saves_nothing() {
        let character = apprentice().with_potions(PotionStock::new(0, 0, 0));
        let id = character.id();
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        character_repo.expect_save().never();

        let outcome = UsePotion::new(
            Arc::new(character_repo),
            Arc::new(potion_repo()),
            Arc::new(CharacterLocks::new()),
        )
        .execute(id, life_potion().id)
        .await
        .unwrap();

        assert_eq!(outcome, PotionUseOutcome::OutOfStock { kind: PotionKind::Life });
    }
}
