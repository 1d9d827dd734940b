//! Buy potion use case.

use std::sync::Arc;

use bravura_domain::{CharacterId, PotionId, PurchaseOutcome};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, PotionRepo};

use super::error::EconomyError;

/// Buy `amount` potions of one kind, all or nothing.
pub struct BuyPotion {
    character_repo: Arc<dyn CharacterRepo>,
    potion_repo: Arc<dyn PotionRepo>,
    locks: Arc<CharacterLocks>,
}

impl BuyPotion {
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

    /// # Returns
    /// * `Ok(PurchaseOutcome::Purchased)` - Gold deducted, stock added, saved
    /// * `Ok(PurchaseOutcome::InsufficientGold)` - Nothing changed, nothing saved
    /// * `Err(EconomyError)` - Unknown character/potion or storage failure
    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
        potion_id: PotionId,
        amount: u32,
    ) -> Result<PurchaseOutcome, EconomyError> {
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

        let outcome = character.buy_potion(&potion, amount);
        match outcome {
            PurchaseOutcome::Purchased { spent, .. } => {
                self.character_repo.save(&character).await?;
                tracing::info!(
                    potion = %potion.name,
                    amount,
                    spent,
                    gold_left = character.gold(),
                    "Potions purchased"
                );
            }
            PurchaseOutcome::InsufficientGold { cost, gold } => {
                tracing::debug!(?cost, gold, "Purchase refused, not enough gold");
            }
        }

        Ok(outcome)
    }
}
