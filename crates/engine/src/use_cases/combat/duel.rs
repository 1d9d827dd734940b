//! Duel use case - one strike between two players.

use std::sync::Arc;

use bravura_domain::{strike, Character, CharacterId, StrikeOutcome};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{CharacterRepo, RandomPort};

use super::error::CombatError;

/// Both duelists after the strike.
#[derive(Debug, Clone)]
pub struct DuelResult {
    pub attacker: Character,
    pub defender: Character,
    pub outcome: StrikeOutcome,
}

/// Strike another player.
///
/// Orchestrates: pair lock (id order), lookups, worthiness check, duel
/// stamina cost, strike, save of both duelists.
pub struct Duel {
    character_repo: Arc<dyn CharacterRepo>,
    random: Arc<dyn RandomPort>,
    locks: Arc<CharacterLocks>,
}

impl Duel {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        random: Arc<dyn RandomPort>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            character_repo,
            random,
            locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        attacker_id: CharacterId,
        defender_id: CharacterId,
    ) -> Result<DuelResult, CombatError> {
        if attacker_id == defender_id {
            return Err(CombatError::SelfDuel);
        }

        let _guard = self.locks.acquire_pair(attacker_id, defender_id).await;

        let mut attacker = self
            .character_repo
            .get(attacker_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(attacker_id))?;

        let mut defender = self
            .character_repo
            .get(defender_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(defender_id))?;

        if !attacker.is_worthy_opponent(&defender) {
            return Err(CombatError::UnworthyOpponent {
                attacker_level: attacker.level(),
                defender_level: defender.level(),
            });
        }

        attacker.drop_stamina_pvp();
        let mut roll = |min: i32, max: i32| self.random.gen_range(min, max);
        let outcome = strike(&mut attacker, &mut defender, &mut roll);

        self.character_repo.save(&attacker).await?;
        self.character_repo.save(&defender).await?;

        tracing::debug!(
            damage = outcome.damage,
            critical = outcome.critical,
            defender_standing = outcome.defender_standing,
            "Duel strike resolved"
        );

        Ok(DuelResult {
            attacker,
            defender,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::ports::MockCharacterRepo;
    use crate::test_fixtures::{apprentice, knight};

    fn use_case(repo: MockCharacterRepo) -> Duel {
        Duel::new(
            Arc::new(repo),
            Arc::new(FixedRandom(0)),
            Arc::new(CharacterLocks::new()),
        )
    }

    fn repo_with(characters: Vec<Character>) -> MockCharacterRepo {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(move |id| {
            Ok(characters.iter().find(|c| c.id() == id).cloned())
        });
        repo
    }

    #[tokio::test]
    async fn duel_costs_ten_stamina_and_hurts_defender() {
        let attacker = knight(5);
        let defender = apprentice().with_level(3);
        let (attacker_id, defender_id) = (attacker.id(), defender.id());

        let mut repo = repo_with(vec![attacker, defender]);
        repo.expect_save().times(2).returning(|_| Ok(()));

        let result = use_case(repo).execute(attacker_id, defender_id).await.unwrap();

        // bonus 18 against melee defence ceil(0.2 + 1 * 3 * 0.15) = 1
        assert_eq!(result.outcome.mitigation, 1);
        assert_eq!(result.outcome.damage, 17);
        assert_eq!(result.attacker.stamina().current(), 90);
        assert_eq!(result.defender.health().current(), 133);
        assert_eq!(result.defender.stamina().current(), 100);
    }

    #[tokio::test]
    async fn unworthy_opponent_is_refused_without_saving() {
        let attacker = knight(25);
        let defender = apprentice().with_level(3);
        let (attacker_id, defender_id) = (attacker.id(), defender.id());

        let mut repo = repo_with(vec![attacker, defender]);
        repo.expect_save().never();

        let result = use_case(repo).execute(attacker_id, defender_id).await;

        assert!(matches!(
            result,
            Err(CombatError::UnworthyOpponent {
                attacker_level: 25,
                defender_level: 3
            })
        ));
    }

    #[tokio::test]
    async fn missing_defender_returns_error() {
        let attacker = knight(5);
        let attacker_id = attacker.id();
        let missing = CharacterId::new();

        let result = use_case(repo_with(vec![attacker]))
            .execute(attacker_id, missing)
            .await;

        assert!(matches!(result, Err(CombatError::CharacterNotFound(id)) if id == missing));
    }

    #[tokio::test]
    async fn self_duel_is_refused() {
        let id = CharacterId::new();
        let result = use_case(MockCharacterRepo::new()).execute(id, id).await;
        assert!(matches!(result, Err(CombatError::SelfDuel)));
    }
}
