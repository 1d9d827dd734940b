//! Attack creature use case.

use std::sync::Arc;

use bravura_domain::{
    eligible_creature_level, strike, Character, CharacterId, Creature, CreatureId, StrikeOutcome,
};

use crate::infrastructure::locks::{CharacterLocks, CreatureLocks};
use crate::infrastructure::ports::{CharacterRepo, CreatureRepo, RandomPort};

use super::error::CombatError;

/// Both sides after the strike.
#[derive(Debug, Clone)]
pub struct AttackResult {
    pub character: Character,
    pub creature: Creature,
    pub outcome: StrikeOutcome,
}

/// Strike a creature.
///
/// Orchestrates: character lock, creature lock, lookups, reach check, stamina
/// cost, strike, save of both sides. Both guards are held until the creature is
/// saved, so strikes from different characters on one creature never overwrite
/// each other.
pub struct AttackCreature {
    character_repo: Arc<dyn CharacterRepo>,
    creature_repo: Arc<dyn CreatureRepo>,
    random: Arc<dyn RandomPort>,
    locks: Arc<CharacterLocks>,
    creature_locks: Arc<CreatureLocks>,
}

impl AttackCreature {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        creature_repo: Arc<dyn CreatureRepo>,
        random: Arc<dyn RandomPort>,
        locks: Arc<CharacterLocks>,
        creature_locks: Arc<CreatureLocks>,
    ) -> Self {
        Self {
            character_repo,
            creature_repo,
            random,
            locks,
            creature_locks,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(
        &self,
        character_id: CharacterId,
        creature_id: CreatureId,
    ) -> Result<AttackResult, CombatError> {
        let _guard = self.locks.acquire(character_id).await;
        let _creature_guard = self.creature_locks.acquire(creature_id).await;

        let mut character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(character_id))?;

        let mut creature = self
            .creature_repo
            .get(creature_id)
            .await?
            .ok_or(CombatError::CreatureNotFound(creature_id))?;

        let max_level = eligible_creature_level(&character);
        if creature.level > max_level {
            return Err(CombatError::CreatureOutOfReach {
                level: creature.level,
                max_level,
            });
        }

        character.drop_stamina();
        let mut roll = |min: i32, max: i32| self.random.gen_range(min, max);
        let outcome = strike(&mut character, &mut creature, &mut roll);

        self.character_repo.save(&character).await?;
        self.creature_repo.save(&creature).await?;

        tracing::debug!(
            damage = outcome.damage,
            critical = outcome.critical,
            mitigation = outcome.mitigation,
            creature_health = creature.health,
            "Creature struck"
        );

        Ok(AttackResult {
            character,
            creature,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SequenceRandom};
    use crate::infrastructure::ports::{MockCharacterRepo, MockCreatureRepo};
    use crate::test_fixtures::knight;

    fn use_case(
        character_repo: MockCharacterRepo,
        creature_repo: MockCreatureRepo,
        random: Arc<dyn RandomPort>,
    ) -> AttackCreature {
        AttackCreature::new(
            Arc::new(character_repo),
            Arc::new(creature_repo),
            random,
            Arc::new(CharacterLocks::new()),
            Arc::new(CreatureLocks::new()),
        )
    }

    #[tokio::test]
    async fn minimum_roll_against_armor_five_deals_thirteen() {
        // Knight level 5, strength 10, sword 3: bonus 18, roll floor 18, armor 5
        let character = knight(5);
        let character_id = character.id();
        let creature = Creature::new("Lobo", 5, 100).with_armor(5);
        let creature_id = creature.id;

        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .withf(move |id| *id == character_id)
            .returning(move |_| Ok(Some(character.clone())));
        character_repo
            .expect_save()
            .withf(|c: &Character| c.stamina().current() == 95)
            .times(1)
            .returning(|_| Ok(()));

        let mut creature_repo = MockCreatureRepo::new();
        creature_repo
            .expect_get()
            .withf(move |id| *id == creature_id)
            .returning(move |_| Ok(Some(creature.clone())));
        creature_repo
            .expect_save()
            .withf(|c: &Creature| c.health == 87)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(character_repo, creature_repo, Arc::new(FixedRandom(0)))
            .execute(character_id, creature_id)
            .await
            .unwrap();

        assert_eq!(result.outcome.damage, 13);
        assert!(!result.outcome.critical);
        assert_eq!(result.creature.health, 87);
    }

    #[tokio::test]
    async fn top_roll_is_critical() {
        let character = knight(5);
        let character_id = character.id();
        let creature = Creature::new("Lobo", 5, 100).with_armor(5);
        let creature_id = creature.id;

        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        character_repo.expect_save().returning(|_| Ok(()));
        let mut creature_repo = MockCreatureRepo::new();
        creature_repo
            .expect_get()
            .returning(move |_| Ok(Some(creature.clone())));
        creature_repo.expect_save().returning(|_| Ok(()));

        let result = use_case(
            character_repo,
            creature_repo,
            Arc::new(SequenceRandom::new([i32::MAX])),
        )
        .execute(character_id, creature_id)
        .await
        .unwrap();

        // 36 doubled, minus armor 5
        assert!(result.outcome.critical);
        assert_eq!(result.outcome.damage, 67);
    }

    #[tokio::test]
    async fn when_character_not_found_returns_error() {
        let mut character_repo = MockCharacterRepo::new();
        character_repo.expect_get().returning(|_| Ok(None));
        let creature_repo = MockCreatureRepo::new();

        let result = use_case(character_repo, creature_repo, Arc::new(FixedRandom(1)))
            .execute(CharacterId::new(), CreatureId::new())
            .await;

        assert!(matches!(result, Err(CombatError::CharacterNotFound(_))));
    }

    #[tokio::test]
    async fn when_creature_not_found_returns_error() {
        let character = knight(1);
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        character_repo.expect_save().never();
        let mut creature_repo = MockCreatureRepo::new();
        creature_repo.expect_get().returning(|_| Ok(None));

        let result = use_case(character_repo, creature_repo, Arc::new(FixedRandom(1)))
            .execute(CharacterId::new(), CreatureId::new())
            .await;

        assert!(matches!(result, Err(CombatError::CreatureNotFound(_))));
    }

    #[tokio::test]
    async fn creature_above_reach_is_refused() {
        let character = knight(2);
        let too_strong = Creature::new("Ogro", 4, 500);
        let mut character_repo = MockCharacterRepo::new();
        character_repo
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        character_repo.expect_save().never();
        let mut creature_repo = MockCreatureRepo::new();
        creature_repo
            .expect_get()
            .returning(move |_| Ok(Some(too_strong.clone())));

        let result = use_case(character_repo, creature_repo, Arc::new(FixedRandom(1)))
            .execute(CharacterId::new(), CreatureId::new())
            .await;

        assert!(matches!(
            result,
            Err(CombatError::CreatureOutOfReach {
                level: 4,
                max_level: 3
            })
        ));
    }
}
