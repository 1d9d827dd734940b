//! Describe character use case.

use std::sync::Arc;

use serde::Serialize;

use bravura_domain::{
    Character, CharacterId, MasteryLevels, PotionStock, ResourcePool, TitleTier,
};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{CharacterRepo, ClockPort, ProfessionRepo, TextLookupPort};

use super::error::ProfileError;

/// One resource pool with its fill percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceView {
    pub current: i32,
    pub total: i32,
    pub percentage: i32,
}

impl From<ResourcePool> for ResourceView {
    fn from(pool: ResourcePool) -> Self {
        Self {
            current: pool.current(),
            total: pool.total(),
            percentage: pool.percentage(),
        }
    }
}

/// Everything a profile page shows, derived at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub display_name: String,
    pub has_nickname: bool,
    pub level: u32,
    pub title_tier: TitleTier,
    pub title: String,
    pub profession_name: String,
    pub experience: u32,
    pub to_next_level: u32,
    pub experience_percentage: i32,
    pub is_max_level: bool,
    pub health: ResourceView,
    pub mana: ResourceView,
    pub stamina: ResourceView,
    pub melee_defence: i32,
    pub gold: u32,
    pub potions: PotionStock,
    pub intelligence: u32,
    pub masteries: MasteryLevels,
    pub mastery_points: u32,
    pub is_training: bool,
    pub training_finished: bool,
}

/// Build a `CharacterSummary`, translating the title through `TextLookupPort`.
pub struct DescribeCharacter {
    character_repo: Arc<dyn CharacterRepo>,
    profession_repo: Arc<dyn ProfessionRepo>,
    text: Arc<dyn TextLookupPort>,
    clock: Arc<dyn ClockPort>,
    config: EngineConfig,
}

impl DescribeCharacter {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        profession_repo: Arc<dyn ProfessionRepo>,
        text: Arc<dyn TextLookupPort>,
        clock: Arc<dyn ClockPort>,
        config: EngineConfig,
    ) -> Self {
        Self {
            character_repo,
            profession_repo,
            text,
            clock,
            config,
        }
    }

    pub async fn execute(&self, character_id: CharacterId) -> Result<CharacterSummary, ProfileError> {
        let character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(ProfileError::CharacterNotFound(character_id))?;

        let profession = self
            .profession_repo
            .get(character.profession_id())
            .await?
            .ok_or(ProfileError::ProfessionNotFound(character.profession_id()))?;

        let title_tier = character.title_tier();
        let title = self.text.translate(title_tier.key());
        let profession_name = profession.display_name(&title);

        Ok(self.summarize(&character, title_tier, title, profession_name))
    }

    fn summarize(
        &self,
        character: &Character,
        title_tier: TitleTier,
        title: String,
        profession_name: String,
    ) -> CharacterSummary {
        CharacterSummary {
            id: character.id(),
            display_name: character.display_name().to_string(),
            has_nickname: character.has_nickname(),
            level: character.level(),
            title_tier,
            title,
            profession_name,
            experience: character.experience(),
            to_next_level: character.to_next_level(),
            experience_percentage: character.experience_percentage(),
            is_max_level: character.is_max_level(self.config.max_level),
            health: character.health().into(),
            mana: character.mana().into(),
            stamina: character.stamina().into(),
            melee_defence: character.melee_defence(),
            gold: character.gold(),
            potions: character.potions(),
            intelligence: character.intelligence(),
            masteries: character.masteries(),
            mastery_points: character.mastery_points(),
            is_training: character.is_training(),
            training_finished: character.train_finished(self.clock.now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::events::NoopTextLookup;
    use crate::infrastructure::ports::{MockCharacterRepo, MockProfessionRepo, MockTextLookupPort};
    use crate::test_fixtures::{apprentice, fixed_time, knight, profession};
    use bravura_domain::{Nickname, ProfessionKind, ResourcePool};

    fn repos(character: Character) -> (MockCharacterRepo, MockProfessionRepo) {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));
        let mut professions = MockProfessionRepo::new();
        professions
            .expect_get()
            .returning(|id| Ok(Some(profession(ProfessionKind::from_id(id)))));
        (characters, professions)
    }

    fn use_case(
        characters: MockCharacterRepo,
        professions: MockProfessionRepo,
        text: Arc<dyn TextLookupPort>,
    ) -> DescribeCharacter {
        DescribeCharacter::new(
            Arc::new(characters),
            Arc::new(professions),
            text,
            Arc::new(FixedClock(fixed_time())),
            EngineConfig::default(),
        )
    }

    #[tokio::test]
    async fn knight_summary_carries_translated_title() {
        let character = knight(12)
            .with_nickname(Nickname::new("Ravena").unwrap())
            .with_experience(600)
            .with_health(ResourcePool::new(75, 150));
        let (characters, professions) = repos(character);

        let mut text = MockTextLookupPort::new();
        text.expect_translate()
            .withf(|key| key == "titles.2")
            .returning(|_| "Aprendiz".to_string());

        let summary = use_case(characters, professions, Arc::new(text))
            .execute(CharacterId::new())
            .await
            .unwrap();

        assert_eq!(summary.display_name, "Ravena");
        assert_eq!(summary.title_tier, TitleTier::Apprentice);
        assert_eq!(summary.profession_name, "Cavaleiro Aprendiz");
        assert_eq!(summary.experience_percentage, 50);
        assert_eq!(summary.health.percentage, 50);
        // ceil(1 * 0.2 + 10 * 12 * 0.15) = ceil(18.2)
        assert_eq!(summary.melee_defence, 19);
        assert!(!summary.is_max_level);
    }

    #[tokio::test]
    async fn apprentice_profession_shows_bare_name() {
        let (characters, professions) = repos(apprentice());

        let summary = use_case(characters, professions, Arc::new(NoopTextLookup::new()))
            .execute(CharacterId::new())
            .await
            .unwrap();

        assert_eq!(summary.display_name, "Andarilho Misterioso");
        assert_eq!(summary.profession_name, "Aprendiz");
        assert_eq!(summary.title, "titles.1");
    }

    #[tokio::test]
    async fn summary_serializes_camel_case() {
        let (characters, professions) = repos(apprentice());

        let summary = use_case(characters, professions, Arc::new(NoopTextLookup::new()))
            .execute(CharacterId::new())
            .await
            .unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["meleeDefence"], 1);
        assert_eq!(json["health"]["percentage"], 100);
        assert_eq!(json["trainingFinished"], false);
    }

    #[tokio::test]
    async fn missing_profession_row_returns_error() {
        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(|_| Ok(Some(apprentice())));
        let mut professions = MockProfessionRepo::new();
        professions.expect_get().returning(|_| Ok(None));

        let result = use_case(characters, professions, Arc::new(NoopTextLookup::new()))
            .execute(CharacterId::new())
            .await;

        assert!(matches!(result, Err(ProfileError::ProfessionNotFound(_))));
    }
}
