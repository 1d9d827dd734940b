//! Register character use case.

use std::sync::Arc;

use bravura_domain::{Character, DomainEvent, Nickname};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, EventPublisherPort};
use crate::use_cases::publish_event;

use super::error::RegistrationError;

/// Register a new character.
///
/// Orchestrates: nickname validation, baseline character creation, save,
/// `CharacterRegistered` publication.
pub struct RegisterCharacter {
    character_repo: Arc<dyn CharacterRepo>,
    events: Arc<dyn EventPublisherPort>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterCharacter {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        events: Arc<dyn EventPublisherPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            events,
            clock,
        }
    }

    /// Execute the registration.
    ///
    /// # Arguments
    /// * `nickname` - Optional display name; `None` or blank registers anonymously
    ///
    /// # Returns
    /// * `Ok(Character)` - The saved baseline character
    /// * `Err(RegistrationError)` - Nickname rejected or storage failed
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, nickname: Option<String>) -> Result<Character, RegistrationError> {
        let nickname = nickname
            .filter(|raw| !raw.trim().is_empty())
            .map(Nickname::new)
            .transpose()?;

        let now = self.clock.now();
        let character = Character::new(nickname, now);
        self.character_repo.save(&character).await?;

        tracing::info!(
            character_id = %character.id(),
            display_name = character.display_name(),
            "Character registered"
        );

        publish_event(
            self.events.as_ref(),
            DomainEvent::CharacterRegistered {
                character_id: character.id(),
                nickname: character.nickname().map(|n| n.as_str().to_string()),
                registered_at: now,
            },
        )
        .await;

        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{
        MockCharacterRepo, MockEventPublisherPort, PublishError, RepoError,
    };
    use crate::test_fixtures::fixed_time;

    fn use_case(repo: MockCharacterRepo, events: MockEventPublisherPort) -> RegisterCharacter {
        RegisterCharacter::new(
            Arc::new(repo),
            Arc::new(events),
            Arc::new(FixedClock(fixed_time())),
        )
    }

    #[tokio::test]
    async fn registers_baseline_character_and_publishes() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save()
            .withf(|c: &Character| c.level() == 1 && c.gold() == 100 && c.has_nickname())
            .times(1)
            .returning(|_| Ok(()));

        let mut events = MockEventPublisherPort::new();
        events
            .expect_publish()
            .withf(|e| {
                matches!(
                    e,
                    DomainEvent::CharacterRegistered { nickname: Some(n), registered_at, .. }
                        if n == "Ravena" && *registered_at == fixed_time()
                )
            })
            .times(1)
            .returning(|_| Ok(()));

        let character = use_case(repo, events)
            .execute(Some("  Ravena ".to_string()))
            .await
            .unwrap();

        assert_eq!(character.display_name(), "Ravena");
        assert_eq!(character.created_at(), fixed_time());
    }

    #[tokio::test]
    async fn blank_nickname_registers_anonymously() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().returning(|_| Ok(()));
        let mut events = MockEventPublisherPort::new();
        events
            .expect_publish()
            .withf(|e| matches!(e, DomainEvent::CharacterRegistered { nickname: None, .. }))
            .returning(|_| Ok(()));

        let character = use_case(repo, events)
            .execute(Some("   ".to_string()))
            .await
            .unwrap();

        assert_eq!(character.display_name(), "Andarilho Misterioso");
    }

    #[tokio::test]
    async fn oversized_nickname_is_rejected_before_saving() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();
        let mut events = MockEventPublisherPort::new();
        events.expect_publish().never();

        let result = use_case(repo, events).execute(Some("x".repeat(200))).await;

        assert!(matches!(result, Err(RegistrationError::Validation(_))));
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_registration() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().returning(|_| Ok(()));
        let mut events = MockEventPublisherPort::new();
        events
            .expect_publish()
            .returning(|_| Err(PublishError::DeliveryFailed("offline".to_string())));

        let result = use_case(repo, events).execute(None).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn storage_failure_is_propagated() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepoError::database("save_character", "down")));
        let mut events = MockEventPublisherPort::new();
        events.expect_publish().never();

        let result = use_case(repo, events).execute(None).await;

        assert!(matches!(result, Err(RegistrationError::Repo(_))));
    }
}
