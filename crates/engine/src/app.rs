//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::EngineConfig,
    locks::{CharacterLocks, CreatureLocks},
    memory::InMemoryStore,
    ports::{
        CharacterRepo, ClockPort, CreatureRepo, EventPublisherPort, MasteryRepo, PotionRepo,
        ProfessionRepo, RandomPort, TextLookupPort,
    },
};
use crate::use_cases::{
    self, combat, economy, profile, progression, registration, training,
};

/// Main application state.
///
/// Holds the storage ports, the lock registries and every use case.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub locks: Arc<CharacterLocks>,
    pub creature_locks: Arc<CreatureLocks>,
    pub config: EngineConfig,
}

/// Container for all storage ports, injected as trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
    pub creature: Arc<dyn CreatureRepo>,
    pub profession: Arc<dyn ProfessionRepo>,
    pub mastery: Arc<dyn MasteryRepo>,
    pub potion: Arc<dyn PotionRepo>,
}

impl Repositories {
    /// Every port backed by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            character: store.clone(),
            creature: store.clone(),
            profession: store.clone(),
            mastery: store.clone(),
            potion: store,
        }
    }
}

/// Non-storage collaborators.
pub struct Services {
    pub clock: Arc<dyn ClockPort>,
    pub random: Arc<dyn RandomPort>,
    pub events: Arc<dyn EventPublisherPort>,
    pub text: Arc<dyn TextLookupPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub registration: use_cases::RegistrationUseCases,
    pub combat: use_cases::CombatUseCases,
    pub progression: use_cases::ProgressionUseCases,
    pub economy: use_cases::EconomyUseCases,
    pub training: use_cases::TrainingUseCases,
    pub profile: use_cases::ProfileUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories, services: Services, config: EngineConfig) -> Self {
        let Services {
            clock,
            random,
            events,
            text,
        } = services;
        let locks = Arc::new(CharacterLocks::new());
        let creature_locks = Arc::new(CreatureLocks::new());

        let registration = use_cases::RegistrationUseCases::new(Arc::new(
            registration::RegisterCharacter::new(
                repos.character.clone(),
                events.clone(),
                clock.clone(),
            ),
        ));

        let combat = use_cases::CombatUseCases::new(
            Arc::new(combat::AttackCreature::new(
                repos.character.clone(),
                repos.creature.clone(),
                random.clone(),
                locks.clone(),
                creature_locks.clone(),
            )),
            Arc::new(combat::Duel::new(
                repos.character.clone(),
                random.clone(),
                locks.clone(),
            )),
            Arc::new(combat::ListOpponents::new(
                repos.character.clone(),
                repos.creature.clone(),
            )),
            Arc::new(combat::ListDuelOpponents::new(repos.character.clone())),
        );

        let progression = use_cases::ProgressionUseCases::new(
            Arc::new(progression::GainExperience::new(
                repos.character.clone(),
                events.clone(),
                locks.clone(),
                config,
            )),
            Arc::new(progression::LevelUp::new(
                repos.character.clone(),
                events.clone(),
                locks.clone(),
                config,
            )),
            Arc::new(progression::ResetCharacter::new(
                repos.character.clone(),
                events.clone(),
                locks.clone(),
            )),
            Arc::new(progression::Regenerate::new(
                repos.character.clone(),
                locks.clone(),
            )),
        );

        let economy = use_cases::EconomyUseCases::new(
            Arc::new(economy::BuyPotion::new(
                repos.character.clone(),
                repos.potion.clone(),
                locks.clone(),
            )),
            Arc::new(economy::UsePotion::new(
                repos.character.clone(),
                repos.potion.clone(),
                locks.clone(),
            )),
        );

        let training = use_cases::TrainingUseCases::new(
            Arc::new(training::StartTraining::new(
                repos.character.clone(),
                repos.mastery.clone(),
                clock.clone(),
                locks.clone(),
            )),
            Arc::new(training::FinishTraining::new(
                repos.character.clone(),
                repos.mastery.clone(),
                clock.clone(),
                events,
                locks.clone(),
            )),
            Arc::new(training::TrainingStatus::new(
                repos.character.clone(),
                clock.clone(),
            )),
        );

        let profile = use_cases::ProfileUseCases::new(Arc::new(profile::DescribeCharacter::new(
            repos.character.clone(),
            repos.profession.clone(),
            text,
            clock,
            config,
        )));

        Self {
            repositories: repos,
            use_cases: UseCases {
                registration,
                combat,
                progression,
                economy,
                training,
                profile,
            },
            locks,
            creature_locks,
            config,
        }
    }
}
