//! E2E scenarios: the full `App` over `InMemoryStore`, with a steppable clock
//! and scripted dice.


use std::sync::{Arc, Mutex};

use bravura_domain::{Character, CharacterId};
use chrono::{DateTime, Duration, Utc};

use crate::infrastructure::clock::FixedRandom;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::events::{NoopTextLookup, RecordingEventPublisher};
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::ports::{CharacterRepo, ClockPort, RandomPort};
use crate::test_fixtures::fixed_time;
use crate::{App, Repositories, Services};

/// Clock that only moves when told to.
pub(crate) struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl ClockPort for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub(crate) struct TestWorld {
    pub app: App,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<SteppingClock>,
    pub events: Arc<RecordingEventPublisher>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::build(Arc::new(FixedRandom(0)), EngineConfig::default())
    }

    pub fn build(random: Arc<dyn RandomPort>, config: EngineConfig) -> Self {
        Self::build_with(random, config, |repos, _| repos)
    }

    /// Like [`TestWorld::build`], but lets a test swap individual ports while
    /// the rest stay on the shared store.
    pub fn build_with(
        random: Arc<dyn RandomPort>,
        config: EngineConfig,
        customize: impl FnOnce(Repositories, &Arc<InMemoryStore>) -> Repositories,
    ) -> Self {
        let store = Arc::new(InMemoryStore::seeded());
        let clock = Arc::new(SteppingClock::new(fixed_time()));
        let events = Arc::new(RecordingEventPublisher::new());
        let repositories = customize(Repositories::in_memory(store.clone()), &store);

        let app = App::new(
            repositories,
            Services {
                clock: clock.clone(),
                random,
                events: events.clone(),
                text: Arc::new(NoopTextLookup::new()),
            },
            config,
        );

        Self {
            app,
            store,
            clock,
            events,
        }
    }

    /// Persist a prepared character directly, bypassing registration.
    pub async fn put(&self, character: Character) -> CharacterId {
        let id = character.id();
        CharacterRepo::save(self.store.as_ref(), &character)
            .await
            .unwrap();
        id
    }

    pub async fn load(&self, id: CharacterId) -> Character {
        CharacterRepo::get(self.store.as_ref(), id)
            .await
            .unwrap()
            .expect("character should exist")
    }
}
