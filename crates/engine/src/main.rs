//! Bravura Engine - headless simulation runner.
//!
//! Seeds an in-memory world, registers a character and lets it hunt for a
//! number of rounds, logging every step. Prints the final profile as JSON.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bravura_domain::{Creature, PotionKind};
use bravura_engine::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    config::{self, EngineConfig},
    events::{NoopTextLookup, TracingEventPublisher},
    memory::InMemoryStore,
    ports::{CreatureRepo, RandomPort},
};
use bravura_engine::{App, Repositories, Services};

const DEFAULT_ROUNDS: u32 = 20;

const BESTIARY: [(&str, u32, i32, i32, i32); 6] = [
    ("Rato Gigante", 1, 25, 1, 0),
    ("Lobo", 2, 45, 2, 1),
    ("Goblin", 3, 60, 3, 2),
    ("Esqueleto", 5, 90, 5, 6),
    ("Orc", 8, 150, 8, 4),
    ("Troll", 12, 260, 12, 8),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may set RUST_LOG
    let dotenv = config::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bravura_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        tracing::warn!(error = %e, "Failed to load .env file");
    }
    let config = EngineConfig::from_env();

    tracing::info!(max_level = config.max_level, "Starting Bravura simulation");

    let rounds = std::env::var("SIMULATION_ROUNDS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);

    let random: Arc<dyn RandomPort> = match std::env::var("SIMULATION_SEED") {
        Ok(raw) => {
            let seed = raw.parse().context("SIMULATION_SEED must be a u64")?;
            Arc::new(SeededRandom::new(seed))
        }
        Err(_) => Arc::new(SystemRandom::new()),
    };

    let store = Arc::new(InMemoryStore::seeded());
    let bestiary: Vec<Creature> = BESTIARY
        .into_iter()
        .map(|(name, level, health, armor, magic_resistance)| {
            Creature::new(name, level, health)
                .with_armor(armor)
                .with_magic_resistance(magic_resistance)
        })
        .collect();
    for creature in &bestiary {
        CreatureRepo::save(store.as_ref(), creature).await?;
    }

    let app = App::new(
        Repositories::in_memory(store.clone()),
        Services {
            clock: Arc::new(SystemClock::new()),
            random,
            events: Arc::new(TracingEventPublisher::new()),
            text: Arc::new(NoopTextLookup::new()),
        },
        config,
    );

    let nickname = std::env::var("SIMULATION_NICKNAME").ok();
    let character = app.use_cases.registration.register.execute(nickname).await?;
    let id = character.id();

    let life_potion = store
        .potion_id_for(PotionKind::Life)
        .context("life potion missing from seed data")?;

    for round in 1..=rounds {
        let opponents = app.use_cases.combat.opponents.execute(id).await?;
        let Some(target) = opponents.first() else {
            tracing::warn!("No creatures in reach, stopping");
            break;
        };

        let result = app.use_cases.combat.attack.execute(id, target.id).await?;
        tracing::info!(
            round,
            creature = %result.creature.name,
            damage = result.outcome.damage,
            critical = result.outcome.critical,
            "Round fought"
        );

        if !result.outcome.defender_standing {
            let reward = result.creature.level * 25;
            app.use_cases
                .progression
                .gain_experience
                .execute(id, reward)
                .await?;
            // Respawn at full health
            if let Some(fresh) = bestiary.iter().find(|c| c.id == result.creature.id) {
                CreatureRepo::save(store.as_ref(), fresh).await?;
            }
        }

        if result.character.health_percentage() < 40 {
            app.use_cases
                .economy
                .buy_potion
                .execute(id, life_potion, 1)
                .await?;
            app.use_cases
                .economy
                .use_potion
                .execute(id, life_potion)
                .await?;
        }

        app.use_cases.progression.regenerate.execute(id).await?;
    }

    let summary = app.use_cases.profile.describe.execute(id).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
