//! Character rules for the Bravura browser RPG.
//!
//! Pure and synchronous: no I/O, no clock reads, no ambient randomness. Time
//! arrives as `now: DateTime<Utc>` and dice as `roll(min, max)` closures, so the
//! engine crate decides where both come from.

pub mod aggregates;
pub mod combat;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::Character;
pub use combat::{eligible_creature_level, strike, Defender};
pub use entities::{
    order_by_level_desc, Creature, Mastery, Potion, Profession, ProfessionKind, MAGE_MANA_COST,
    TRAINING_BASE_SECONDS, TRAINING_SECONDS_PER_LEVEL,
};
pub use error::DomainError;
pub use events::{
    DomainEvent, ExperienceOutcome, LevelUpOutcome, PotionUseOutcome, PurchaseOutcome,
    StrikeOutcome, TrainingCompleted, TrainingStarted,
};
pub use ids::{CharacterId, CreatureId, MasteryId, PotionId, ProfessionId};
pub use value_objects::{
    MasteryField, MasteryLevels, Nickname, PotionKind, PotionStock, ResourcePool, TitleTier,
    TrainingState, ANONYMOUS_NICKNAME,
};
