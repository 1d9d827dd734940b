//! Reference entities - rows the character rules read but never own
//!
//! Professions, masteries and potions are seeded reference data. Creatures are
//! opponents whose health a strike reduces.

pub mod creature;
pub mod mastery;
pub mod potion;
pub mod profession;

pub use creature::{order_by_level_desc, Creature};
pub use mastery::{Mastery, TRAINING_BASE_SECONDS, TRAINING_SECONDS_PER_LEVEL};
pub use potion::Potion;
pub use profession::{Profession, ProfessionKind, MAGE_MANA_COST};
