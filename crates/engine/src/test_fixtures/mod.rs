//! Common test helpers: fixed time, reference rows and character builders.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{fixed_time, knight};
//!
//! #[tokio::test]
//! async fn test_knight_attacks() {
//!     let character = knight(5);
//!     // ... test logic
//! }
//! ```

use chrono::{DateTime, TimeZone, Utc};

use bravura_domain::{
    Character, Creature, Mastery, MasteryField, MasteryId, Potion, PotionId, PotionKind,
    Profession, ProfessionKind,
};

// =============================================================================
// Time
// =============================================================================

pub fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

// =============================================================================
// Reference Rows
// =============================================================================

pub fn profession(kind: ProfessionKind) -> Profession {
    let name = match kind {
        ProfessionKind::Apprentice => "Aprendiz",
        ProfessionKind::Knight => "Cavaleiro",
        ProfessionKind::Mage => "Mago",
        ProfessionKind::Hunter => "Caçador",
    };
    Profession::new(kind.id(), name)
}

pub fn life_potion() -> Potion {
    Potion::new(PotionId::new(1), "Poção de Vida", 20, PotionKind::Life)
}

pub fn sword_mastery() -> Mastery {
    Mastery::new(MasteryId::new(1), "Espada", MasteryField::Sword)
}

pub fn rat() -> Creature {
    Creature::new("Rato", 1, 30).with_armor(1)
}

// =============================================================================
// Characters
// =============================================================================

pub fn apprentice() -> Character {
    Character::new(None, fixed_time())
}

/// Knight with strength 10 and sword 3 at the given level.
pub fn knight(level: u32) -> Character {
    Character::new(None, fixed_time())
        .with_profession(ProfessionKind::Knight.id())
        .with_level(level)
        .with_mastery(MasteryField::Strength, 10)
        .with_mastery(MasteryField::Sword, 3)
}
