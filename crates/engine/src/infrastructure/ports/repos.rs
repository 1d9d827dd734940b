//! Repository port traits for storage access.
//!
//! Getters return `Ok(None)` for a missing row; use cases turn that into a
//! typed not-found error carrying the id.

use async_trait::async_trait;
use bravura_domain::{
    Character, CharacterId, Creature, CreatureId, Mastery, MasteryId, Potion, PotionId,
    Profession, ProfessionId,
};

use super::error::RepoError;

// =============================================================================
// Aggregate Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    async fn list_all(&self) -> Result<Vec<Character>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepo: Send + Sync {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;
    async fn save(&self, creature: &Creature) -> Result<(), RepoError>;

    /// Creatures with `level <= max_level`, highest level first.
    async fn list_up_to_level(&self, max_level: u32) -> Result<Vec<Creature>, RepoError>;
}

// =============================================================================
// Reference Data (read-only)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfessionRepo: Send + Sync {
    async fn get(&self, id: ProfessionId) -> Result<Option<Profession>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MasteryRepo: Send + Sync {
    async fn get(&self, id: MasteryId) -> Result<Option<Mastery>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PotionRepo: Send + Sync {
    async fn get(&self, id: PotionId) -> Result<Option<Potion>, RepoError>;
}
